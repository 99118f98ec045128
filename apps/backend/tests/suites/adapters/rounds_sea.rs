use sea_orm::{ActiveModelTrait, NotSet, Set, TransactionTrait};
use time::OffsetDateTime;
use wordroom_backend::adapters::rooms_sea::{self, RoomCreate};
use wordroom_backend::adapters::rounds_sea::{self, RoundTransition};
use wordroom_backend::entities::rounds;
use wordroom_backend::entities::RoundState;
use wordroom_backend::error::AppError;
use wordroom_backend::errors::ErrorCode;

use crate::support::{create_principal, test_state};

#[tokio::test]
async fn start_inserts_once_then_updates() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let room = rooms_sea::create_room(&txn, RoomCreate::new("A", alice.id, "aaaaa")).await?;

    assert!(rounds_sea::find_for_room(&txn, room.id).await?.is_none());

    let first = rounds_sea::start(&txn, RoundTransition::now(room.id)).await?;
    let paused = rounds_sea::pause(&txn, RoundTransition::now(room.id))
        .await?
        .expect("started round pauses");
    assert_eq!(paused.id, first.id);
    assert_eq!(paused.state, RoundState::Paused);

    let again = rounds_sea::start(&txn, RoundTransition::now(room.id)).await?;
    assert_eq!(again.id, first.id);
    assert_eq!(again.state, RoundState::Started);
    assert_eq!(again.end_time, None);
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn pause_without_started_round_is_none() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let room = rooms_sea::create_room(&txn, RoomCreate::new("A", alice.id, "aaaaa")).await?;

    assert!(rounds_sea::pause(&txn, RoundTransition::now(room.id))
        .await?
        .is_none());

    rounds_sea::start(&txn, RoundTransition::now(room.id)).await?;
    rounds_sea::pause(&txn, RoundTransition::now(room.id)).await?;
    assert!(rounds_sea::pause(&txn, RoundTransition::now(room.id))
        .await?
        .is_none());
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn a_second_round_row_is_rejected_by_the_store() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let room = rooms_sea::create_room(&txn, RoomCreate::new("A", alice.id, "aaaaa")).await?;
    rounds_sea::start(&txn, RoundTransition::now(room.id)).await?;

    let err = rounds::ActiveModel {
        id: NotSet,
        room_id: Set(room.id),
        state: Set(RoundState::Started),
        start_time: Set(OffsetDateTime::now_utc()),
        end_time: Set(None),
    }
    .insert(&txn)
    .await
    .unwrap_err();

    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::RoundExists);
    txn.rollback().await?;
    Ok(())
}
