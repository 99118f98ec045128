use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use wordroom_backend::entities::{room_memberships, rooms, rounds, team_memberships, teams};
use wordroom_backend::error::AppError;
use wordroom_backend::errors::ErrorCode;
use wordroom_backend::services::{
    MembershipCoordinator, RoomRegistry, RoundStateMachine, TeamCoordinator, TeardownReport,
};

use crate::support::{create_principal, test_state};

#[tokio::test]
async fn close_tears_down_everything_the_room_owns() -> Result<(), AppError> {
    let state = test_state().await;
    let registry = RoomRegistry::new();
    let team_coordinator = TeamCoordinator::new();

    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let bob = create_principal(&txn, "bob").await?;
    let carol = create_principal(&txn, "carol").await?;

    let doomed = registry.create(&txn, &alice, "Doomed", false).await?;
    let survivor = registry.create(&txn, &carol, "Survivor", false).await?;

    registry.join(&txn, &alice, doomed.id, None).await?;
    registry.join(&txn, &bob, doomed.id, None).await?;
    registry.join(&txn, &carol, survivor.id, None).await?;

    let reds = team_coordinator
        .create_team(&txn, &alice, doomed.id, "Reds")
        .await?;
    team_coordinator
        .create_team(&txn, &alice, doomed.id, "Blues")
        .await?;
    let greens = team_coordinator
        .create_team(&txn, &carol, survivor.id, "Greens")
        .await?;
    team_coordinator.join_team(&txn, &bob, reds.id).await?;
    team_coordinator.join_team(&txn, &carol, greens.id).await?;

    RoundStateMachine::new()
        .start(&txn, &alice, doomed.id)
        .await?;
    RoundStateMachine::new()
        .start(&txn, &carol, survivor.id)
        .await?;
    txn.commit().await?;

    let txn = state.db().begin().await?;
    let err = registry.close(&txn, &bob, doomed.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAdmin);
    txn.rollback().await?;

    let txn = state.db().begin().await?;
    let report = registry.close(&txn, &alice, doomed.id).await?;
    txn.commit().await?;

    assert_eq!(
        report,
        TeardownReport {
            room_memberships: 2,
            team_memberships: 1,
            rounds: 1,
            teams: 2,
            rooms: 1,
        }
    );

    let db = state.db();
    assert_eq!(rooms::Entity::find().count(db).await?, 1);
    assert_eq!(teams::Entity::find().count(db).await?, 1);
    assert_eq!(team_memberships::Entity::find().count(db).await?, 1);
    assert_eq!(room_memberships::Entity::find().count(db).await?, 1);
    assert_eq!(rounds::Entity::find().count(db).await?, 1);

    // The freed users can join elsewhere.
    let txn = state.db().begin().await?;
    registry.join(&txn, &bob, survivor.id, None).await?;
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn a_closed_room_is_gone() -> Result<(), AppError> {
    let state = test_state().await;
    let registry = RoomRegistry::new();

    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let room = registry.create(&txn, &alice, "Brief", false).await?;
    registry.join(&txn, &alice, room.id, None).await?;
    let report = registry.close(&txn, &alice, room.id).await?;
    assert_eq!(report.rooms, 1);
    assert_eq!(report.teams, 0);
    assert_eq!(report.rounds, 0);
    txn.commit().await?;

    let txn = state.db().begin().await?;
    let err = registry.close(&txn, &alice, room.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoomNotFound);

    let err = MembershipCoordinator::new()
        .list_members(&txn, &alice, room.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoomNotFound);

    let err = TeamCoordinator::new()
        .list_teams(&txn, &alice, room.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoomNotFound);
    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn a_failed_close_leaves_nothing_removed() -> Result<(), AppError> {
    let state = test_state().await;
    let registry = RoomRegistry::new();

    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let room = registry.create(&txn, &alice, "Kept", false).await?;
    registry.join(&txn, &alice, room.id, None).await?;
    TeamCoordinator::new()
        .create_team(&txn, &alice, room.id, "Reds")
        .await?;
    txn.commit().await?;

    // Tear down inside a transaction that is then abandoned.
    let txn = state.db().begin().await?;
    registry.close(&txn, &alice, room.id).await?;
    txn.rollback().await?;

    let db = state.db();
    assert_eq!(rooms::Entity::find().count(db).await?, 1);
    assert_eq!(teams::Entity::find().count(db).await?, 1);
    assert_eq!(room_memberships::Entity::find().count(db).await?, 1);
    Ok(())
}
