use sea_orm::TransactionTrait;
use wordroom_backend::adapters::rooms_sea::{self, RoomCreate};
use wordroom_backend::adapters::team_memberships_sea;
use wordroom_backend::adapters::teams_sea::{self, TeamCreate};
use wordroom_backend::error::AppError;
use wordroom_backend::errors::ErrorCode;

use crate::support::{create_principal, test_state};

#[tokio::test]
async fn one_team_per_user_is_a_store_constraint() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let room = rooms_sea::create_room(&txn, RoomCreate::new("A", alice.id, "aaaaa")).await?;
    let reds = teams_sea::create_team(&txn, TeamCreate::new(room.id, "Reds")).await?;
    let blues = teams_sea::create_team(&txn, TeamCreate::new(room.id, "Blues")).await?;

    team_memberships_sea::create_membership(&txn, reds.id, alice.id).await?;
    let err = team_memberships_sea::create_membership(&txn, blues.id, alice.id)
        .await
        .unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::AlreadyInTeam);
    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn bulk_deletes_scope_to_the_given_teams() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let bob = create_principal(&txn, "bob").await?;
    let room = rooms_sea::create_room(&txn, RoomCreate::new("A", alice.id, "aaaaa")).await?;
    let reds = teams_sea::create_team(&txn, TeamCreate::new(room.id, "Reds")).await?;
    let blues = teams_sea::create_team(&txn, TeamCreate::new(room.id, "Blues")).await?;

    team_memberships_sea::create_membership(&txn, reds.id, alice.id).await?;
    team_memberships_sea::create_membership(&txn, blues.id, bob.id).await?;

    assert_eq!(
        team_memberships_sea::delete_for_user_in_teams(&txn, alice.id, &[]).await?,
        0
    );
    assert_eq!(
        team_memberships_sea::delete_for_user_in_teams(&txn, alice.id, &[blues.id]).await?,
        0
    );
    assert_eq!(team_memberships_sea::delete_for_teams(&txn, &[]).await?, 0);

    let ids = teams_sea::ids_for_room(&txn, room.id).await?;
    assert_eq!(ids, vec![reds.id, blues.id]);

    let listed = team_memberships_sea::list_with_users(&txn, &ids).await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].0.team_id, reds.id);

    assert_eq!(team_memberships_sea::delete_for_teams(&txn, &ids).await?, 2);
    txn.commit().await?;
    Ok(())
}
