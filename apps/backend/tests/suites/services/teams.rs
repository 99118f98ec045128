use sea_orm::TransactionTrait;
use wordroom_backend::error::AppError;
use wordroom_backend::errors::ErrorCode;
use wordroom_backend::repos::teams;
use wordroom_backend::services::{RoomRegistry, TeamCoordinator};
use wordroom_backend::Principal;
use wordroom_backend::AppState;

use crate::support::{create_principal, test_state};

struct Fixture {
    alice: Principal,
    bob: Principal,
    room_id: i64,
}

/// Alice owns a public room; both alice and bob have joined it.
async fn fixture(state: &AppState) -> Result<Fixture, AppError> {
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let bob = create_principal(&txn, "bob").await?;
    let registry = RoomRegistry::new();
    let room = registry.create(&txn, &alice, "Lobby", false).await?;
    registry.join(&txn, &alice, room.id, None).await?;
    registry.join(&txn, &bob, room.id, None).await?;
    txn.commit().await?;
    Ok(Fixture {
        alice,
        bob,
        room_id: room.id,
    })
}

#[tokio::test]
async fn only_the_admin_creates_teams() -> Result<(), AppError> {
    let state = test_state().await;
    let f = fixture(&state).await?;
    let coordinator = TeamCoordinator::new();

    let txn = state.db().begin().await?;
    let err = coordinator
        .create_team(&txn, &f.bob, f.room_id, "Blues")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAdmin);

    let err = coordinator
        .create_team(&txn, &f.alice, f.room_id + 50, "Blues")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoomNotFound);

    let err = coordinator
        .create_team(&txn, &f.alice, f.room_id, "  ")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTeamName);
    txn.rollback().await?;

    let txn = state.db().begin().await?;
    let team = coordinator
        .create_team(&txn, &f.alice, f.room_id, "Blues")
        .await?;
    assert_eq!(team.room_id, f.room_id);
    assert_eq!(team.name, "Blues");
    assert!(team.members.is_empty());
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn joining_a_second_team_switches() -> Result<(), AppError> {
    let state = test_state().await;
    let f = fixture(&state).await?;
    let coordinator = TeamCoordinator::new();

    let txn = state.db().begin().await?;
    let reds = coordinator
        .create_team(&txn, &f.alice, f.room_id, "Reds")
        .await?;
    let blues = coordinator
        .create_team(&txn, &f.alice, f.room_id, "Blues")
        .await?;

    coordinator.join_team(&txn, &f.bob, reds.id).await?;
    let moved = coordinator.join_team(&txn, &f.bob, blues.id).await?;
    assert_eq!(moved.team_id, blues.id);

    let held = teams::find_membership_by_user(&txn, f.bob.id)
        .await?
        .expect("bob is on a team");
    assert_eq!(held.team_id, blues.id);

    let listed = coordinator.list_teams(&txn, &f.bob, f.room_id).await?;
    assert_eq!(listed.len(), 2);
    assert!(listed[0].members.is_empty());
    assert_eq!(listed[1].members.len(), 1);
    assert_eq!(listed[1].members[0].id, f.bob.id);

    // Rejoining the same team is a reassignment too.
    coordinator.join_team(&txn, &f.bob, blues.id).await?;
    let listed = coordinator.list_teams(&txn, &f.bob, f.room_id).await?;
    assert_eq!(listed[1].members.len(), 1);
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn team_join_needs_room_membership() -> Result<(), AppError> {
    let state = test_state().await;
    let f = fixture(&state).await?;
    let coordinator = TeamCoordinator::new();

    let txn = state.db().begin().await?;
    let outsider = create_principal(&txn, "outsider").await?;
    let reds = coordinator
        .create_team(&txn, &f.alice, f.room_id, "Reds")
        .await?;
    txn.commit().await?;

    let txn = state.db().begin().await?;
    let err = coordinator
        .join_team(&txn, &outsider, reds.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAMember);

    let err = coordinator
        .join_team(&txn, &f.bob, reds.id + 99)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TeamNotFound);

    let err = coordinator
        .list_teams(&txn, &outsider, f.room_id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAMember);
    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn leaving_a_team_not_held_is_not_found() -> Result<(), AppError> {
    let state = test_state().await;
    let f = fixture(&state).await?;
    let coordinator = TeamCoordinator::new();

    let txn = state.db().begin().await?;
    let reds = coordinator
        .create_team(&txn, &f.alice, f.room_id, "Reds")
        .await?;
    let blues = coordinator
        .create_team(&txn, &f.alice, f.room_id, "Blues")
        .await?;
    coordinator.join_team(&txn, &f.bob, reds.id).await?;

    let err = coordinator
        .leave_team(&txn, &f.bob, blues.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TeamMembershipNotFound);

    coordinator.leave_team(&txn, &f.bob, reds.id).await?;
    let err = coordinator
        .leave_team(&txn, &f.bob, reds.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TeamMembershipNotFound);
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn closing_a_team_removes_its_memberships() -> Result<(), AppError> {
    let state = test_state().await;
    let f = fixture(&state).await?;
    let coordinator = TeamCoordinator::new();

    let txn = state.db().begin().await?;
    let reds = coordinator
        .create_team(&txn, &f.alice, f.room_id, "Reds")
        .await?;
    coordinator.join_team(&txn, &f.bob, reds.id).await?;
    coordinator.join_team(&txn, &f.alice, reds.id).await?;
    txn.commit().await?;

    let txn = state.db().begin().await?;
    let err = coordinator
        .close_team(&txn, &f.bob, reds.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAdmin);
    txn.rollback().await?;

    let txn = state.db().begin().await?;
    coordinator.close_team(&txn, &f.alice, reds.id).await?;
    assert!(teams::find_by_id(&txn, reds.id).await?.is_none());
    assert!(teams::find_membership_by_user(&txn, f.bob.id)
        .await?
        .is_none());
    assert!(teams::find_membership_by_user(&txn, f.alice.id)
        .await?
        .is_none());

    let err = coordinator
        .close_team(&txn, &f.alice, reds.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TeamNotFound);
    txn.commit().await?;
    Ok(())
}
