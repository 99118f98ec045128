use sea_orm::TransactionTrait;
use wordroom_backend::error::AppError;
use wordroom_backend::errors::ErrorCode;
use wordroom_backend::services::{MembershipCoordinator, RoomRegistry};

use crate::support::{create_principal, test_state};

#[tokio::test]
async fn members_are_visible_to_members_only() -> Result<(), AppError> {
    let state = test_state().await;
    let registry = RoomRegistry::new();
    let coordinator = MembershipCoordinator::new();

    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let bob = create_principal(&txn, "bob").await?;
    let room = registry.create(&txn, &alice, "Lobby", false).await?;
    txn.commit().await?;

    let txn = state.db().begin().await?;
    let err = coordinator
        .list_members(&txn, &bob, room.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAMember);

    // Creating a room does not join it.
    let err = coordinator
        .list_members(&txn, &alice, room.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAMember);
    txn.rollback().await?;

    let txn = state.db().begin().await?;
    registry.join(&txn, &bob, room.id, None).await?;
    registry.join(&txn, &alice, room.id, None).await?;

    let members = coordinator.list_members(&txn, &bob, room.id).await?;
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["bob", "alice"]);
    assert_eq!(members[0].id, bob.id);
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn listing_a_missing_room_is_not_found() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let bob = create_principal(&txn, "bob").await?;

    let err = MembershipCoordinator::new()
        .list_members(&txn, &bob, 999)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoomNotFound);
    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn membership_of_another_room_does_not_count() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let bob = create_principal(&txn, "bob").await?;
    let registry = RoomRegistry::new();
    let mine = registry.create(&txn, &alice, "Mine", false).await?;
    let other = registry.create(&txn, &alice, "Other", false).await?;
    registry.join(&txn, &bob, other.id, None).await?;

    let err = MembershipCoordinator::new()
        .list_members(&txn, &bob, mine.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAMember);
    txn.rollback().await?;
    Ok(())
}
