use sea_orm::TransactionTrait;
use wordroom_backend::adapters::rooms_sea::{self, AdminClaim, RoomCreate, RoomSettings};
use wordroom_backend::error::AppError;

use crate::support::{create_principal, test_state};

#[tokio::test]
async fn create_defaults_and_builder() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;

    let room = rooms_sea::create_room(&txn, RoomCreate::new("Lobby", alice.id, "abcde")).await?;
    assert_eq!(room.creator_id, alice.id);
    assert_eq!(room.admin_id, alice.id);
    assert_eq!(room.points_per_word, 10);
    assert!(!room.is_private);
    assert_eq!(room.lock_version, 1);

    let custom = rooms_sea::create_room(
        &txn,
        RoomCreate::new("Vault", alice.id, "ZZZZZ")
            .private(true)
            .with_points(3),
    )
    .await?;
    assert!(custom.is_private);
    assert_eq!(custom.points_per_word, 3);

    let public = rooms_sea::list_public(&txn).await?;
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, room.id);
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn claim_distinguishes_missing_from_not_admin() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let bob = create_principal(&txn, "bob").await?;
    let room = rooms_sea::create_room(&txn, RoomCreate::new("Lobby", alice.id, "abcde")).await?;

    assert_eq!(
        rooms_sea::claim_admin(&txn, room.id, bob.id).await?,
        AdminClaim::NotAdmin
    );
    assert_eq!(
        rooms_sea::claim_admin(&txn, room.id + 1, alice.id).await?,
        AdminClaim::Missing
    );

    match rooms_sea::claim_admin(&txn, room.id, alice.id).await? {
        AdminClaim::Granted(claimed) => {
            assert_eq!(claimed.lock_version, room.lock_version + 1);
            assert!(claimed.updated_at >= room.updated_at);
        }
        other => panic!("expected a granted claim, got {other:?}"),
    }
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn guarded_writes_leave_the_row_alone_when_denied() -> Result<(), AppError> {
    let state = test_state().await;
    let txn = state.db().begin().await?;
    let alice = create_principal(&txn, "alice").await?;
    let bob = create_principal(&txn, "bob").await?;
    let room = rooms_sea::create_room(&txn, RoomCreate::new("Lobby", alice.id, "abcde")).await?;

    let settings = RoomSettings {
        name: "Taken".into(),
        is_private: true,
        points_per_word: 99,
    };
    assert_eq!(
        rooms_sea::update_settings(&txn, room.id, bob.id, settings.clone()).await?,
        AdminClaim::NotAdmin
    );
    assert_eq!(
        rooms_sea::set_admin(&txn, room.id, bob.id, bob.id).await?,
        AdminClaim::NotAdmin
    );

    let unchanged = rooms_sea::find_by_id(&txn, room.id)
        .await?
        .expect("room exists");
    assert_eq!(unchanged, room);

    let AdminClaim::Granted(updated) =
        rooms_sea::update_settings(&txn, room.id, alice.id, settings).await?
    else {
        panic!("admin update should be granted");
    };
    assert_eq!(updated.name, "Taken");
    assert!(updated.is_private);
    assert_eq!(updated.points_per_word, 99);

    let AdminClaim::Granted(moved) = rooms_sea::set_admin(&txn, room.id, alice.id, bob.id).await?
    else {
        panic!("admin transfer should be granted");
    };
    assert_eq!(moved.admin_id, bob.id);
    assert_eq!(moved.creator_id, alice.id);
    assert_eq!(moved.lock_version, room.lock_version + 2);
    txn.commit().await?;
    Ok(())
}
