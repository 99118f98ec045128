use crate::auth::Principal;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::users::UserSummary;
use crate::services::views::{JoinResult, RoomView};
use crate::services::{MembershipCoordinator, RoomRegistry, TeardownReport};
use crate::state::app_state::AppState;

pub async fn create_room(
    state: &AppState,
    principal: &Principal,
    name: &str,
    is_private: bool,
) -> Result<RoomView, AppError> {
    let principal = principal.clone();
    let name = name.to_owned();
    with_txn(state, move |txn| {
        Box::pin(async move {
            RoomRegistry::new()
                .create(txn, &principal, &name, is_private)
                .await
        })
    })
    .await
}

pub async fn list_public_rooms(
    state: &AppState,
    principal: &Principal,
) -> Result<Vec<RoomView>, AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move { RoomRegistry::new().list_public(txn, &principal).await })
    })
    .await
}

pub async fn update_room(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
    name: &str,
    is_private: bool,
    points_per_word: i32,
) -> Result<RoomView, AppError> {
    let principal = principal.clone();
    let name = name.to_owned();
    with_txn(state, move |txn| {
        Box::pin(async move {
            RoomRegistry::new()
                .update(txn, &principal, room_id, &name, is_private, points_per_word)
                .await
        })
    })
    .await
}

pub async fn join_room(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
    invitation_code: Option<&str>,
) -> Result<JoinResult, AppError> {
    let principal = principal.clone();
    let code = invitation_code.map(str::to_owned);
    with_txn(state, move |txn| {
        Box::pin(async move {
            RoomRegistry::new()
                .join(txn, &principal, room_id, code.as_deref())
                .await
        })
    })
    .await
}

pub async fn leave_room(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
) -> Result<(), AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move { RoomRegistry::new().leave(txn, &principal, room_id).await })
    })
    .await
}

pub async fn close_room(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
) -> Result<TeardownReport, AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move { RoomRegistry::new().close(txn, &principal, room_id).await })
    })
    .await
}

pub async fn kick_participant(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
    target_user_id: i64,
) -> Result<(), AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            RoomRegistry::new()
                .kick(txn, &principal, room_id, target_user_id)
                .await
        })
    })
    .await
}

pub async fn pass_admin_status(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
    new_admin_id: i64,
) -> Result<RoomView, AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            RoomRegistry::new()
                .pass_admin_status(txn, &principal, room_id, new_admin_id)
                .await
        })
    })
    .await
}

pub async fn list_members(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
) -> Result<Vec<UserSummary>, AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            MembershipCoordinator::new()
                .list_members(txn, &principal, room_id)
                .await
        })
    })
    .await
}
