use crate::auth::Principal;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::teams::TeamMembership;
use crate::services::views::TeamView;
use crate::services::TeamCoordinator;
use crate::state::app_state::AppState;

pub async fn create_team(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
    name: &str,
) -> Result<TeamView, AppError> {
    let principal = principal.clone();
    let name = name.to_owned();
    with_txn(state, move |txn| {
        Box::pin(async move {
            TeamCoordinator::new()
                .create_team(txn, &principal, room_id, &name)
                .await
        })
    })
    .await
}

pub async fn list_teams(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
) -> Result<Vec<TeamView>, AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            TeamCoordinator::new()
                .list_teams(txn, &principal, room_id)
                .await
        })
    })
    .await
}

pub async fn join_team(
    state: &AppState,
    principal: &Principal,
    team_id: i64,
) -> Result<TeamMembership, AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            TeamCoordinator::new()
                .join_team(txn, &principal, team_id)
                .await
        })
    })
    .await
}

pub async fn leave_team(
    state: &AppState,
    principal: &Principal,
    team_id: i64,
) -> Result<(), AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            TeamCoordinator::new()
                .leave_team(txn, &principal, team_id)
                .await
        })
    })
    .await
}

pub async fn close_team(
    state: &AppState,
    principal: &Principal,
    team_id: i64,
) -> Result<(), AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            TeamCoordinator::new()
                .close_team(txn, &principal, team_id)
                .await
        })
    })
    .await
}
