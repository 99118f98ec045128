use crate::auth::Principal;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::views::RoundView;
use crate::services::RoundStateMachine;
use crate::state::app_state::AppState;

pub async fn start_round(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
) -> Result<RoundView, AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            RoundStateMachine::new()
                .start(txn, &principal, room_id)
                .await
        })
    })
    .await
}

pub async fn pause_round(
    state: &AppState,
    principal: &Principal,
    room_id: i64,
) -> Result<RoundView, AppError> {
    let principal = principal.clone();
    with_txn(state, move |txn| {
        Box::pin(async move {
            RoundStateMachine::new()
                .pause(txn, &principal, room_id)
                .await
        })
    })
    .await
}
