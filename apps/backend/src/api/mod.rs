//! Operation surface. Every function here is one transaction.
//!
//! Inputs are cloned into the transaction closure, which must own what it
//! captures.

pub mod rooms;
pub mod rounds;
pub mod teams;

pub use rooms::{
    close_room, create_room, join_room, kick_participant, leave_room, list_members,
    list_public_rooms, pass_admin_status, update_room,
};
pub use rounds::{pause_round, start_round};
pub use teams::{close_team, create_team, join_team, leave_team, list_teams};

pub use crate::services::views::{JoinResult, RoomView, RoundView, TeamView};
pub use crate::services::TeardownReport;

use crate::auth::{self, Principal, PrincipalResolver};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Resolve the caller from a raw `Authorization` value.
pub async fn authenticate<R>(
    state: &AppState,
    resolver: &R,
    authorization: Option<&str>,
) -> Result<Principal, AppError>
where
    R: PrincipalResolver + Clone + 'static,
{
    let resolver = resolver.clone();
    let authorization = authorization.map(str::to_owned);
    with_txn(state, move |txn| {
        Box::pin(async move { auth::authenticate(&resolver, txn, authorization.as_deref()).await })
    })
    .await
}
