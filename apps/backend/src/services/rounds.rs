//! The per-room round: absent, started or paused.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::auth::Principal;
use crate::error::AppError;
use crate::repos::rounds;
use crate::services::authz;
use crate::services::views::RoundView;

pub struct RoundStateMachine;

impl RoundStateMachine {
    pub fn new() -> Self {
        Self
    }

    /// Start or resume. An existing row is reused whatever its state.
    pub async fn start(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
    ) -> Result<RoundView, AppError> {
        authz::claim_admin(txn, room_id, principal).await?;

        let round = rounds::start(txn, room_id).await?;
        info!(room_id, round_id = round.id, user_id = principal.id, "round started");
        Ok(RoundView::from(round))
    }

    /// Fails NotFound unless the round is currently started.
    pub async fn pause(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
    ) -> Result<RoundView, AppError> {
        authz::claim_admin(txn, room_id, principal).await?;

        let round = rounds::pause(txn, room_id).await?;
        info!(room_id, round_id = round.id, user_id = principal.id, "round paused");
        Ok(RoundView::from(round))
    }
}

impl Default for RoundStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
