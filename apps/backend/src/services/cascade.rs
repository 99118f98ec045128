//! Ordered teardown of a room and everything it owns.

use sea_orm::DatabaseTransaction;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::AppError;
use crate::repos::{memberships, rooms, rounds, teams};

/// Rows removed per table by one teardown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeardownReport {
    pub room_memberships: u64,
    pub team_memberships: u64,
    pub rounds: u64,
    pub teams: u64,
    pub rooms: u64,
}

pub struct CascadeDeletionOrchestrator;

impl CascadeDeletionOrchestrator {
    pub fn new() -> Self {
        Self
    }

    /// Delete a room's dependents, then the room.
    ///
    /// Callers must have passed the admin gate in the same transaction. Child
    /// rows go before their parents, so a failure at any step (including a
    /// foreign key still pointing at a row) aborts the transaction with
    /// nothing removed.
    pub async fn teardown(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
    ) -> Result<TeardownReport, AppError> {
        let mut report = TeardownReport {
            room_memberships: memberships::delete_for_room(txn, room_id).await?,
            ..TeardownReport::default()
        };

        let team_ids = teams::ids_for_room(txn, room_id).await?;
        debug!(room_id, teams = team_ids.len(), "resolved teams for teardown");

        report.team_memberships = teams::delete_memberships_for_teams(txn, &team_ids).await?;
        report.rounds = rounds::delete_for_room(txn, room_id).await?;
        report.teams = teams::delete_for_room(txn, room_id).await?;
        report.rooms = rooms::delete_room(txn, room_id).await?;

        info!(
            room_id,
            room_memberships = report.room_memberships,
            team_memberships = report.team_memberships,
            rounds = report.rounds,
            teams = report.teams,
            "room torn down"
        );
        Ok(report)
    }
}

impl Default for CascadeDeletionOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
