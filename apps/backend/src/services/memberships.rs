//! Room membership queries.

use sea_orm::DatabaseTransaction;
use tracing::debug;

use crate::auth::Principal;
use crate::error::AppError;
use crate::repos::users::UserSummary;
use crate::repos::{memberships, rooms};
use crate::services::authz;

pub struct MembershipCoordinator;

impl MembershipCoordinator {
    pub fn new() -> Self {
        Self
    }

    /// Members of a room, in join order. Only visible to members.
    pub async fn list_members(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
    ) -> Result<Vec<UserSummary>, AppError> {
        rooms::require_room_shared(txn, room_id).await?;
        authz::require_member(txn, room_id, principal).await?;

        let members = memberships::list_members(txn, room_id).await?;
        debug!(room_id, count = members.len(), "listed members");
        Ok(members)
    }
}

impl Default for MembershipCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
