//! Authorization predicates and the gates built on them.
//!
//! The predicates are pure. The gates bind a check to the current persisted
//! row inside the caller's transaction.

use sea_orm::DatabaseTransaction;
use tracing::warn;

use crate::auth::Principal;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::memberships::{self, RoomMembership};
use crate::repos::rooms::{self, Room};

pub fn is_admin(room: &Room, principal: &Principal) -> bool {
    room.admin_id == principal.id
}

pub fn is_member(room_id: i64, principal: &Principal, membership: Option<&RoomMembership>) -> bool {
    membership.is_some_and(|m| m.room_id == room_id && m.user_id == principal.id)
}

/// Public rooms ignore the supplied code; private rooms need an exact match.
pub fn can_join(room: &Room, invitation_code: Option<&str>) -> bool {
    !room.is_private || invitation_code == Some(room.invitation_code.as_str())
}

/// Admin gate for admin-only writes. On success the room row stays
/// write-locked until the transaction ends.
pub async fn claim_admin(
    txn: &DatabaseTransaction,
    room_id: i64,
    principal: &Principal,
) -> Result<Room, AppError> {
    match rooms::claim_admin(txn, room_id, principal.id).await {
        Ok(room) => Ok(room),
        Err(err @ DomainError::Forbidden(..)) => {
            warn!(room_id, user_id = principal.id, "admin check denied");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Membership gate for member-only reads and team joins.
pub async fn require_member(
    txn: &DatabaseTransaction,
    room_id: i64,
    principal: &Principal,
) -> Result<RoomMembership, AppError> {
    let membership = memberships::find_membership_shared(txn, room_id, principal.id).await?;
    match membership {
        Some(m) if is_member(room_id, principal, Some(&m)) => Ok(m),
        _ => {
            warn!(room_id, user_id = principal.id, "membership check denied");
            Err(DomainError::not_member().into())
        }
    }
}
