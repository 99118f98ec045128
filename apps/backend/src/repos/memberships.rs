//! Room membership repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::room_memberships_sea as memberships_adapter;
use crate::entities::room_memberships;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::users::UserSummary;

/// Room membership domain model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomMembership {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
}

impl From<room_memberships::Model> for RoomMembership {
    fn from(m: room_memberships::Model) -> Self {
        Self {
            id: m.id,
            room_id: m.room_id,
            user_id: m.user_id,
        }
    }
}

pub async fn create_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    user_id: i64,
) -> Result<RoomMembership, DomainError> {
    let m = memberships_adapter::create_membership(conn, room_id, user_id).await?;
    Ok(RoomMembership::from(m))
}

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    user_id: i64,
) -> Result<Option<RoomMembership>, DomainError> {
    let m = memberships_adapter::find_membership(conn, room_id, user_id).await?;
    Ok(m.map(RoomMembership::from))
}

/// Membership read that also pins the row until commit.
pub async fn find_membership_shared<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    user_id: i64,
) -> Result<Option<RoomMembership>, DomainError> {
    let m = memberships_adapter::find_membership_shared(conn, room_id, user_id).await?;
    Ok(m.map(RoomMembership::from))
}

pub async fn find_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<RoomMembership>, DomainError> {
    let m = memberships_adapter::find_by_user(conn, user_id).await?;
    Ok(m.map(RoomMembership::from))
}

/// Members in join order. A membership whose user row is gone means the
/// store is inconsistent.
pub async fn list_members<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<UserSummary>, DomainError> {
    let rows = memberships_adapter::list_with_users(conn, room_id).await?;
    rows.into_iter()
        .map(|(m, user)| {
            user.map(UserSummary::from).ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("membership {} references a missing user", m.id),
                )
            })
        })
        .collect()
}

pub async fn delete_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    user_id: i64,
) -> Result<u64, DomainError> {
    Ok(memberships_adapter::delete_membership(conn, room_id, user_id).await?)
}

pub async fn delete_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, DomainError> {
    Ok(memberships_adapter::delete_for_room(conn, room_id).await?)
}
