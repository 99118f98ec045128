//! Room repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::rooms_sea::{self as rooms_adapter, AdminClaim};
use crate::entities::rooms;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use crate::adapters::rooms_sea::{RoomCreate, RoomSettings};

/// Room domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub creator_id: i64,
    pub admin_id: i64,
    pub invitation_code: String,
    pub is_private: bool,
    pub points_per_word: i32,
    pub lock_version: i32,
}

impl From<rooms::Model> for Room {
    fn from(m: rooms::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            creator_id: m.creator_id,
            admin_id: m.admin_id,
            invitation_code: m.invitation_code,
            is_private: m.is_private,
            points_per_word: m.points_per_word,
            lock_version: m.lock_version,
        }
    }
}

fn room_not_found(room_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Room, format!("Room {room_id} not found"))
}

fn claim_result(room_id: i64, claim: AdminClaim) -> Result<Room, DomainError> {
    match claim {
        AdminClaim::Granted(room) => Ok(Room::from(room)),
        AdminClaim::NotAdmin => Err(DomainError::not_admin()),
        AdminClaim::Missing => Err(room_not_found(room_id)),
    }
}

pub async fn create_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoomCreate,
) -> Result<Room, DomainError> {
    let room = rooms_adapter::create_room(conn, dto).await?;
    Ok(Room::from(room))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<Room>, DomainError> {
    let room = rooms_adapter::find_by_id(conn, room_id).await?;
    Ok(room.map(Room::from))
}

/// Find room by ID or return NotFound.
pub async fn require_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Room, DomainError> {
    find_by_id(conn, room_id)
        .await?
        .ok_or_else(|| room_not_found(room_id))
}

/// Like [`require_room`], holding a shared row lock until commit.
pub async fn require_room_shared<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Room, DomainError> {
    rooms_adapter::find_by_id_shared(conn, room_id)
        .await?
        .map(Room::from)
        .ok_or_else(|| room_not_found(room_id))
}

pub async fn list_public<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Room>, DomainError> {
    let rooms = rooms_adapter::list_public(conn).await?;
    Ok(rooms.into_iter().map(Room::from).collect())
}

/// Admin gate bound to a write: NotFound when the room is gone, Forbidden
/// when `admin_id` is not its current admin, otherwise the locked room.
pub async fn claim_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    admin_id: i64,
) -> Result<Room, DomainError> {
    let claim = rooms_adapter::claim_admin(conn, room_id, admin_id).await?;
    claim_result(room_id, claim)
}

pub async fn update_settings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    admin_id: i64,
    settings: RoomSettings,
) -> Result<Room, DomainError> {
    let claim = rooms_adapter::update_settings(conn, room_id, admin_id, settings).await?;
    claim_result(room_id, claim)
}

pub async fn set_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    admin_id: i64,
    new_admin_id: i64,
) -> Result<Room, DomainError> {
    let claim = rooms_adapter::set_admin(conn, room_id, admin_id, new_admin_id).await?;
    claim_result(room_id, claim)
}

pub async fn delete_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, DomainError> {
    Ok(rooms_adapter::delete_room(conn, room_id).await?)
}
