//! SeaORM adapter for rooms - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use super::shared_lock;
use crate::entities::rooms;

pub mod dto;

pub use dto::{RoomCreate, RoomSettings};

/// Result of an admin-guarded write on a room.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminClaim {
    /// The row matched the expected admin and is now write-locked for the
    /// rest of the transaction.
    Granted(rooms::Model),
    /// The room exists but its admin is someone else.
    NotAdmin,
    Missing,
}

/// Guarded write: bumps lock_version (plus whatever the caller configures)
/// filtered on both id and the expected admin, then refetches.
///
/// The admin check and the write are one statement, so a concurrent admin
/// transfer or close either lands first (and this matches zero rows) or waits.
async fn guarded_update_then_fetch<C, F>(
    conn: &C,
    room_id: i64,
    admin_id: i64,
    configure_update: F,
) -> Result<AdminClaim, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<rooms::Entity>) -> sea_orm::UpdateMany<rooms::Entity>,
{
    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(rooms::Entity::update_many())
        .col_expr(rooms::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            rooms::Column::LockVersion,
            Expr::col(rooms::Column::LockVersion).add(1),
        )
        .filter(rooms::Column::Id.eq(room_id))
        .filter(rooms::Column::AdminId.eq(admin_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Ok(match find_by_id(conn, room_id).await? {
            Some(_) => AdminClaim::NotAdmin,
            None => AdminClaim::Missing,
        });
    }

    Ok(match find_by_id(conn, room_id).await? {
        Some(room) => AdminClaim::Granted(room),
        None => AdminClaim::Missing,
    })
}

pub async fn create_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoomCreate,
) -> Result<rooms::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    rooms::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        creator_id: Set(dto.creator_id),
        admin_id: Set(dto.creator_id),
        invitation_code: Set(dto.invitation_code),
        is_private: Set(dto.is_private),
        points_per_word: Set(dto.points_per_word),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find_by_id(room_id).one(conn).await
}

/// Read under a shared row lock so the room cannot be closed or handed to a
/// new admin before the reading transaction commits.
pub async fn find_by_id_shared<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<rooms::Model>, sea_orm::DbErr> {
    shared_lock(rooms::Entity::find_by_id(room_id), conn)
        .one(conn)
        .await
}

/// Non-private rooms, ordered by id.
pub async fn list_public<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find()
        .filter(rooms::Column::IsPrivate.eq(false))
        .order_by_asc(rooms::Column::Id)
        .all(conn)
        .await
}

/// Take the admin claim without changing any setting.
pub async fn claim_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    admin_id: i64,
) -> Result<AdminClaim, sea_orm::DbErr> {
    guarded_update_then_fetch(conn, room_id, admin_id, |update| update).await
}

pub async fn update_settings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    admin_id: i64,
    settings: RoomSettings,
) -> Result<AdminClaim, sea_orm::DbErr> {
    guarded_update_then_fetch(conn, room_id, admin_id, |update| {
        update
            .col_expr(rooms::Column::Name, Expr::val(settings.name).into())
            .col_expr(
                rooms::Column::IsPrivate,
                Expr::val(settings.is_private).into(),
            )
            .col_expr(
                rooms::Column::PointsPerWord,
                Expr::val(settings.points_per_word).into(),
            )
    })
    .await
}

pub async fn set_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    admin_id: i64,
    new_admin_id: i64,
) -> Result<AdminClaim, sea_orm::DbErr> {
    guarded_update_then_fetch(conn, room_id, admin_id, |update| {
        update.col_expr(rooms::Column::AdminId, Expr::val(new_admin_id).into())
    })
    .await
}

pub async fn delete_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = rooms::Entity::delete_by_id(room_id).exec(conn).await?;
    Ok(res.rows_affected)
}
