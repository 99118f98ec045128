//! SeaORM adapter for room memberships.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use super::shared_lock;
use crate::entities::{room_memberships, users};

/// Insert a membership row. The unique index on `user_id` rejects a user who
/// already belongs to any room.
pub async fn create_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    user_id: i64,
) -> Result<room_memberships::Model, sea_orm::DbErr> {
    room_memberships::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        room_id: Set(room_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    user_id: i64,
) -> Result<Option<room_memberships::Model>, sea_orm::DbErr> {
    room_memberships::Entity::find()
        .filter(room_memberships::Column::RoomId.eq(room_id))
        .filter(room_memberships::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Same as [`find_membership`] but keeps the row from being deleted until commit.
pub async fn find_membership_shared<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    user_id: i64,
) -> Result<Option<room_memberships::Model>, sea_orm::DbErr> {
    let select = room_memberships::Entity::find()
        .filter(room_memberships::Column::RoomId.eq(room_id))
        .filter(room_memberships::Column::UserId.eq(user_id));
    shared_lock(select, conn).one(conn).await
}

/// Whatever room the user is in, if any.
pub async fn find_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<room_memberships::Model>, sea_orm::DbErr> {
    room_memberships::Entity::find()
        .filter(room_memberships::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Members of a room with their user rows, in join order.
pub async fn list_with_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<(room_memberships::Model, Option<users::Model>)>, sea_orm::DbErr> {
    room_memberships::Entity::find()
        .filter(room_memberships::Column::RoomId.eq(room_id))
        .order_by_asc(room_memberships::Column::Id)
        .find_also_related(users::Entity)
        .all(conn)
        .await
}

pub async fn delete_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = room_memberships::Entity::delete_many()
        .filter(room_memberships::Column::RoomId.eq(room_id))
        .filter(room_memberships::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn delete_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = room_memberships::Entity::delete_many()
        .filter(room_memberships::Column::RoomId.eq(room_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
