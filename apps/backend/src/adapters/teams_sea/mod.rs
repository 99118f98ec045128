//! SeaORM adapter for teams.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::shared_lock;
use crate::entities::teams;

pub mod dto;

pub use dto::TeamCreate;

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamCreate,
) -> Result<teams::Model, sea_orm::DbErr> {
    teams::ActiveModel {
        id: NotSet,
        room_id: Set(dto.room_id),
        name: Set(dto.name),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find_by_id(team_id).one(conn).await
}

pub async fn find_by_id_shared<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    shared_lock(teams::Entity::find_by_id(team_id), conn)
        .one(conn)
        .await
}

/// Teams of a room, in creation order.
pub async fn list_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .filter(teams::Column::RoomId.eq(room_id))
        .order_by_asc(teams::Column::Id)
        .all(conn)
        .await
}

pub async fn ids_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    teams::Entity::find()
        .select_only()
        .column(teams::Column::Id)
        .filter(teams::Column::RoomId.eq(room_id))
        .order_by_asc(teams::Column::Id)
        .into_tuple::<i64>()
        .all(conn)
        .await
}

pub async fn delete_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = teams::Entity::delete_by_id(team_id).exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn delete_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = teams::Entity::delete_many()
        .filter(teams::Column::RoomId.eq(room_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
