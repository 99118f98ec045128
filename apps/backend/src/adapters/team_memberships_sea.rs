//! SeaORM adapter for team memberships.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{team_memberships, users};

/// Insert a membership row. The unique index on `user_id` rejects a second
/// team for the same user.
pub async fn create_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    user_id: i64,
) -> Result<team_memberships::Model, sea_orm::DbErr> {
    team_memberships::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        team_id: Set(team_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<team_memberships::Model>, sea_orm::DbErr> {
    team_memberships::Entity::find()
        .filter(team_memberships::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Memberships of the given teams with user rows, ordered by team then join order.
pub async fn list_with_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_ids: &[i64],
) -> Result<Vec<(team_memberships::Model, Option<users::Model>)>, sea_orm::DbErr> {
    if team_ids.is_empty() {
        return Ok(Vec::new());
    }
    team_memberships::Entity::find()
        .filter(team_memberships::Column::TeamId.is_in(team_ids.iter().copied()))
        .order_by_asc(team_memberships::Column::TeamId)
        .order_by_asc(team_memberships::Column::Id)
        .find_also_related(users::Entity)
        .all(conn)
        .await
}

/// Any team membership of the user, wherever it points.
pub async fn delete_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = team_memberships::Entity::delete_many()
        .filter(team_memberships::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn delete_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = team_memberships::Entity::delete_many()
        .filter(team_memberships::Column::TeamId.eq(team_id))
        .filter(team_memberships::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// The user's membership, restricted to the given teams.
pub async fn delete_for_user_in_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    team_ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    if team_ids.is_empty() {
        return Ok(0);
    }
    let res = team_memberships::Entity::delete_many()
        .filter(team_memberships::Column::UserId.eq(user_id))
        .filter(team_memberships::Column::TeamId.is_in(team_ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn delete_for_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    if team_ids.is_empty() {
        return Ok(0);
    }
    let res = team_memberships::Entity::delete_many()
        .filter(team_memberships::Column::TeamId.is_in(team_ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
