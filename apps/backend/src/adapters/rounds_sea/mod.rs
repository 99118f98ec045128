//! SeaORM adapter for the per-room round row.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::rounds::{self, RoundState};

pub mod dto;

pub use dto::RoundTransition;

pub async fn find_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::RoomId.eq(room_id))
        .one(conn)
        .await
}

async fn require_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<rounds::Model, sea_orm::DbErr> {
    find_for_room(conn, room_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Round not found".to_string()))
}

/// Restart in place when a row exists (whatever its state), otherwise insert.
///
/// The unique index on `room_id` turns a racing second insert into an error
/// instead of a second row.
pub async fn start<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundTransition,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let updated = rounds::Entity::update_many()
        .col_expr(rounds::Column::State, Expr::val(RoundState::Started).into())
        .col_expr(rounds::Column::StartTime, Expr::val(dto.at).into())
        .col_expr(
            rounds::Column::EndTime,
            Expr::val(Option::<OffsetDateTime>::None).into(),
        )
        .filter(rounds::Column::RoomId.eq(dto.room_id))
        .exec(conn)
        .await?;

    if updated.rows_affected > 0 {
        return require_for_room(conn, dto.room_id).await;
    }

    rounds::ActiveModel {
        id: NotSet,
        room_id: Set(dto.room_id),
        state: Set(RoundState::Started),
        start_time: Set(dto.at),
        end_time: Set(None),
    }
    .insert(conn)
    .await
}

/// Pause only a started round. `None` when there is nothing to pause.
pub async fn pause<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundTransition,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    let updated = rounds::Entity::update_many()
        .col_expr(rounds::Column::State, Expr::val(RoundState::Paused).into())
        .col_expr(rounds::Column::EndTime, Expr::val(Some(dto.at)).into())
        .filter(rounds::Column::RoomId.eq(dto.room_id))
        .filter(rounds::Column::State.eq(RoundState::Started))
        .exec(conn)
        .await?;

    if updated.rows_affected == 0 {
        return Ok(None);
    }
    require_for_room(conn, dto.room_id).await.map(Some)
}

pub async fn delete_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = rounds::Entity::delete_many()
        .filter(rounds::Column::RoomId.eq(room_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
