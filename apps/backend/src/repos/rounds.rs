//! Round repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::rounds_sea::{self as rounds_adapter, RoundTransition};
use crate::entities::rounds::{self, RoundState};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Round domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub id: i64,
    pub room_id: i64,
    pub state: RoundState,
    pub start_time: OffsetDateTime,
    pub end_time: Option<OffsetDateTime>,
}

impl From<rounds::Model> for Round {
    fn from(m: rounds::Model) -> Self {
        Self {
            id: m.id,
            room_id: m.room_id,
            state: m.state,
            start_time: m.start_time,
            end_time: m.end_time,
        }
    }
}

pub async fn find_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<Round>, DomainError> {
    let round = rounds_adapter::find_for_room(conn, room_id).await?;
    Ok(round.map(Round::from))
}

pub async fn start<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Round, DomainError> {
    let round = rounds_adapter::start(conn, RoundTransition::now(room_id)).await?;
    Ok(Round::from(round))
}

/// NotFound unless the room's round is currently started.
pub async fn pause<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Round, DomainError> {
    rounds_adapter::pause(conn, RoundTransition::now(room_id))
        .await?
        .map(Round::from)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Round, "No active round"))
}

pub async fn delete_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, DomainError> {
    Ok(rounds_adapter::delete_for_room(conn, room_id).await?)
}
