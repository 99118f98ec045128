//! SeaORM adapters, generic over `ConnectionTrait`, returning `DbErr`.

pub mod room_memberships_sea;
pub mod rooms_sea;
pub mod rounds_sea;
pub mod team_memberships_sea;
pub mod teams_sea;
pub mod users_sea;

use sea_orm::{ConnectionTrait, DbBackend, EntityTrait, QuerySelect, Select};

/// Adds `FOR SHARE` on Postgres. SQLite has a single writer, so the
/// transaction itself already excludes concurrent writes.
pub(crate) fn shared_lock<E, C>(select: Select<E>, conn: &C) -> Select<E>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if conn.get_database_backend() == DbBackend::Postgres {
        select.lock_shared()
    } else {
        select
    }
}
