use sea_orm::{DatabaseConnection, IsolationLevel};

use crate::config::db::DbKind;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub db_kind: DbKind,
    /// Isolation requested for every operation transaction; `None` keeps the
    /// engine default (SQLite has a single writer and ignores the setting).
    pub isolation: Option<IsolationLevel>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, db_kind: DbKind) -> Self {
        Self {
            db,
            db_kind,
            isolation: default_isolation(db_kind),
        }
    }

    pub fn with_isolation(mut self, isolation: Option<IsolationLevel>) -> Self {
        self.isolation = isolation;
        self
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Serializable on Postgres; engine default elsewhere.
pub fn default_isolation(kind: DbKind) -> Option<IsolationLevel> {
    match kind {
        DbKind::Postgres => Some(IsolationLevel::Serializable),
        DbKind::SqliteFile | DbKind::SqliteMemory => None,
    }
}
