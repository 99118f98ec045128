use sea_orm::IsolationLevel;

use crate::config::db::{DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::{default_isolation, AppState};

/// Builder for creating AppState instances (used by tests and embedding services)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
    isolation: Option<Option<IsolationLevel>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db_kind: DbKind::Postgres,
            owner: DbOwner::App,
            isolation: None,
        }
    }
    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = kind;
        self
    }
    pub fn with_owner(mut self, owner: DbOwner) -> Self {
        self.owner = owner;
        self
    }
    /// Overrides the per-engine isolation default; `None` means engine default.
    pub fn with_isolation(mut self, isolation: Option<IsolationLevel>) -> Self {
        self.isolation = Some(isolation);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        // single entrypoint: connect + migrate
        let conn = bootstrap_db(self.env, self.db_kind, self.owner).await?;
        let isolation = self
            .isolation
            .unwrap_or_else(|| default_isolation(self.db_kind));
        Ok(AppState::new(conn, self.db_kind).with_isolation(isolation))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
