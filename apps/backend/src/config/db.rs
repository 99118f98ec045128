use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

/// Which storage engine the connection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    /// SQLite file at `WORDROOM_SQLITE_PATH`
    SqliteFile,
    /// Private in-memory SQLite database; lives as long as its single connection
    SqliteMemory,
}

impl DbKind {
    pub fn is_sqlite(self) -> bool {
        matches!(self, DbKind::SqliteFile | DbKind::SqliteMemory)
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!("unknown database kind '{other}'"))),
        }
    }
}

/// Runtime environment; selects the database name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Enforces the `_test` database-name safety rule
    Test,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Builds the connection string for `kind` from environment variables.
pub fn make_conn_spec(env: RuntimeEnv, kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = host();
            let port = port();
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = must_var("WORDROOM_SQLITE_PATH")?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Pool sizing, read from the environment with per-engine defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl PoolSettings {
    pub fn from_env(kind: DbKind) -> Result<Self, AppError> {
        let acquire_ms = parse_var::<u64>("WORDROOM_DB_ACQUIRE_TIMEOUT_MS")?.unwrap_or(5_000);
        let acquire_timeout = Duration::from_millis(acquire_ms);

        // every pooled connection to sqlite::memory: would open its own empty database
        if kind == DbKind::SqliteMemory {
            return Ok(Self {
                max_connections: 1,
                min_connections: 1,
                acquire_timeout,
            });
        }

        let default_max = if kind == DbKind::Postgres { 10 } else { 4 };
        let max_connections = parse_var::<u32>("WORDROOM_DB_MAX_CONNECTIONS")?.unwrap_or(default_max);
        if max_connections == 0 {
            return Err(AppError::config(
                "WORDROOM_DB_MAX_CONNECTIONS must be at least 1",
            ));
        }

        Ok(Self {
            max_connections,
            min_connections: 1,
            acquire_timeout,
        })
    }
}

/// Masks the password part of a connection string for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        Some(colon_pos) if auth_part[..colon_pos].contains("//") => {
            format!("{}:***@{host_part}", &auth_part[..colon_pos])
        }
        _ => url.to_string(),
    }
}

fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("WORDROOM_OWNER_USER")?,
            must_var("WORDROOM_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("'{name}' has an invalid value: '{raw}'"))),
        Err(_) => Ok(None),
    }
}
