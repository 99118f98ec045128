use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{make_conn_spec, sanitize_db_url, DbKind, DbOwner, PoolSettings, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

async fn retry_connection<T, F, Fut>(mut connect_fn: F, max_attempts: u32) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt < max_attempts => {
                warn!(attempt, max_attempts, error = %e, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(CONNECT_RETRY_INTERVAL_MS)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Opens a pool for `kind`. Does NOT run migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = make_conn_spec(env, kind, owner)?;
    let pool = PoolSettings::from_env(kind)?;

    let mut opt = ConnectOptions::new(url.clone());
    opt.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .acquire_timeout(pool.acquire_timeout)
        .sqlx_logging(false);

    info!(
        env = ?env,
        db_kind = ?kind,
        url = %sanitize_db_url(&url),
        max_connections = pool.max_connections,
        "connecting to database"
    );

    let connect = || {
        let opt = opt.clone();
        async move {
            Database::connect(opt)
                .await
                .map_err(|e| AppError::db_unavailable(format!("failed to connect: {e}")))
        }
    };

    if kind == DbKind::Postgres {
        retry_connection(connect, CONNECT_ATTEMPTS).await
    } else {
        connect().await
    }
}

/// Connects and applies any pending migrations.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind, owner).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
