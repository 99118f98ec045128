use std::str::FromStr;

use clap::{Parser, ValueEnum};
use migration::{get_latest_migration_version, migrate, MigrationCommand};
use wordroom_backend::telemetry::init_tracing;
use wordroom_backend::{connect_db, DbKind, DbOwner, RuntimeEnv};

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Clone, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Wordroom database migration tool")]
struct Args {
    /// Migration command: up | down | fresh | reset | refresh | status
    command: String,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database type. In-memory SQLite is not offered: it would vanish when
    /// the command exits.
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args = Args::parse();

    let command = match MigrationCommand::from_str(&args.command) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let env = match args.env {
        Env::Prod => RuntimeEnv::Prod,
        Env::Test => RuntimeEnv::Test,
    };

    let db_kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
    };

    // Schema changes run as the owner role.
    let db = match connect_db(env, db_kind, DbOwner::Owner).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Connection failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }

    match get_latest_migration_version(&db).await {
        Ok(version) => tracing::info!(
            latest = version.as_deref().unwrap_or("none"),
            "migration finished"
        ),
        Err(e) => tracing::warn!(error = %e, "could not read migration version"),
    }
}
