use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use tracing::info;

use crate::error::AppResult;

const SQLITE_PRAGMAS: [&str; 3] =
    ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA foreign_keys=ON"];

// sea-orm cannot unset the pool's reaping timeouts, only lengthen them.
const NEVER_RECYCLE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn connect_options(database_url: &str, max_connections: u32) -> ConnectOptions {
    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(false);
    // Every pooled connection to `:memory:` opens its own empty database,
    // so the single connection must never be recycled either.
    if database_url.contains(":memory:") {
        opts.max_connections(1)
            .min_connections(1)
            .max_lifetime(NEVER_RECYCLE)
            .idle_timeout(NEVER_RECYCLE);
    } else {
        opts.max_connections(max_connections.max(1));
    }
    opts
}

pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> AppResult<DatabaseConnection> {
    let opts = connect_options(database_url, max_connections);
    let db = Database::connect(opts).await?;

    if db.get_database_backend() == DbBackend::Sqlite {
        for pragma in SQLITE_PRAGMAS {
            db.execute(Statement::from_string(DbBackend::Sqlite, pragma.to_string())).await?;
        }
    }

    Migrator::up(&db, None).await?;
    info!("database ready");

    Ok(db)
}
