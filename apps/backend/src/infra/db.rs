use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

/// Open a connection pool for the given database kind.
/// This function does NOT run any migrations.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(kind)?;
    let mut options = ConnectOptions::new(database_url);
    options
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    match kind {
        // every pooled connection would otherwise get its own empty database
        DbKind::SqliteMemory => {
            options.max_connections(1).min_connections(1);
        }
        // SQLite serialises writers; one connection avoids "database is locked"
        DbKind::SqliteFile => {
            options.max_connections(1);
        }
        DbKind::Postgres => {
            options.max_connections(16);
        }
    }

    let conn = Database::connect(options).await?;
    info!(?kind, "Database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
