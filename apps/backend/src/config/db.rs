use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which storage engine backs the draft tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Ephemeral database; used by tests.
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(DbKind::Postgres),
            "sqlite" | "sqlite-file" | "sqlite_file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "unknown database kind '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_SQLITE_PATH: &str = "draft.db";

/// Builds a database URL for the given kind from environment variables.
///
/// - Postgres: `DRAFT_DATABASE_URL` (required)
/// - SQLite file: `DRAFT_SQLITE_PATH` (defaults to `draft.db`)
/// - SQLite memory: no configuration
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let url = must_var("DRAFT_DATABASE_URL")?;
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(AppError::config(
                    "DRAFT_DATABASE_URL must be a postgres:// or postgresql:// URL",
                ));
            }
            Ok(url)
        }
        DbKind::SqliteFile => {
            let path =
                env::var("DRAFT_SQLITE_PATH").unwrap_or_else(|_| DEFAULT_SQLITE_PATH.to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Resolve the database kind from `DRAFT_DB_KIND`, defaulting to a SQLite file.
pub fn db_kind_from_env() -> Result<DbKind, AppError> {
    match env::var("DRAFT_DB_KIND") {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(DbKind::SqliteFile),
        Err(e) => Err(e.into()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
