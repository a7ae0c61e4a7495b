#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod logging;
pub mod notify;
pub mod perspective;
pub mod repos;
pub mod services;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use config::app::AppConfig;
pub use config::db::{db_url, DbKind};
pub use db::txn::{with_txn, TxnMode};
pub use domain::{DraftFormat, PickRequest, Viewer};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use errors::ErrorCode;
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::{build_state, StateBuilder};
pub use notify::{Notice, Notifier};
pub use perspective::{DraftView, PerspectiveRenderer};
pub use state::app_state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::app::*;
    pub use super::config::db::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::errors::domain::*;
    pub use super::services::draft_api::*;
    pub use super::state::app_state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
