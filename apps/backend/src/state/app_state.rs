use std::fmt;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::app::AppConfig;
use crate::config::db::DbKind;
use crate::notify::{DisabledNotifier, Notifier};
use crate::perspective::PerspectiveRenderer;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    db_kind: Option<DbKind>,
    pub config: AppConfig,
    pub notifier: Arc<dyn Notifier>,
    pub renderer: Arc<dyn PerspectiveRenderer>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        db_kind: DbKind,
        config: AppConfig,
        notifier: Arc<dyn Notifier>,
        renderer: Arc<dyn PerspectiveRenderer>,
    ) -> Self {
        Self {
            db: Some(db),
            db_kind: Some(db_kind),
            config,
            notifier,
            renderer,
        }
    }

    /// State without a database; every transaction fails with `DbUnavailable`.
    pub fn without_db(config: AppConfig, renderer: Arc<dyn PerspectiveRenderer>) -> Self {
        Self {
            db: None,
            db_kind: None,
            config,
            notifier: Arc::new(DisabledNotifier),
            renderer,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn db_kind(&self) -> Option<DbKind> {
        self.db_kind
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("db_kind", &self.db_kind)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
