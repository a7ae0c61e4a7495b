use std::sync::Arc;

use tracing::info;

use crate::config::app::AppConfig;
use crate::config::db::{db_kind_from_env, DbKind};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::notify::{DisabledNotifier, Notifier, WebhookNotifier};
use crate::perspective::PerspectiveRenderer;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and binaries)
pub struct StateBuilder {
    config: AppConfig,
    db_kind: Option<DbKind>,
    notifier: Option<Arc<dyn Notifier>>,
    renderer: Option<Arc<dyn PerspectiveRenderer>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            db_kind: None,
            notifier: None,
            renderer: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn PerspectiveRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let notifier = match self.notifier {
            Some(n) => n,
            None => default_notifier(&self.config)?,
        };
        let renderer = match self.renderer {
            Some(r) => r,
            None => default_renderer(&self.config)?,
        };

        match self.db_kind {
            Some(kind) => {
                // single entrypoint: build + migrate
                let conn = bootstrap_db(kind).await?;
                Ok(AppState::new(conn, kind, self.config, notifier, renderer))
            }
            None => {
                let mut state = AppState::without_db(self.config, renderer);
                state.notifier = notifier;
                Ok(state)
            }
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder seeded from `DRAFT_DB_KIND` and the `AppConfig` environment.
pub fn state_from_env() -> Result<StateBuilder, AppError> {
    let config = AppConfig::from_env()?;
    let kind = db_kind_from_env()?;
    Ok(StateBuilder::new().with_config(config).with_db(kind))
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

fn default_notifier(config: &AppConfig) -> Result<Arc<dyn Notifier>, AppError> {
    match &config.webhook_url {
        Some(url) => {
            let notifier = WebhookNotifier::new(url, &config.site_url, config.notify_timeout)
                .map_err(|e| AppError::config(format!("webhook notifier: {e}")))?;
            info!("Webhook notifications enabled");
            Ok(Arc::new(notifier))
        }
        None => {
            info!("No webhook configured; notifications disabled");
            Ok(Arc::new(DisabledNotifier))
        }
    }
}

#[cfg(unix)]
fn default_renderer(config: &AppConfig) -> Result<Arc<dyn PerspectiveRenderer>, AppError> {
    Ok(Arc::new(crate::perspective::UnixSocketRenderer::new(
        config.perspective_socket.clone(),
        config.perspective_timeout,
    )))
}

#[cfg(not(unix))]
fn default_renderer(_config: &AppConfig) -> Result<Arc<dyn PerspectiveRenderer>, AppError> {
    Err(AppError::config(
        "the perspective renderer needs Unix domain sockets; supply one with with_renderer",
    ))
}
