//! Outbound player notifications.
//!
//! Notices are computed inside the pick transaction and dispatched by the
//! transaction owner once the transaction has committed. Failures are
//! logged and never reach the caller.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::logging::pii::Redacted;

pub mod webhook;

pub use webhook::WebhookNotifier;

/// A message owed to one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The player has a pack waiting in `draft_id`.
    NewPicks { draft_id: i64, contact_id: String },
}

impl Notice {
    pub fn contact_id(&self) -> &str {
        match self {
            Notice::NewPicks { contact_id, .. } => contact_id,
        }
    }

    pub fn draft_id(&self) -> i64 {
        match self {
            Notice::NewPicks { draft_id, .. } => *draft_id,
        }
    }
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification transport failed: {0}")]
    Transport(String),
    #[error("notification sink returned status {0}")]
    Status(u16),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError>;
}

/// Used when no notification sink is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        debug!(
            draft_id = notice.draft_id(),
            contact = %Redacted(notice.contact_id()),
            "Notifications disabled; dropping notice"
        );
        Ok(())
    }
}

/// Keeps every notice in memory. Useful for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notice> {
        match self.sent.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        match self.sent.lock() {
            Ok(mut guard) => guard.push(notice.clone()),
            Err(poisoned) => poisoned.into_inner().push(notice.clone()),
        }
        Ok(())
    }
}

/// Send every notice, logging and swallowing failures.
pub async fn dispatch_all(notifier: &dyn Notifier, notices: &[Notice]) {
    for notice in notices {
        if let Err(e) = notifier.notify(notice).await {
            warn!(
                draft_id = notice.draft_id(),
                contact = %Redacted(notice.contact_id()),
                error = %e,
                "Failed to send notification"
            );
        }
    }
}
