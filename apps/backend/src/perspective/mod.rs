//! Redacted replay rendering.
//!
//! Viewers not entitled to the full replay get a document produced by an
//! external perspective renderer. The core only speaks its wire contract.

use async_trait::async_trait;

use crate::domain::replay::{DraftReplayState, PerspectiveRequest};
use crate::error::AppError;

#[cfg(unix)]
pub mod unix;

#[cfg(unix)]
pub use unix::UnixSocketRenderer;

/// Terminates the request document on the wire.
pub const REQUEST_TERMINATOR: &[u8] = b"\r\n\r\n";

#[async_trait]
pub trait PerspectiveRenderer: Send + Sync {
    /// Returns the renderer's response verbatim.
    async fn render(&self, request: &PerspectiveRequest<'_>) -> Result<String, AppError>;
}

/// What a viewer receives for a replay request.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftView {
    Full(DraftReplayState),
    /// Renderer output, passed through untouched.
    Redacted(String),
}

impl DraftView {
    pub fn is_full(&self) -> bool {
        matches!(self, DraftView::Full(_))
    }

    /// JSON document handed to the client.
    pub fn to_json(&self) -> Result<String, AppError> {
        match self {
            DraftView::Full(state) => serde_json::to_string(state)
                .map_err(|e| AppError::internal(format!("failed to encode replay: {e}"))),
            DraftView::Redacted(body) => Ok(body.clone()),
        }
    }
}

/// Serialize a renderer request as sent on the wire, terminator included.
pub fn encode_request(request: &PerspectiveRequest<'_>) -> Result<Vec<u8>, AppError> {
    let mut payload = serde_json::to_vec(request)
        .map_err(|e| AppError::internal(format!("failed to encode perspective request: {e}")))?;
    payload.extend_from_slice(REQUEST_TERMINATOR);
    Ok(payload)
}
