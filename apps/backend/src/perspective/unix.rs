//! Perspective renderer reached over a Unix domain socket.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::{debug, warn};

use super::{encode_request, PerspectiveRenderer};
use crate::domain::replay::PerspectiveRequest;
use crate::error::AppError;

/// Writes one request, then reads until the renderer closes the stream.
#[derive(Debug, Clone)]
pub struct UnixSocketRenderer {
    path: PathBuf,
    timeout: Duration,
}

impl UnixSocketRenderer {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }

    async fn exchange(&self, payload: &[u8]) -> std::io::Result<String> {
        let mut stream = UnixStream::connect(&self.path).await?;
        stream.write_all(payload).await?;
        stream.flush().await?;

        let mut response = String::new();
        stream.read_to_string(&mut response).await?;
        Ok(response)
    }
}

#[async_trait]
impl PerspectiveRenderer for UnixSocketRenderer {
    async fn render(&self, request: &PerspectiveRequest<'_>) -> Result<String, AppError> {
        let payload = encode_request(request)?;
        let draft_id = request.draft.draft_id;

        match tokio::time::timeout(self.timeout, self.exchange(&payload)).await {
            Ok(Ok(body)) => {
                debug!(draft_id, bytes = body.len(), "Perspective rendered");
                Ok(body)
            }
            Ok(Err(e)) => {
                warn!(draft_id, socket = %self.path.display(), error = %e, "Perspective renderer failed");
                Err(AppError::redaction_service(format!(
                    "perspective renderer unavailable: {e}"
                )))
            }
            Err(_) => {
                warn!(draft_id, timeout_ms = self.timeout.as_millis() as u64, "Perspective renderer timed out");
                Err(AppError::redaction_service("perspective renderer timed out"))
            }
        }
    }
}
