use std::future::Future;
use std::pin::Pin;

use sea_orm::{AccessMode, DatabaseTransaction, IsolationLevel, TransactionTrait};
use tracing::{debug, warn};

use super::require_db;
use crate::config::db::DbKind;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Whether a transaction may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnMode {
    ReadOnly,
    ReadWrite,
}

/// Boxed future borrowing the transaction for its whole run.
pub type TxnFuture<'t, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 't>>;

/// Execute a function within a database transaction.
///
/// Commits on `Ok`, rolls back on `Err`. The work is bounded by the
/// configured deadline; when it expires the transaction is rolled back and
/// `AppError::Timeout` is returned. Closures should move owned data in:
///
/// ```ignore
/// with_txn(&state, TxnMode::ReadOnly, move |txn| {
///     Box::pin(async move { repos::drafts::list_drafts(txn).await.map_err(AppError::from) })
/// })
/// ```
pub async fn with_txn<R, F>(state: &AppState, mode: TxnMode, f: F) -> Result<R, AppError>
where
    R: Send,
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> TxnFuture<'t, R> + Send,
{
    let db = require_db(state)?;
    let deadline = state.config.txn_timeout;

    // Isolation settings are Postgres-only; SQLite ignores them with a warning.
    let txn = match state.db_kind() {
        Some(DbKind::Postgres) => {
            let access = match mode {
                TxnMode::ReadOnly => AccessMode::ReadOnly,
                TxnMode::ReadWrite => AccessMode::ReadWrite,
            };
            db.begin_with_config(Some(IsolationLevel::ReadCommitted), Some(access))
                .await?
        }
        _ => db.begin().await?,
    };

    let outcome = tokio::time::timeout(deadline, f(&txn)).await;

    match outcome {
        Ok(Ok(val)) => {
            txn.commit().await?;
            Ok(val)
        }
        Ok(Err(err)) => {
            debug!(error = %err, "Rolling back transaction");
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
        Err(_) => {
            warn!(timeout_ms = deadline.as_millis() as u64, ?mode, "Transaction deadline exceeded");
            let _ = txn.rollback().await;
            Err(AppError::timeout(format!(
                "transaction exceeded {} ms",
                deadline.as_millis()
            )))
        }
    }
}
