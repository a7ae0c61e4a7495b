// Transaction ownership: commit, rollback and the deadline.

use std::sync::Arc;
use std::time::Duration;

use draft_backend::config::app::AppConfig;
use draft_backend::db::require_db;
use draft_backend::db::txn::{with_txn, TxnMode};
use draft_backend::repos::drafts;
use draft_backend::services::draft_api;
use draft_backend::state::app_state::AppState;
use draft_backend::{AppError, ErrorCode, Viewer};

use crate::support::fake_renderer::FakeRenderer;
use crate::support::{build_test_state, build_test_state_with};

#[tokio::test]
async fn ok_commits_and_err_rolls_back() -> Result<(), AppError> {
    let h = build_test_state().await?;

    with_txn(&h.state, TxnMode::ReadWrite, |txn| {
        Box::pin(async move {
            drafts::create_draft(txn, "kept").await?;
            Ok(())
        })
    })
    .await?;

    let err = with_txn(&h.state, TxnMode::ReadWrite, |txn| {
        Box::pin(async move {
            drafts::create_draft(txn, "discarded").await?;
            Err::<(), _>(AppError::internal("boom"))
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);

    let names: Vec<String> = drafts::list_drafts(require_db(&h.state)?)
        .await?
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["kept".to_string()]);
    Ok(())
}

#[tokio::test]
async fn deadline_rolls_back_and_reports_timeout() -> Result<(), AppError> {
    let config = AppConfig {
        txn_timeout: Duration::from_millis(50),
        ..AppConfig::default()
    };
    let h = build_test_state_with(config).await?;

    let err = with_txn(&h.state, TxnMode::ReadWrite, |txn| {
        Box::pin(async move {
            drafts::create_draft(txn, "too slow").await?;
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(())
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TxnTimeout);

    let list = draft_api::draft_list(&h.state, Viewer::Anonymous).await?;
    assert!(list.drafts.is_empty());
    Ok(())
}

#[tokio::test]
async fn no_database_means_unavailable() {
    let state = AppState::without_db(AppConfig::default(), Arc::new(FakeRenderer::new()));
    let err = draft_api::draft_list(&state, Viewer::Anonymous)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
}
