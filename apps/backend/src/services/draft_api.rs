//! Transaction-owning entry points.
//!
//! Each function opens one bounded transaction on `state` and runs a service
//! inside it. Writes commit first; their notices are dispatched and the
//! caller's view is rendered afterwards in a separate read-only transaction.

use tracing::debug;

use crate::db::txn::{with_txn, TxnMode};
use crate::domain::pick::PickRequest;
use crate::domain::status::{DraftList, DraftListEntry, Viewer};
use crate::error::AppError;
use crate::notify;
use crate::perspective::DraftView;
use crate::services::draft_flow::{DraftFlowService, PickOutcome};
use crate::services::drafts::DraftService;
use crate::services::replay::ReplayService;
use crate::state::app_state::AppState;

/// Seat `user_id` in `draft_id`, commit, then return their view.
pub async fn join_draft(state: &AppState, draft_id: i64, user_id: i64) -> Result<DraftView, AppError> {
    let service = DraftFlowService::from_state(state);
    with_txn(state, TxnMode::ReadWrite, move |txn| {
        Box::pin(async move { service.join(txn, draft_id, user_id).await })
    })
    .await?;

    draft_view(state, draft_id, Viewer::User(user_id)).await
}

/// Apply a pick and commit, send any notices it produced, then return the
/// picker's view.
///
/// A failure building the view does not undo the pick.
pub async fn submit_pick(
    state: &AppState,
    user_id: i64,
    request: PickRequest,
) -> Result<PickOutcome, AppError> {
    let service = DraftFlowService::from_state(state);
    let applied = with_txn(state, TxnMode::ReadWrite, move |txn| {
        Box::pin(async move { service.pick(txn, user_id, &request).await })
    })
    .await?;

    if !applied.notices.is_empty() {
        debug!(
            draft_id = applied.draft_id,
            notices = applied.notices.len(),
            "Dispatching notices"
        );
        notify::dispatch_all(state.notifier.as_ref(), &applied.notices).await;
    }

    let view = draft_view(state, applied.draft_id, Viewer::User(user_id)).await?;
    Ok(PickOutcome {
        draft_id: applied.draft_id,
        view,
        notices: applied.notices,
    })
}

/// What `viewer` may see of a draft.
pub async fn draft_view(state: &AppState, draft_id: i64, viewer: Viewer) -> Result<DraftView, AppError> {
    let service = ReplayService::new(state.config.format);
    let renderer = std::sync::Arc::clone(&state.renderer);
    with_txn(state, TxnMode::ReadOnly, move |txn| {
        Box::pin(async move {
            service
                .draft_view(txn, renderer.as_ref(), draft_id, viewer)
                .await
        })
    })
    .await
}

pub async fn draft_list(state: &AppState, viewer: Viewer) -> Result<DraftList, AppError> {
    let service = DraftService::new(state.config.format);
    with_txn(state, TxnMode::ReadOnly, move |txn| {
        Box::pin(async move { service.draft_list(txn, viewer).await })
    })
    .await
}

pub async fn draft_list_entry(
    state: &AppState,
    viewer: Viewer,
    draft_id: i64,
) -> Result<DraftListEntry, AppError> {
    let service = DraftService::new(state.config.format);
    with_txn(state, TxnMode::ReadOnly, move |txn| {
        Box::pin(async move { service.draft_list_entry(txn, viewer, draft_id).await })
    })
    .await
}
