// Draft list status per viewer.

use draft_backend::db::require_db;
use draft_backend::domain::status::{DraftStatus, Viewer};
use draft_backend::services::draft_api;
use draft_backend::{AppError, ErrorCode};

use crate::support::build_test_state;
use crate::support::factory::{raise_all_rounds, seed_draft, seed_user};

#[tokio::test]
async fn list_is_ordered_and_classified_per_viewer() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let open = seed_draft(db, &format, 3).await?;
    let full = seed_draft(db, &format, 8).await?;
    let outsider = seed_user(db).await?;

    let list = draft_api::draft_list(&h.state, Viewer::User(outsider)).await?;
    let ids: Vec<i64> = list.drafts.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![open.draft_id, full.draft_id]);
    assert_eq!(list.drafts[0].status, DraftStatus::Joinable);
    assert_eq!(list.drafts[0].available_seats, 5);
    assert_eq!(list.drafts[1].status, DraftStatus::Spectator);
    assert!(!list.drafts[1].finished);

    let anon = draft_api::draft_list(&h.state, Viewer::Anonymous).await?;
    assert_eq!(anon.drafts[0].status, DraftStatus::Closed);
    assert!(anon.drafts.iter().all(|d| !d.joined));

    let member = draft_api::draft_list(&h.state, Viewer::User(open.user(1))).await?;
    assert_eq!(member.drafts[0].status, DraftStatus::Member);
    assert!(member.drafts[0].joined);
    assert_eq!(member.drafts[1].status, DraftStatus::Spectator);
    Ok(())
}

#[tokio::test]
async fn draft_past_the_last_round_is_finished_for_everyone() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 6).await?;
    raise_all_rounds(db, &draft, format.round_count + 1).await?;

    let anon = draft_api::draft_list_entry(&h.state, Viewer::Anonymous, draft.draft_id).await?;
    assert!(anon.finished);
    assert_eq!(anon.status, DraftStatus::Spectator);

    for viewer in [Viewer::Anonymous, Viewer::User(draft.user(0))] {
        let view = draft_api::draft_view(&h.state, draft.draft_id, viewer).await?;
        assert!(view.is_full());
    }
    assert!(h.renderer.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn seatless_draft_is_not_finished() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let draft = draft_backend::repos::drafts::create_draft(db, "empty table").await?;

    let entry = draft_api::draft_list_entry(&h.state, Viewer::Anonymous, draft.id).await?;
    assert!(!entry.finished);
    assert_eq!(entry.available_seats, 0);
    assert_eq!(entry.name, "empty table");
    Ok(())
}

#[tokio::test]
async fn unknown_draft_entry_is_not_found() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let err = draft_api::draft_list_entry(&h.state, Viewer::Anonymous, 77)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DraftNotFound);
    Ok(())
}
