// Join: seat assignment rules.

use std::collections::HashSet;

use draft_backend::config::app::AppConfig;
use draft_backend::db::require_db;
use draft_backend::domain::status::Viewer;
use draft_backend::perspective::DraftView;
use draft_backend::repos::seats;
use draft_backend::services::draft_api;
use draft_backend::{AppError, ErrorCode};

use crate::support::{build_test_state, build_test_state_with_renderer};
use crate::support::factory::{seed_draft, seed_user};
use crate::support::fake_renderer::FakeRenderer;

#[tokio::test]
async fn join_takes_an_empty_seat_and_returns_the_view() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 5).await?;
    let user = seed_user(db).await?;

    let view = draft_api::join_draft(&h.state, draft.draft_id, user).await?;
    assert_eq!(view, DraftView::Redacted(FakeRenderer::response_for(user)));

    let seat = seats::find_seat_for_user(db, draft.draft_id, user)
        .await?
        .expect("user should be seated");
    assert!(seat.position >= 5, "seat {} was already occupied", seat.position);
    Ok(())
}

#[tokio::test]
async fn joining_twice_is_refused() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 0).await?;
    let user = seed_user(db).await?;

    draft_api::join_draft(&h.state, draft.draft_id, user).await?;
    let err = draft_api::join_draft(&h.state, draft.draft_id, user)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::AlreadyJoined);

    let open = seats::list_unoccupied(db, draft.draft_id).await?;
    assert_eq!(open.len(), 7);
    Ok(())
}

#[tokio::test]
async fn filling_the_table_seats_everyone_once_then_refuses() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 0).await?;

    let mut positions = HashSet::new();
    for _ in 0..format.table_size {
        let user = seed_user(db).await?;
        draft_api::join_draft(&h.state, draft.draft_id, user).await?;
        let seat = seats::find_seat_for_user(db, draft.draft_id, user)
            .await?
            .unwrap();
        assert!(positions.insert(seat.position), "position {} seated twice", seat.position);
    }
    assert_eq!(positions.len(), usize::from(format.table_size));

    let late = seed_user(db).await?;
    let err = draft_api::join_draft(&h.state, draft.draft_id, late)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoSeatsAvailable);

    let entry = draft_api::draft_list_entry(&h.state, Viewer::User(late), draft.draft_id).await?;
    assert_eq!(entry.available_seats, 0);
    Ok(())
}

#[tokio::test]
async fn joining_an_unknown_draft_is_not_found() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let user = seed_user(db).await?;

    let err = draft_api::join_draft(&h.state, 4242, user).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::DraftNotFound);
    Ok(())
}

#[tokio::test]
async fn seat_is_kept_when_the_view_cannot_be_rendered() -> Result<(), AppError> {
    let h = build_test_state_with_renderer(AppConfig::default(), FakeRenderer::unavailable()).await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 0).await?;
    let user = seed_user(db).await?;

    let err = draft_api::join_draft(&h.state, draft.draft_id, user)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RedactionService);

    assert!(seats::find_seat_for_user(db, draft.draft_id, user)
        .await?
        .is_some());
    Ok(())
}
