// Replay layout and who sees it unredacted.

use draft_backend::adapters::seats_sea;
use draft_backend::db::require_db;
use draft_backend::domain::status::Viewer;
use draft_backend::perspective::DraftView;
use draft_backend::services::draft_api;
use draft_backend::services::replay::ReplayService;
use draft_backend::AppError;
use serde_json::json;

use crate::support::build_test_state;
use crate::support::factory::{seed_draft, seed_user};
use crate::support::fake_renderer::FakeRenderer;

#[tokio::test]
async fn layout_follows_original_placement() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 2).await?;

    let state = ReplayService::new(format).replay_state(db, draft.draft_id).await?;
    assert_eq!(state.draft_id, draft.draft_id);
    assert_eq!(state.seats.len(), 8);
    assert!(state.events.is_empty());

    let seat1 = &state.seats[1];
    assert_eq!(seat1.player_name, "player 1");
    assert_eq!(seat1.player_id, draft.user(1));
    assert_eq!(seat1.player_image, "https://img.test/1.png");
    assert_eq!(seat1.packs.len(), 3);
    let first_pack = &draft.seat(1).packs[0];
    assert_eq!(seat1.packs[0].len(), 15);
    assert_eq!(
        seat1.packs[0][0],
        json!({"name": "card 1-1-0", "id": first_pack.card_ids[0]})
    );

    // Unoccupied seats still carry their packs
    assert_eq!(state.seats[5].player_id, 0);
    assert_eq!(state.seats[5].packs[2].len(), 15);
    Ok(())
}

#[tokio::test]
async fn spectator_of_a_full_table_sees_everything_without_the_renderer() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 8).await?;
    let outsider = seed_user(db).await?;

    let view = draft_api::draft_view(&h.state, draft.draft_id, Viewer::User(outsider)).await?;
    match view {
        DraftView::Full(state) => assert_eq!(state.seats.len(), 8),
        other => panic!("expected full replay, got {other:?}"),
    }
    assert!(h.renderer.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn member_mid_draft_gets_the_renderer_response_verbatim() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 8).await?;
    let member = draft.user(3);
    seats_sea::raise_round(db, draft.seat(3).seat_id, 2).await?;

    let view = draft_api::draft_view(&h.state, draft.draft_id, Viewer::User(member)).await?;
    assert_eq!(view.to_json()?, FakeRenderer::response_for(member));
    assert_eq!(h.renderer.calls(), vec![(member, draft.draft_id)]);
    Ok(())
}

#[tokio::test]
async fn member_past_the_last_round_sees_everything() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 8).await?;
    let member = draft.user(0);
    seats_sea::raise_round(db, draft.seat(0).seat_id, format.deep_replay_round).await?;

    let view = draft_api::draft_view(&h.state, draft.draft_id, Viewer::User(member)).await?;
    assert!(view.is_full());
    assert!(h.renderer.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn anonymous_viewer_is_redacted_with_user_zero() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 4).await?;

    let view = draft_api::draft_view(&h.state, draft.draft_id, Viewer::Anonymous).await?;
    assert_eq!(view, DraftView::Redacted(FakeRenderer::response_for(0)));
    assert_eq!(h.renderer.calls(), vec![(0, draft.draft_id)]);
    Ok(())
}
