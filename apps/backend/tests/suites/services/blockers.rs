// Who gets told they have new picks.

use draft_backend::config::app::AppConfig;
use draft_backend::db::require_db;
use draft_backend::db::txn::{with_txn, TxnMode};
use draft_backend::domain::format::DraftFormat;
use draft_backend::domain::pick::PickRequest;
use draft_backend::notify::Notice;
use draft_backend::services::draft_api;
use draft_backend::services::draft_flow::DraftFlowService;
use draft_backend::{AppError, ErrorCode};
use sea_orm::TransactionTrait;

use crate::support::factory::{cards_in, seed_draft};
use crate::support::{build_test_state, build_test_state_with};

fn config_with(format: DraftFormat) -> AppConfig {
    AppConfig {
        format,
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn passing_the_last_pack_of_the_round_alerts_the_next_seat() -> Result<(), AppError> {
    // Seat 0 holds a single round-1 pack, so passing it leaves nothing queued
    let format = DraftFormat::new(8, 1, 3)?;
    let h = build_test_state_with(config_with(format)).await?;
    let db = require_db(&h.state)?;
    let draft = seed_draft(db, &format, 8).await?;

    let card_id = draft.seat(0).packs[0].card_ids[0];
    let outcome =
        draft_api::submit_pick(&h.state, draft.user(0), PickRequest::from_card_ids(&[card_id])?)
            .await?;

    let expected = vec![Notice::NewPicks {
        draft_id: draft.draft_id,
        contact_id: draft.seat(1).contact_id.clone().unwrap(),
    }];
    assert_eq!(outcome.notices, expected);
    assert_eq!(h.notifier.sent(), expected);
    Ok(())
}

#[tokio::test]
async fn nobody_is_alerted_while_the_picker_still_holds_a_pack_for_the_round() -> Result<(), AppError> {
    let format = DraftFormat::new(8, 2, 3)?;
    let h = build_test_state_with(config_with(format)).await?;
    let db = require_db(&h.state)?;
    let draft = seed_draft(db, &format, 8).await?;

    // Seat 7 passes right into seat 0, which is alerted
    let passed = &draft.seat(7).packs[0];
    draft_api::submit_pick(&h.state, draft.user(7), PickRequest::from_card_ids(&[passed.card_ids[0]])?)
        .await?;
    let alert_for_seat0 = vec![Notice::NewPicks {
        draft_id: draft.draft_id,
        contact_id: draft.seat(0).contact_id.clone().unwrap(),
    }];
    assert_eq!(h.notifier.sent(), alert_for_seat0);

    // Seat 0 picks from its own fuller pack and still has seat 7's pack queued
    let card_id = draft.seat(0).packs[0].card_ids[0];
    let outcome =
        draft_api::submit_pick(&h.state, draft.user(0), PickRequest::from_card_ids(&[card_id])?)
            .await?;
    assert!(outcome.notices.is_empty());
    assert_eq!(h.notifier.sent(), alert_for_seat0);
    Ok(())
}

#[tokio::test]
async fn empty_recipient_seat_gets_no_alert() -> Result<(), AppError> {
    let format = DraftFormat::new(8, 1, 3)?;
    let h = build_test_state_with(config_with(format)).await?;
    let db = require_db(&h.state)?;
    let draft = seed_draft(db, &format, 1).await?;

    let card_id = draft.seat(0).packs[0].card_ids[0];
    let outcome =
        draft_api::submit_pick(&h.state, draft.user(0), PickRequest::from_card_ids(&[card_id])?)
            .await?;
    assert!(outcome.notices.is_empty());
    assert!(h.notifier.sent().is_empty());
    Ok(())
}

#[tokio::test]
async fn laggard_holding_up_the_table_is_alerted() -> Result<(), AppError> {
    // Three seats, one-card packs, two rounds.
    let format = DraftFormat::new(3, 1, 2)?;
    let h = build_test_state_with(config_with(format)).await?;
    let db = require_db(&h.state)?;
    let draft = seed_draft(db, &format, 3).await?;
    let service = DraftFlowService::from_state(&h.state);
    let contact = |position: i32| draft.seat(position).contact_id.clone().unwrap();
    let notice_for = |position: i32| Notice::NewPicks {
        draft_id: draft.draft_id,
        contact_id: contact(position),
    };

    let txn = db.begin().await?;

    // Round 1: seats 0 and 1 pick, each alerting its right-hand neighbour
    let a = service
        .apply_pick(&txn, draft.user(0), draft.seat(0).packs[0].card_ids[0], true)
        .await?;
    assert_eq!(a.seat_round, 2);
    assert_eq!(a.notices, vec![notice_for(1)]);

    let b = service
        .apply_pick(&txn, draft.user(1), draft.seat(1).packs[0].card_ids[0], true)
        .await?;
    assert_eq!(b.notices, vec![notice_for(2)]);

    // Seat 0 finishes round 2 alone and passes left to seat 2, still in round 1
    let c = service
        .apply_pick(&txn, draft.user(0), draft.seat(0).packs[1].card_ids[0], true)
        .await?;
    assert_eq!(c.round, 2);
    assert_eq!(c.seat_round, 3);
    assert!(c.notices.is_empty(), "a lone leader alerts nobody");

    // Seat 1 joins seat 0 past the last round; seat 2 is the only one who can pick
    let d = service
        .apply_pick(&txn, draft.user(1), draft.seat(1).packs[1].card_ids[0], true)
        .await?;
    assert_eq!(d.seat_round, 3);
    assert_eq!(d.notices, vec![notice_for(2)]);

    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn rolled_back_pick_alerts_nobody() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 8).await?;
    let service = DraftFlowService::from_state(&h.state);
    let user = draft.user(0);
    let request = PickRequest::from_card_ids(&[draft.seat(0).packs[0].card_ids[0]])?;

    let attempt = request.clone();
    let err = with_txn(&h.state, TxnMode::ReadWrite, move |txn| {
        Box::pin(async move {
            let applied = service.pick(txn, user, &attempt).await?;
            assert_eq!(applied.notices.len(), 1);
            Err::<(), _>(AppError::internal("abandon the pick"))
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);
    assert!(h.notifier.sent().is_empty());
    assert!(cards_in(db, draft.seat(0).picks_pile_id).await?.is_empty());

    // The same pick goes through once its transaction commits
    let outcome = draft_api::submit_pick(&h.state, user, request).await?;
    assert_eq!(h.notifier.sent(), outcome.notices);
    assert_eq!(outcome.notices.len(), 1);
    Ok(())
}
