// A whole draft played in lockstep by a full table.
//
// Every seat picks once per step from its next pack, so rounds turn over
// together at 15, 30 and 45 picks.

use draft_backend::db::require_db;
use draft_backend::domain::seat_state::SeatState;
use draft_backend::domain::status::{DraftStatus, Viewer};
use draft_backend::services::draft_api;
use draft_backend::services::draft_flow::{load_seat_snapshots, DraftFlowService};
use draft_backend::AppError;
use sea_orm::TransactionTrait;

use crate::support::build_test_state;
use crate::support::factory::{first_card_in, seed_draft, seed_user};

#[tokio::test]
async fn seats_advance_at_each_pack_boundary_until_finished() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 8).await?;
    let service = DraftFlowService::from_state(&h.state);
    let picks_per_round = i64::from(format.cards_per_pack);

    let txn = db.begin().await?;
    for round in 1..=format.round_count {
        for _ in 0..picks_per_round {
            for position in 0..i32::from(format.table_size) {
                let snapshots = load_seat_snapshots(&txn, draft.draft_id).await?;
                let seat = &snapshots[usize::try_from(position).unwrap()];
                assert_eq!(seat.round, round, "seat {position} left round {round} early");
                let pack = seat
                    .next_pack()
                    .unwrap_or_else(|| panic!("seat {position} had nothing to pick in round {round}"));
                let card_id = first_card_in(&txn, pack.pack_id).await?.unwrap();
                service
                    .apply_pick(&txn, draft.user(position), card_id, true)
                    .await?;
            }
        }

        let snapshots = load_seat_snapshots(&txn, draft.draft_id).await?;
        for seat in &snapshots {
            assert_eq!(seat.round, round + 1, "seat {} after round {round}", seat.position);
            assert_eq!(seat.picks_pile_size, picks_per_round * i64::from(round));
        }
    }

    let snapshots = load_seat_snapshots(&txn, draft.draft_id).await?;
    assert!(snapshots
        .iter()
        .all(|s| s.state(&format) == SeatState::DraftFinished));
    assert!(snapshots
        .iter()
        .all(|s| s.queued.iter().all(|p| p.count == 0)));
    txn.commit().await?;

    let member = draft_api::draft_list_entry(&h.state, Viewer::User(draft.user(0)), draft.draft_id)
        .await?;
    assert!(member.finished);
    assert_eq!(member.status, DraftStatus::Member);

    let outsider = seed_user(db).await?;
    let entry = draft_api::draft_list_entry(&h.state, Viewer::User(outsider), draft.draft_id).await?;
    assert!(entry.finished);
    assert_eq!(entry.status, DraftStatus::Spectator);

    let view = draft_api::draft_view(&h.state, draft.draft_id, Viewer::Anonymous).await?;
    assert!(view.is_full());
    assert!(h.renderer.calls().is_empty());
    Ok(())
}
