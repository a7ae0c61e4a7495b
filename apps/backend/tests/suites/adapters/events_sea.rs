use draft_backend::adapters::events_sea::{self, EventCreate};
use draft_backend::db::require_db;
use draft_backend::AppError;

use crate::support::build_test_state;
use crate::support::factory::seed_draft;

#[tokio::test]
async fn events_read_back_in_insertion_order() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 2).await?;
    let seat = draft.seat(0);

    for (i, card) in seat.packs[0].card_ids.iter().take(3).enumerate() {
        events_sea::create_event(
            db,
            EventCreate {
                draft_id: draft.draft_id,
                position: 0,
                round: 1,
                announcement: if i == 0 { String::new() } else { format!("pick {i}") },
                card1: *card,
                card2: None,
                modified: i64::try_from(i).unwrap() + 1,
            },
        )
        .await?;
    }

    let rows = events_sea::list_by_draft(db, draft.draft_id).await?;
    assert_eq!(rows.len(), 3);
    assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(rows[0].announcement, "");
    assert_eq!(rows[2].modified, 3);
    assert_eq!(rows[1].card1, seat.packs[0].card_ids[1]);

    let other = seed_draft(db, &format, 0).await?;
    assert!(events_sea::list_by_draft(db, other.draft_id).await?.is_empty());
    Ok(())
}
