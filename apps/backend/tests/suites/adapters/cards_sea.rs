use draft_backend::adapters::cards_sea;
use draft_backend::db::require_db;
use draft_backend::AppError;

use crate::support::build_test_state;
use crate::support::factory::seed_draft;

#[tokio::test]
async fn move_is_guarded_by_current_pack() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 1).await?;
    let seat = draft.seat(0);
    let card_id = seat.packs[0].card_ids[0];

    assert_eq!(
        cards_sea::move_card(db, card_id, seat.packs[0].pack_id, seat.picks_pile_id).await?,
        1
    );
    assert_eq!(
        cards_sea::move_card(db, card_id, seat.packs[0].pack_id, seat.picks_pile_id).await?,
        0
    );

    let card = cards_sea::find_by_id(db, card_id).await?.unwrap();
    assert_eq!(card.pack_id, seat.picks_pile_id);
    assert_eq!(card.original_pack_id, seat.packs[0].pack_id);
    Ok(())
}

#[tokio::test]
async fn placement_ignores_where_cards_went() -> Result<(), AppError> {
    let h = build_test_state().await?;
    let db = require_db(&h.state)?;
    let format = h.state.config.format;
    let draft = seed_draft(db, &format, 1).await?;
    let seat = draft.seat(0);
    let card_id = seat.packs[2].card_ids[4];
    cards_sea::move_card(db, card_id, seat.packs[2].pack_id, seat.picks_pile_id).await?;

    let placed = cards_sea::list_placed_in_draft(db, draft.draft_id).await?;
    assert_eq!(placed.len(), 8 * 3 * 15);
    let row = placed.iter().find(|r| r.card_id == card_id).unwrap();
    assert_eq!(row.position, 0);
    assert_eq!(row.pack_round, 3);
    assert!(placed.windows(2).all(|w| w[0].card_id < w[1].card_id));
    Ok(())
}
