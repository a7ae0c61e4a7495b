use sea_orm::DatabaseTransaction;
use tracing::{debug, info, warn};

use super::{DraftFlowService, PickApplied};
use crate::domain::pick::PickRequest;
use crate::domain::routing::next_position;
use crate::domain::seat_state::SeatSnapshot;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::seats::{self, Seat};
use crate::repos::{cards, packs};

/// The seat's packs as they stand in `txn`.
async fn seat_snapshot(txn: &DatabaseTransaction, seat: &Seat) -> Result<SeatSnapshot, DomainError> {
    let at_seat = packs::list_at_seat(txn, seat.id).await?;
    Ok(SeatSnapshot {
        seat_id: seat.id,
        position: seat.position,
        user_id: seat.user_id,
        contact_id: None,
        round: seat.round,
        picks_pile_size: at_seat
            .iter()
            .find(|p| p.is_picks_pile())
            .map_or(0, |p| p.count),
        queued: at_seat
            .iter()
            .filter(|p| !p.is_picks_pile())
            .map(|p| p.queued())
            .collect(),
    })
}

/// Failures that would tell the caller where a card really is.
fn reveals_card_location(err: &DomainError) -> bool {
    match err {
        DomainError::Validation(kind, _) => kind.is_pick_location(),
        DomainError::NotFound(NotFoundKind::Card, _) => true,
        _ => false,
    }
}

impl DraftFlowService {
    /// Make a pick for `user_id`.
    ///
    /// Co-picks are rejected before anything is touched. Location failures
    /// are logged in full and surfaced as a generic rejection.
    pub async fn pick(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
        request: &PickRequest,
    ) -> Result<PickApplied, AppError> {
        let card_id = match request {
            PickRequest::Single { card_id, .. } => *card_id,
            PickRequest::CoPick { first, second, .. } => {
                debug!(user_id, first, second, "Rejecting co-pick");
                return Err(AppError::not_implemented(
                    "picking two cards at once is not implemented",
                ));
            }
        };

        let applied = match self.apply_pick(txn, user_id, card_id, true).await {
            Ok(applied) => applied,
            Err(e) if reveals_card_location(&e) => {
                warn!(user_id, card_id, error = %e, "Pick rejected");
                return Err(AppError::pick_rejected());
            }
            Err(e) => return Err(e.into()),
        };

        self.record_pick(txn, &applied, request.announcements(), card_id, None)
            .await?;
        Ok(applied)
    }

    /// Validate a pick and move the card into the picker's picks pile.
    ///
    /// With `should_pass` the rest of the pack goes to the next seat, the
    /// picker's round may advance and blocked seats are looked for. Without
    /// it the pack stays put.
    pub async fn apply_pick(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
        card_id: i64,
        should_pass: bool,
    ) -> Result<PickApplied, DomainError> {
        let card = cards::require_card(txn, card_id).await?;
        let pack = packs::require_pack(txn, card.pack_id).await?;
        let seat = seats::require_seat(txn, pack.seat_id).await?;

        if seat.user_id != Some(user_id) {
            return Err(DomainError::validation(
                ValidationKind::NotYours,
                format!("card {card_id} is held by seat {} not user {user_id}", seat.id),
            ));
        }
        if pack.is_picks_pile() {
            return Err(DomainError::validation(
                ValidationKind::AlreadyPicked,
                format!("card {card_id} is already in a picks pile"),
            ));
        }

        let snapshot = seat_snapshot(txn, &seat).await?;
        if snapshot.next_pack().map(|p| p.pack_id) != Some(pack.id) {
            return Err(DomainError::validation(
                ValidationKind::NotNextPack,
                format!(
                    "pack {} is not next up for seat {} in round {}",
                    pack.id, seat.id, seat.round
                ),
            ));
        }

        let pile = packs::require_picks_pile(txn, seat.id).await?;
        cards::move_card(txn, card.id, pack.id, pile.id).await?;
        let picks_pile_size = pile.count + 1;

        let mut applied = PickApplied {
            draft_id: seat.draft_id,
            seat_id: seat.id,
            position: seat.position,
            pack_id: pack.id,
            round: seat.round,
            picks_pile_size,
            seat_round: seat.round,
            notices: Vec::new(),
        };

        if should_pass {
            let to_position = next_position(seat.position, seat.round, self.format.table_size)?;
            let recipient = seats::require_seat_at(txn, seat.draft_id, to_position).await?;
            packs::move_pack(txn, pack.id, seat.id, recipient.id).await?;
            debug!(
                draft_id = seat.draft_id,
                pack_id = pack.id,
                from = seat.position,
                to = to_position,
                "Pack passed"
            );

            let remaining = seat_snapshot(txn, &seat)
                .await?
                .packs_left_in_round(seat.round);

            if remaining == 0 {
                let picked = u64::try_from(picks_pile_size).unwrap_or(0);
                let next_round = self.format.advance_round(seat.round, picked);
                if seats::raise_round(txn, seat.id, next_round).await? {
                    info!(
                        draft_id = seat.draft_id,
                        position = seat.position,
                        round = next_round,
                        "Seat advanced"
                    );
                }
                applied.seat_round = next_round;
                applied.notices = self
                    .blocker_notices(txn, seat.draft_id, seat.round, &recipient)
                    .await;
            }
        }

        info!(
            draft_id = applied.draft_id,
            user_id,
            card_id,
            round = applied.round,
            "Card picked"
        );
        Ok(applied)
    }
}
