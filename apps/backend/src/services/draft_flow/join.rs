use rand::seq::IndexedRandom;
use sea_orm::DatabaseTransaction;
use tracing::info;

use super::DraftFlowService;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::seats::{self, Seat};
use crate::repos::drafts;

impl DraftFlowService {
    /// Seat a user at a random empty seat.
    pub async fn join(
        &self,
        txn: &DatabaseTransaction,
        draft_id: i64,
        user_id: i64,
    ) -> Result<Seat, AppError> {
        Ok(self.claim_random_seat(txn, draft_id, user_id).await?)
    }

    /// Pick uniformly among the draft's empty seats and claim it.
    pub async fn claim_random_seat(
        &self,
        txn: &DatabaseTransaction,
        draft_id: i64,
        user_id: i64,
    ) -> Result<Seat, DomainError> {
        drafts::require_draft(txn, draft_id).await?;

        if seats::find_seat_for_user(txn, draft_id, user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::validation(
                ValidationKind::AlreadyJoined,
                format!("user {user_id} already joined draft {draft_id}"),
            ));
        }

        let empty = seats::list_unoccupied(txn, draft_id).await?;
        let chosen = {
            let mut rng = rand::rng();
            empty.choose(&mut rng).cloned()
        };
        let seat = chosen.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::NoSeatsAvailable,
                format!("draft {draft_id} has no empty seats"),
            )
        })?;

        seats::claim_seat(txn, seat.id, user_id).await?;
        info!(draft_id, user_id, position = seat.position, "User joined draft");

        Ok(Seat {
            user_id: Some(user_id),
            ..seat
        })
    }
}
