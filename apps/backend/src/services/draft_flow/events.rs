use sea_orm::DatabaseTransaction;

use super::{DraftFlowService, PickApplied};
use crate::errors::domain::DomainError;
use crate::repos::events::{self, NewPickEvent};

impl DraftFlowService {
    /// Append the event for an applied pick. Events are never updated.
    pub(super) async fn record_pick(
        &self,
        txn: &DatabaseTransaction,
        applied: &PickApplied,
        announcements: &[String],
        card1: i64,
        card2: Option<i64>,
    ) -> Result<i64, DomainError> {
        events::record_pick(
            txn,
            NewPickEvent {
                draft_id: applied.draft_id,
                position: applied.position,
                round: applied.round,
                announcements,
                card1,
                card2,
                picks_pile_size: applied.picks_pile_size,
            },
        )
        .await
    }
}
