use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info, warn};

use super::DraftFlowService;
use crate::domain::seat_state::{deepest_round_population, sole_blocker, SeatSnapshot};
use crate::errors::domain::DomainError;
use crate::logging::pii::Redacted;
use crate::notify::Notice;
use crate::repos::seats::Seat;
use crate::repos::{packs, seats, users};

/// Snapshot every seat of a draft, by position.
pub async fn load_seat_snapshots<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<SeatSnapshot>, DomainError> {
    let seated = seats::list_with_occupants(conn, draft_id).await?;
    let mut by_seat: HashMap<i64, (i64, Vec<_>)> = HashMap::new();
    for pack in packs::list_in_draft(conn, draft_id).await? {
        let entry = by_seat.entry(pack.seat_id).or_default();
        if pack.is_picks_pile() {
            entry.0 = pack.count;
        } else {
            entry.1.push(pack.queued());
        }
    }

    Ok(seated
        .into_iter()
        .map(|row| {
            let (picks_pile_size, queued) = by_seat.remove(&row.seat.id).unwrap_or_default();
            SeatSnapshot {
                seat_id: row.seat.id,
                position: row.seat.position,
                user_id: row.seat.user_id,
                contact_id: row.occupant.and_then(|o| o.contact_id),
                round: row.seat.round,
                picks_pile_size,
                queued,
            }
        })
        .collect())
}

impl DraftFlowService {
    /// Who to alert after the acting seat emptied its queue.
    ///
    /// `acting_round` is the acting seat's round before it advanced. Lookup
    /// failures are logged and yield no notices.
    pub(super) async fn blocker_notices(
        &self,
        txn: &DatabaseTransaction,
        draft_id: i64,
        acting_round: i32,
        recipient: &Seat,
    ) -> Vec<Notice> {
        match self
            .find_blocker_notices(txn, draft_id, acting_round, recipient)
            .await
        {
            Ok(notices) => notices,
            Err(e) => {
                warn!(draft_id, error = %e, "Could not determine who to notify");
                Vec::new()
            }
        }
    }

    async fn find_blocker_notices(
        &self,
        txn: &DatabaseTransaction,
        draft_id: i64,
        acting_round: i32,
        recipient: &Seat,
    ) -> Result<Vec<Notice>, DomainError> {
        if recipient.round == acting_round {
            let contact = match recipient.user_id {
                Some(user_id) => users::find_user(txn, user_id)
                    .await?
                    .and_then(|u| u.contact_id),
                None => None,
            };
            return Ok(match contact {
                Some(contact_id) => {
                    info!(
                        draft_id,
                        position = recipient.position,
                        contact = %Redacted(&contact_id),
                        "Notifying next seat"
                    );
                    vec![Notice::NewPicks {
                        draft_id,
                        contact_id,
                    }]
                }
                None => Vec::new(),
            });
        }

        // The recipient is behind us. If we are alone in the deepest round we
        // most likely just handed the laggard their last pack, and they were
        // notified on an earlier pass.
        let snapshots = load_seat_snapshots(txn, draft_id).await?;
        if deepest_round_population(&snapshots) <= 1 {
            debug!(draft_id, "Acting seat leads alone; no blocker alert");
            return Ok(Vec::new());
        }

        Ok(match sole_blocker(&snapshots, &self.format) {
            Some(SeatSnapshot {
                position,
                contact_id: Some(contact_id),
                ..
            }) => {
                info!(
                    draft_id,
                    position = *position,
                    contact = %Redacted(contact_id),
                    "Notifying blocking seat"
                );
                vec![Notice::NewPicks {
                    draft_id,
                    contact_id: contact_id.clone(),
                }]
            }
            _ => Vec::new(),
        })
    }
}
