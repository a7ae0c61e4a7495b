//! Replay composition and visibility.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::domain::format::DraftFormat;
use crate::domain::replay::{
    build_layout, replay_access, DraftReplayState, PerspectiveRequest, ReplayAccess, SeatPlayer,
};
use crate::domain::status::Viewer;
use crate::error::AppError;
use crate::perspective::{DraftView, PerspectiveRenderer};
use crate::repos::{cards, drafts, events, seats};
use crate::services::drafts::DraftService;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayService {
    format: DraftFormat,
}

impl ReplayService {
    pub fn new(format: DraftFormat) -> Self {
        Self { format }
    }

    /// Full, unredacted state: original pack layout per seat plus every event.
    pub async fn replay_state<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        draft_id: i64,
    ) -> Result<DraftReplayState, AppError> {
        let draft = drafts::require_draft(conn, draft_id).await?;

        let players: Vec<SeatPlayer> = seats::list_with_occupants(conn, draft_id)
            .await?
            .into_iter()
            .map(|row| SeatPlayer {
                position: row.seat.position,
                user_id: row.seat.user_id,
                display_name: row.occupant.as_ref().map(|o| o.display_name.clone()),
                picture: row.occupant.and_then(|o| o.picture),
            })
            .collect();

        let placed = cards::list_placed(conn, draft_id).await?;
        let seats = build_layout(&self.format, &players, &placed)?;
        let events = events::list_events(conn, draft_id).await?;

        Ok(DraftReplayState {
            draft_id: draft.id,
            draft_name: draft.name,
            seats,
            events,
        })
    }

    /// What `viewer` may see of a draft. Redacted views come from `renderer`.
    pub async fn draft_view<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        renderer: &dyn PerspectiveRenderer,
        draft_id: i64,
        viewer: Viewer,
    ) -> Result<DraftView, AppError> {
        let entry = DraftService::new(self.format)
            .draft_list_entry(conn, viewer, draft_id)
            .await?;

        let own_round = match (entry.joined, viewer.user_id()) {
            (true, Some(user_id)) => seats::find_seat_for_user(conn, draft_id, user_id)
                .await?
                .map(|seat| seat.round),
            _ => None,
        };

        let state = self.replay_state(conn, draft_id).await?;
        let access = replay_access(&entry, viewer, own_round, &self.format);
        debug!(draft_id, viewer = viewer.wire_id(), ?access, "Replay access decided");

        match access {
            ReplayAccess::Full => Ok(DraftView::Full(state)),
            ReplayAccess::Redacted => {
                let request = PerspectiveRequest {
                    user: viewer.wire_id(),
                    draft: &state,
                };
                let body = renderer.render(&request).await?;
                Ok(DraftView::Redacted(body))
            }
        }
    }
}
