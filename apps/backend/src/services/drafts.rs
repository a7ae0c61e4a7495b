//! Draft list and per-viewer status.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::domain::format::DraftFormat;
use crate::domain::status::{DraftList, DraftListEntry, Viewer};
use crate::error::AppError;
use crate::repos::drafts;

/// Draft status service - generic over ConnectionTrait for transaction support.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftService {
    format: DraftFormat,
}

impl DraftService {
    pub fn new(format: DraftFormat) -> Self {
        Self { format }
    }

    /// Every draft, ordered by id, classified for `viewer`.
    pub async fn draft_list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        viewer: Viewer,
    ) -> Result<DraftList, AppError> {
        let all = drafts::list_drafts(conn).await?;
        let tallies = drafts::seat_tallies(conn, viewer, None).await?;

        let entries: Vec<DraftListEntry> = all
            .into_iter()
            .map(|draft| {
                let tally = tallies.get(&draft.id).copied().unwrap_or_default();
                DraftListEntry::from_tally(draft.id, draft.name, tally, viewer, &self.format)
            })
            .collect();

        debug!(viewer = viewer.wire_id(), drafts = entries.len(), "Draft list computed");
        Ok(DraftList { drafts: entries })
    }

    /// One draft's entry for `viewer`; `NotFound` for an unknown draft.
    pub async fn draft_list_entry<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        viewer: Viewer,
        draft_id: i64,
    ) -> Result<DraftListEntry, AppError> {
        let draft = drafts::require_draft(conn, draft_id).await?;
        let tallies = drafts::seat_tallies(conn, viewer, Some(draft_id)).await?;
        let tally = tallies.get(&draft_id).copied().unwrap_or_default();
        Ok(DraftListEntry::from_tally(
            draft.id,
            draft.name,
            tally,
            viewer,
            &self.format,
        ))
    }
}
