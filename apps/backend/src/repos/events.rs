//! Event log repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::events_sea as events_adapter;
use crate::domain::replay::{join_announcements, split_announcements, DraftEvent, PICK_EVENT_TYPE};
use crate::entities::events;
use crate::errors::domain::DomainError;

/// A pick about to be written to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPickEvent<'a> {
    pub draft_id: i64,
    pub position: i32,
    pub round: i32,
    pub announcements: &'a [String],
    pub card1: i64,
    pub card2: Option<i64>,
    pub picks_pile_size: i64,
}

impl From<events::Model> for DraftEvent {
    fn from(model: events::Model) -> Self {
        let mut cards = vec![model.card1];
        cards.extend(model.card2);
        Self {
            position: model.position,
            announcements: split_announcements(&model.announcement),
            librarian: model.card2.is_some(),
            cards,
            draft_modified: model.id,
            player_modified: model.modified,
            round: model.round,
            kind: PICK_EVENT_TYPE.to_string(),
        }
    }
}

pub async fn record_pick<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    event: NewPickEvent<'_>,
) -> Result<i64, DomainError> {
    let dto = events_adapter::EventCreate {
        draft_id: event.draft_id,
        position: event.position,
        round: event.round,
        announcement: join_announcements(event.announcements),
        card1: event.card1,
        card2: event.card2,
        modified: event.picks_pile_size,
    };
    let row = events_adapter::create_event(conn, dto).await?;
    Ok(row.id)
}

pub async fn list_events<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<DraftEvent>, DomainError> {
    let rows = events_adapter::list_by_draft(conn, draft_id).await?;
    Ok(rows.into_iter().map(DraftEvent::from).collect())
}
