//! Draft repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::drafts_sea as drafts_adapter;
use crate::domain::status::{SeatTally, Viewer};
use crate::entities::drafts;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Draft domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub id: i64,
    pub name: String,
}

impl From<drafts::Model> for Draft {
    fn from(model: drafts::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

pub async fn find_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Option<Draft>, DomainError> {
    let draft = drafts_adapter::find_by_id(conn, draft_id).await?;
    Ok(draft.map(Draft::from))
}

pub async fn require_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Draft, DomainError> {
    find_draft(conn, draft_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Draft, format!("Draft {draft_id} not found"))
    })
}

pub async fn list_drafts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Draft>, DomainError> {
    let drafts = drafts_adapter::list_all(conn).await?;
    Ok(drafts.into_iter().map(Draft::from).collect())
}

pub async fn create_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Draft, DomainError> {
    let draft = drafts_adapter::create_draft(conn, drafts_adapter::DraftCreate::new(name)).await?;
    Ok(Draft::from(draft))
}

/// Seat aggregates keyed by draft id. Drafts without seats are absent.
pub async fn seat_tallies<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    viewer: Viewer,
    only_draft: Option<i64>,
) -> Result<HashMap<i64, SeatTally>, DomainError> {
    let rows = drafts_adapter::seat_tallies(conn, viewer.wire_id(), only_draft).await?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let tally = SeatTally {
                seats: u64::try_from(row.seat_count).unwrap_or(0),
                available_seats: u64::try_from(row.open_seats).unwrap_or(0),
                joined: viewer.is_authenticated() && row.joined_count > 0,
                min_round: row.min_round,
            };
            (row.draft_id, tally)
        })
        .collect())
}
