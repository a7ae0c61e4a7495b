//! DTOs for drafts_sea adapter.

use sea_orm::FromQueryResult;

/// DTO for creating a new draft.
#[derive(Debug, Clone)]
pub struct DraftCreate {
    pub name: String,
}

impl DraftCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Per-draft seat aggregates relative to one user.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SeatTallyRow {
    pub draft_id: i64,
    pub seat_count: i64,
    pub open_seats: i64,
    pub joined_count: i64,
    pub min_round: Option<i32>,
}
