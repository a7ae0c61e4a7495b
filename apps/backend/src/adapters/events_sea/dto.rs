//! DTOs for events_sea adapter.

/// DTO for appending a pick event.
#[derive(Debug, Clone)]
pub struct EventCreate {
    pub draft_id: i64,
    pub position: i32,
    pub round: i32,
    pub announcement: String,
    pub card1: i64,
    pub card2: Option<i64>,
    pub modified: i64,
}
