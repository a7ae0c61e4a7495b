//! DTOs for seats_sea adapter.

/// DTO for creating a seat at a draft table.
#[derive(Debug, Clone)]
pub struct SeatCreate {
    pub draft_id: i64,
    pub position: i32,
    pub user_id: Option<i64>,
}

impl SeatCreate {
    pub fn new(draft_id: i64, position: i32) -> Self {
        Self {
            draft_id,
            position,
            user_id: None,
        }
    }

    pub fn occupied_by(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}
