//! DTOs for packs_sea adapter.

use crate::entities::packs::PICKS_PILE_ROUND;

/// DTO for creating a pack at its original seat.
#[derive(Debug, Clone)]
pub struct PackCreate {
    pub seat_id: i64,
    pub round: i32,
}

impl PackCreate {
    pub fn booster(seat_id: i64, round: i32) -> Self {
        Self { seat_id, round }
    }

    pub fn picks_pile(seat_id: i64) -> Self {
        Self {
            seat_id,
            round: PICKS_PILE_ROUND,
        }
    }
}
