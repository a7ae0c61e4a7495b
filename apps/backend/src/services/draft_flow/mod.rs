//! Pick/pass flow - bridges pure draft logic with DB persistence.
//!
//! Every entry point runs inside a caller-owned transaction. Notices are
//! returned to the caller rather than sent, and views are left to the
//! caller, so nothing leaves the process before the transaction commits.

mod blockers;
mod events;
mod join;
mod picks;

pub use blockers::load_seat_snapshots;

use crate::domain::format::DraftFormat;
use crate::notify::Notice;
use crate::perspective::DraftView;
use crate::state::app_state::AppState;

/// Draft flow service - mutations for one draft format.
#[derive(Debug, Clone, Copy)]
pub struct DraftFlowService {
    format: DraftFormat,
}

impl DraftFlowService {
    pub fn new(format: DraftFormat) -> Self {
        Self { format }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.config.format)
    }
}

/// Result of moving one card into a picks pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickApplied {
    pub draft_id: i64,
    pub seat_id: i64,
    pub position: i32,
    /// Pack the card was taken from.
    pub pack_id: i64,
    /// Seat round when the pick was made.
    pub round: i32,
    /// Picks-pile size including the new card.
    pub picks_pile_size: i64,
    /// Seat round after the pick; equal to `round` unless the seat advanced.
    pub seat_round: i32,
    pub notices: Vec<Notice>,
}

/// A committed pick and the picker's view of the draft afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PickOutcome {
    pub draft_id: i64,
    pub view: DraftView,
    /// Already dispatched by the time the caller sees them.
    pub notices: Vec<Notice>,
}
