//! Domain layer: pure draft logic types and helpers.

pub mod format;
pub mod pick;
pub mod replay;
pub mod routing;
pub mod seat_state;
pub mod status;

#[cfg(test)]
mod tests_round_advance;
#[cfg(test)]
mod tests_status;

// Re-exports for ergonomics
pub use format::DraftFormat;
pub use pick::PickRequest;
pub use replay::{DraftEvent, DraftReplayState, ReplayAccess, SeatReplay};
pub use routing::{next_position, PassDirection};
pub use seat_state::{QueuedPack, SeatSnapshot, SeatState};
pub use status::{DraftList, DraftListEntry, DraftStatus, Viewer};
