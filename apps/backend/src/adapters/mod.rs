//! Adapters for external dependencies.

pub mod cards_sea;
pub mod drafts_sea;
pub mod events_sea;
pub mod packs_sea;
pub mod seats_sea;
pub mod users_sea;
