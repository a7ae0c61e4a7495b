//! Services bridge the pure domain layer with persistence.

pub mod draft_api;
pub mod draft_flow;
pub mod drafts;
pub mod replay;
