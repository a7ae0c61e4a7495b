//! Backend test support utilities
//!
//! Logging initialisation shared by unit and integration tests, plus helpers
//! for generating unique fixture data.

pub mod logging;
pub mod unique_helpers;
