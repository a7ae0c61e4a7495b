//! Error codes for the draft backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! surfaced to callers of the entry points.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Pick validation
    /// Generic code for every pick-location failure
    PickRejected,
    /// Wrong number of card ids in a pick request
    InvalidPickCount,

    // Join validation
    /// User already holds a seat in the draft
    AlreadyJoined,
    /// Every seat in the draft is occupied
    NoSeatsAvailable,

    /// General validation error
    ValidationError,

    // Resource Not Found
    DraftNotFound,
    CardNotFound,
    SeatNotFound,
    NotFound,

    // Conflicts
    /// Another pick moved the card first
    PickRace,
    /// Another join claimed the seat first
    SeatTaken,
    Conflict,

    /// Feature reserved but not supported yet
    NotImplemented,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    /// Request-scoped transaction exceeded its deadline
    TxnTimeout,
    /// Perspective renderer unreachable or misbehaving
    RedactionService,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PickRejected => "PICK_REJECTED",
            Self::InvalidPickCount => "INVALID_PICK_COUNT",

            Self::AlreadyJoined => "ALREADY_JOINED",
            Self::NoSeatsAvailable => "NO_SEATS_AVAILABLE",

            Self::ValidationError => "VALIDATION_ERROR",

            Self::DraftNotFound => "DRAFT_NOT_FOUND",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::SeatNotFound => "SEAT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::PickRace => "PICK_RACE",
            Self::SeatTaken => "SEAT_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::NotImplemented => "NOT_IMPLEMENTED",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::TxnTimeout => "TXN_TIMEOUT",
            Self::RedactionService => "REDACTION_SERVICE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
