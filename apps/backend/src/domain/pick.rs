use crate::errors::domain::{DomainError, ValidationKind};

/// A pick as submitted by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickRequest {
    Single {
        card_id: i64,
        announcements: Vec<String>,
    },
    /// Two cards taken at once. Accepted on the wire, never applied.
    CoPick {
        first: i64,
        second: i64,
        announcements: Vec<String>,
    },
}

impl PickRequest {
    pub fn from_card_ids(card_ids: &[i64]) -> Result<Self, DomainError> {
        Self::with_announcements(card_ids, Vec::new())
    }

    pub fn with_announcements(
        card_ids: &[i64],
        announcements: Vec<String>,
    ) -> Result<Self, DomainError> {
        match *card_ids {
            [card_id] => Ok(PickRequest::Single {
                card_id,
                announcements,
            }),
            [first, second] => Ok(PickRequest::CoPick {
                first,
                second,
                announcements,
            }),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidPickCount,
                format!("expected one or two card ids, got {}", card_ids.len()),
            )),
        }
    }

    pub fn announcements(&self) -> &[String] {
        match self {
            PickRequest::Single { announcements, .. } => announcements,
            PickRequest::CoPick { announcements, .. } => announcements,
        }
    }
}
