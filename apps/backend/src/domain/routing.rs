//! Pack routing: which seat receives a passed pack.

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Direction a pack travels around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassDirection {
    /// Toward `position - 1`.
    Left,
    /// Toward `position + 1`.
    Right,
}

impl PassDirection {
    /// Even rounds pass left, odd rounds pass right.
    pub fn for_round(round: i32) -> Self {
        if round.rem_euclid(2) == 0 {
            PassDirection::Left
        } else {
            PassDirection::Right
        }
    }
}

/// Position of the seat that receives a pack passed from `position` during `round`.
///
/// Positions wrap around a table of `table_size` seats. A position outside
/// the table means the seat rows are corrupt.
pub fn next_position(position: i32, round: i32, table_size: u8) -> Result<i32, DomainError> {
    let size = i32::from(table_size);
    if size == 0 || !(0..size).contains(&position) {
        return Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("seat position {position} outside table of {table_size}"),
        ));
    }

    let step = match PassDirection::for_round(round) {
        PassDirection::Left => -1,
        PassDirection::Right => 1,
    };
    Ok((position + step).rem_euclid(size))
}
