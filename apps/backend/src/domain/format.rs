//! Table and pack dimensions for a draft.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Fixed dimensions of a draft: seats at the table, cards in a pack and the
/// number of booster rounds.
///
/// `cards_per_pack` drives round advancement, so formats whose packs are not
/// all the same size are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFormat {
    pub table_size: u8,
    pub cards_per_pack: u32,
    pub round_count: i32,
    /// Seat round at which a member may see the unredacted replay.
    pub deep_replay_round: i32,
}

impl DraftFormat {
    /// Eight seats, three rounds of fifteen-card packs.
    pub const STANDARD: DraftFormat = DraftFormat {
        table_size: 8,
        cards_per_pack: 15,
        round_count: 3,
        deep_replay_round: 4,
    };

    pub fn new(table_size: u8, cards_per_pack: u32, round_count: i32) -> Result<Self, DomainError> {
        let format = DraftFormat {
            table_size,
            cards_per_pack,
            round_count,
            deep_replay_round: round_count + 1,
        };
        format.validate()?;
        Ok(format)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.table_size == 0 {
            return Err(DomainError::validation(
                ValidationKind::Other("TABLE_SIZE".into()),
                "table size must be at least 1",
            ));
        }
        if self.cards_per_pack == 0 {
            return Err(DomainError::validation(
                ValidationKind::Other("CARDS_PER_PACK".into()),
                "cards per pack must be at least 1",
            ));
        }
        if self.round_count < 1 {
            return Err(DomainError::validation(
                ValidationKind::Other("ROUND_COUNT".into()),
                "round count must be at least 1",
            ));
        }
        Ok(())
    }

    /// Seat round implied by the size of its picks pile.
    pub fn round_for_picks(&self, picks_pile_size: u64) -> i32 {
        let completed = picks_pile_size / u64::from(self.cards_per_pack);
        i32::try_from(completed).unwrap_or(i32::MAX - 1) + 1
    }

    /// Round a seat moves to once its queue for `current` is empty.
    /// Never lower than `current`.
    pub fn advance_round(&self, current: i32, picks_pile_size: u64) -> i32 {
        current.max(self.round_for_picks(picks_pile_size))
    }

    /// Whether a seat round counter lies past the last booster round.
    pub fn is_past_last_round(&self, seat_round: i32) -> bool {
        seat_round > self.round_count
    }
}

impl Default for DraftFormat {
    fn default() -> Self {
        Self::STANDARD
    }
}
