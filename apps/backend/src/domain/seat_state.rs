//! Explicit per-seat progress state.
//!
//! Seat rounds, pack rounds and pack card counts together encode where each
//! seat stands. Deriving a [`SeatState`] once keeps the blocking-seat
//! search and next-pack selection free of scattered counter comparisons.

use crate::domain::format::DraftFormat;

/// A pack currently resident at a seat, with its live card count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedPack {
    pub pack_id: i64,
    pub round: i32,
    pub count: i64,
}

/// Everything about one seat needed to decide its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSnapshot {
    pub seat_id: i64,
    pub position: i32,
    pub user_id: Option<i64>,
    pub contact_id: Option<String>,
    pub round: i32,
    pub picks_pile_size: i64,
    /// Booster packs at the seat (picks pile excluded).
    pub queued: Vec<QueuedPack>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatState {
    /// Nobody sits here; never dealt real packs.
    Unoccupied,
    /// A non-empty pack for the seat's own round is waiting to be picked.
    HasPickablePack { pack_id: i64 },
    /// Every card of the seat's round is in its picks pile but the round
    /// counter has not moved on yet.
    RoundComplete,
    /// Nothing to pick until a neighbour passes a pack.
    AwaitingPack,
    /// The seat is past the last round.
    DraftFinished,
}

impl SeatSnapshot {
    /// The pack this seat must pick from next: among non-empty packs of the
    /// seat's round, the fullest one, lowest id first on ties.
    pub fn next_pack(&self) -> Option<QueuedPack> {
        self.queued
            .iter()
            .filter(|p| p.round == self.round && p.count > 0)
            .min_by_key(|p| (std::cmp::Reverse(p.count), p.pack_id))
            .copied()
    }

    /// Non-empty packs still queued for `round`.
    pub fn packs_left_in_round(&self, round: i32) -> usize {
        self.queued
            .iter()
            .filter(|p| p.round == round && p.count > 0)
            .count()
    }

    pub fn state(&self, format: &DraftFormat) -> SeatState {
        if self.user_id.is_none() {
            return SeatState::Unoccupied;
        }
        if format.is_past_last_round(self.round) {
            return SeatState::DraftFinished;
        }
        if let Some(pack) = self.next_pack() {
            return SeatState::HasPickablePack {
                pack_id: pack.pack_id,
            };
        }
        let picked = u64::try_from(self.picks_pile_size).unwrap_or(0);
        if format.round_for_picks(picked) > self.round {
            return SeatState::RoundComplete;
        }
        SeatState::AwaitingPack
    }
}

/// How many seats share the highest round counter in the draft.
pub fn deepest_round_population(seats: &[SeatSnapshot]) -> usize {
    match seats.iter().map(|s| s.round).max() {
        Some(deepest) => seats.iter().filter(|s| s.round == deepest).count(),
        None => 0,
    }
}

/// The single seat holding a pickable pack, if exactly one does.
pub fn sole_blocker<'a>(seats: &'a [SeatSnapshot], format: &DraftFormat) -> Option<&'a SeatSnapshot> {
    let mut holders = seats
        .iter()
        .filter(|s| matches!(s.state(format), SeatState::HasPickablePack { .. }));
    let first = holders.next()?;
    match holders.next() {
        Some(_) => None,
        None => Some(first),
    }
}
