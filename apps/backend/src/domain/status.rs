//! Per-viewer draft status.

use serde::Serialize;

use crate::domain::format::DraftFormat;

/// Who is asking. Anonymous viewers are sent to collaborators as id `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewer {
    Anonymous,
    User(i64),
}

impl Viewer {
    pub fn from_user_id(user_id: Option<i64>) -> Self {
        match user_id {
            Some(id) if id != 0 => Viewer::User(id),
            _ => Viewer::Anonymous,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        match self {
            Viewer::Anonymous => None,
            Viewer::User(id) => Some(*id),
        }
    }

    pub fn wire_id(&self) -> i64 {
        self.user_id().unwrap_or(0)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::User(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    Member,
    Spectator,
    Closed,
    Joinable,
}

impl DraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Member => "member",
            DraftStatus::Spectator => "spectator",
            DraftStatus::Closed => "closed",
            DraftStatus::Joinable => "joinable",
        }
    }
}

/// Seat aggregates for one draft as seen by one viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatTally {
    pub seats: u64,
    pub available_seats: u64,
    pub joined: bool,
    /// Lowest seat round; `None` for a draft without seats.
    pub min_round: Option<i32>,
}

impl SeatTally {
    /// A draft is over once every seat has moved past the last round.
    pub fn is_finished(&self, format: &DraftFormat) -> bool {
        self.seats > 0
            && self
                .min_round
                .is_some_and(|round| format.is_past_last_round(round))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftListEntry {
    pub id: i64,
    pub name: String,
    pub available_seats: u64,
    pub joined: bool,
    pub finished: bool,
    pub status: DraftStatus,
}

impl DraftListEntry {
    pub fn from_tally(
        id: i64,
        name: String,
        tally: SeatTally,
        viewer: Viewer,
        format: &DraftFormat,
    ) -> Self {
        let finished = tally.is_finished(format);
        let status = classify(tally.joined, finished, viewer, tally.available_seats);
        Self {
            id,
            name,
            available_seats: tally.available_seats,
            joined: tally.joined,
            finished,
            status,
        }
    }
}

/// Status precedence: membership, then a finished draft, then anonymity,
/// then a full table.
pub fn classify(joined: bool, finished: bool, viewer: Viewer, available_seats: u64) -> DraftStatus {
    if joined {
        DraftStatus::Member
    } else if finished {
        DraftStatus::Spectator
    } else if !viewer.is_authenticated() {
        DraftStatus::Closed
    } else if available_seats == 0 {
        DraftStatus::Spectator
    } else {
        DraftStatus::Joinable
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DraftList {
    pub drafts: Vec<DraftListEntry>,
}
