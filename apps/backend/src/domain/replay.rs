//! Replay layout, event records and the replay visibility policy.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::format::DraftFormat;
use crate::domain::status::{DraftListEntry, Viewer};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Full, unredacted state of one draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReplayState {
    pub draft_id: i64,
    pub draft_name: String,
    pub seats: Vec<SeatReplay>,
    pub events: Vec<DraftEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeatReplay {
    /// `packs[r]` holds the cards first dealt in round `r + 1`, by card id.
    pub packs: Vec<Vec<Value>>,
    pub player_name: String,
    pub player_id: i64,
    pub player_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftEvent {
    pub position: i32,
    pub announcements: Vec<String>,
    pub cards: Vec<i64>,
    pub librarian: bool,
    /// Event id; orders events across the whole draft.
    pub draft_modified: i64,
    /// Picks-pile size at pick time; orders events within a seat.
    pub player_modified: i64,
    pub round: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

pub const PICK_EVENT_TYPE: &str = "Pick";

/// Newline-joined announcement column value.
pub fn join_announcements(announcements: &[String]) -> String {
    announcements.join("\n")
}

pub fn split_announcements(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        Vec::new()
    } else {
        stored.split('\n').map(str::to_string).collect()
    }
}

/// Occupant details for one seat position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPlayer {
    pub position: i32,
    pub user_id: Option<i64>,
    pub display_name: Option<String>,
    pub picture: Option<String>,
}

/// One card in its original placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCard {
    pub position: i32,
    pub pack_round: i32,
    pub card_id: i64,
    pub data: String,
}

/// Parse a card's stored payload and tag it with its id.
///
/// Payloads that are not JSON objects are replaced with `{"id": id}`.
pub fn card_object(card_id: i64, data: &str) -> Value {
    let mut object = match serde_json::from_str::<Value>(data) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            warn!(card_id, "Card data is not a JSON object; replacing with bare id");
            Map::new()
        }
        Err(e) => {
            warn!(card_id, error = %e, "Card data is not valid JSON; replacing with bare id");
            Map::new()
        }
    };
    object.insert("id".to_string(), Value::from(card_id));
    Value::Object(object)
}

/// Lay out every seat's original packs and occupant.
///
/// Cards are bucketed by original seat position and original pack round and
/// sorted by id within each bucket.
pub fn build_layout(
    format: &DraftFormat,
    players: &[SeatPlayer],
    cards: &[PlacedCard],
) -> Result<Vec<SeatReplay>, DomainError> {
    let table = usize::from(format.table_size);
    let rounds = usize::try_from(format.round_count).unwrap_or(0);

    let mut seats: Vec<SeatReplay> = (0..table)
        .map(|_| SeatReplay {
            packs: vec![Vec::new(); rounds],
            ..SeatReplay::default()
        })
        .collect();

    for player in players {
        let seat = slot(&mut seats, player.position)?;
        seat.player_id = player.user_id.unwrap_or(0);
        seat.player_name = player.display_name.clone().unwrap_or_default();
        seat.player_image = player.picture.clone().unwrap_or_default();
    }

    let mut ordered: Vec<&PlacedCard> = cards.iter().collect();
    ordered.sort_by_key(|c| c.card_id);
    for card in ordered {
        let seat = slot(&mut seats, card.position)?;
        let round_index = usize::try_from(card.pack_round - 1)
            .ok()
            .filter(|r| *r < rounds)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("card {} dealt in unknown round {}", card.card_id, card.pack_round),
                )
            })?;
        seat.packs[round_index].push(card_object(card.card_id, &card.data));
    }

    Ok(seats)
}

fn slot(seats: &mut [SeatReplay], position: i32) -> Result<&mut SeatReplay, DomainError> {
    usize::try_from(position)
        .ok()
        .and_then(|p| seats.get_mut(p))
        .ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("seat position {position} outside table"),
            )
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayAccess {
    Full,
    Redacted,
}

/// Decide how much of the replay a viewer may see.
///
/// `own_round` is the viewer's seat round when they are a member.
pub fn replay_access(
    entry: &DraftListEntry,
    viewer: Viewer,
    own_round: Option<i32>,
    format: &DraftFormat,
) -> ReplayAccess {
    if entry.finished {
        return ReplayAccess::Full;
    }
    if entry.joined {
        return match own_round {
            Some(round) if round >= format.deep_replay_round => ReplayAccess::Full,
            _ => ReplayAccess::Redacted,
        };
    }
    if viewer.is_authenticated() && entry.available_seats == 0 {
        return ReplayAccess::Full;
    }
    ReplayAccess::Redacted
}

/// Document sent to the perspective renderer.
#[derive(Debug, Clone, Serialize)]
pub struct PerspectiveRequest<'a> {
    pub user: i64,
    pub draft: &'a DraftReplayState,
}
