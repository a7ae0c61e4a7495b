//! DTOs for cards_sea adapter.

use sea_orm::FromQueryResult;

/// DTO for dealing a card into a pack.
#[derive(Debug, Clone)]
pub struct CardCreate {
    pub pack_id: i64,
    pub data: String,
}

impl CardCreate {
    pub fn new(pack_id: i64, data: impl Into<String>) -> Self {
        Self {
            pack_id,
            data: data.into(),
        }
    }
}

/// A card joined with its original pack round and original seat position.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PlacedCardRow {
    pub card_id: i64,
    pub data: String,
    pub pack_round: i32,
    pub position: i32,
}
