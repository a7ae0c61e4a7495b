//! Card repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::cards_sea as cards_adapter;
use crate::domain::replay::PlacedCard;
use crate::entities::cards;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Card domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i64,
    pub pack_id: i64,
    pub original_pack_id: i64,
    pub data: String,
}

impl From<cards::Model> for Card {
    fn from(model: cards::Model) -> Self {
        Self {
            id: model.id,
            pack_id: model.pack_id,
            original_pack_id: model.original_pack_id,
            data: model.data,
        }
    }
}

pub async fn require_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Card, DomainError> {
    cards_adapter::find_by_id(conn, card_id)
        .await?
        .map(Card::from)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Card, format!("Card {card_id} not found")))
}

/// Move a card into a picks pile. Fails with `PickRace` if the card already
/// left `from_pack_id`.
pub async fn move_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
    from_pack_id: i64,
    to_pack_id: i64,
) -> Result<(), DomainError> {
    match cards_adapter::move_card(conn, card_id, from_pack_id, to_pack_id).await? {
        0 => Err(DomainError::conflict(
            ConflictKind::PickRace,
            format!("Card {card_id} was picked concurrently"),
        )),
        _ => Ok(()),
    }
}

pub async fn create_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pack_id: i64,
    data: &str,
) -> Result<i64, DomainError> {
    let card = cards_adapter::create_card(conn, cards_adapter::CardCreate::new(pack_id, data)).await?;
    Ok(card.id)
}

pub async fn list_placed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<PlacedCard>, DomainError> {
    let rows = cards_adapter::list_placed_in_draft(conn, draft_id).await?;
    Ok(rows
        .into_iter()
        .map(|row| PlacedCard {
            position: row.position,
            pack_round: row.pack_round,
            card_id: row.card_id,
            data: row.data,
        })
        .collect())
}
