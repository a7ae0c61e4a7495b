//! SeaORM adapter for cards - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::entities::{cards, packs, seats};

pub mod dto;

pub use dto::{CardCreate, PlacedCardRow};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Option<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find_by_id(card_id).one(conn).await
}

/// Move a card between packs only if it still sits in `from_pack_id`.
/// Returns rows affected.
pub async fn move_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
    from_pack_id: i64,
    to_pack_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = cards::Entity::update_many()
        .col_expr(cards::Column::PackId, Expr::value(to_pack_id))
        .filter(cards::Column::Id.eq(card_id))
        .filter(cards::Column::PackId.eq(from_pack_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn create_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CardCreate,
) -> Result<cards::Model, sea_orm::DbErr> {
    let card_active = cards::ActiveModel {
        id: NotSet,
        pack_id: Set(dto.pack_id),
        original_pack_id: Set(dto.pack_id),
        data: Set(dto.data),
    };

    card_active.insert(conn).await
}

/// Every card of a draft in its original placement, by card id.
pub async fn list_placed_in_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<PlacedCardRow>, sea_orm::DbErr> {
    cards::Entity::find()
        .select_only()
        .column_as(cards::Column::Id, "card_id")
        .column_as(cards::Column::Data, "data")
        .column_as(packs::Column::Round, "pack_round")
        .column_as(seats::Column::Position, "position")
        .join(JoinType::InnerJoin, cards::Relation::OriginalPack.def())
        .join(JoinType::InnerJoin, packs::Relation::OriginalSeat.def())
        .filter(seats::Column::DraftId.eq(draft_id))
        .order_by_asc(cards::Column::Id)
        .into_model::<PlacedCardRow>()
        .all(conn)
        .await
}
