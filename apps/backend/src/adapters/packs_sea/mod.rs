//! SeaORM adapter for packs and their live card counts.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

use crate::entities::packs::PICKS_PILE_ROUND;
use crate::entities::{pack_counts, packs, seats};

pub mod dto;

pub use dto::PackCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pack_id: i64,
) -> Result<Option<packs::Model>, sea_orm::DbErr> {
    packs::Entity::find_by_id(pack_id).one(conn).await
}

pub async fn find_count_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pack_id: i64,
) -> Result<Option<pack_counts::Model>, sea_orm::DbErr> {
    pack_counts::Entity::find()
        .filter(pack_counts::Column::Id.eq(pack_id))
        .one(conn)
        .await
}

/// Every pack currently at a seat, picks pile included, by id.
pub async fn list_counts_at_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
) -> Result<Vec<pack_counts::Model>, sea_orm::DbErr> {
    pack_counts::Entity::find()
        .filter(pack_counts::Column::SeatId.eq(seat_id))
        .order_by_asc(pack_counts::Column::Id)
        .all(conn)
        .await
}

/// Every pack currently at any seat of a draft, picks piles included.
pub async fn list_counts_in_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<pack_counts::Model>, sea_orm::DbErr> {
    pack_counts::Entity::find()
        .join(
            sea_orm::JoinType::InnerJoin,
            pack_counts::Relation::Seat.def(),
        )
        .filter(seats::Column::DraftId.eq(draft_id))
        .order_by_asc(pack_counts::Column::Id)
        .all(conn)
        .await
}

pub async fn find_picks_pile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
) -> Result<Option<pack_counts::Model>, sea_orm::DbErr> {
    pack_counts::Entity::find()
        .filter(pack_counts::Column::SeatId.eq(seat_id))
        .filter(pack_counts::Column::Round.eq(PICKS_PILE_ROUND))
        .one(conn)
        .await
}

/// Hand a pack to another seat if it is still where the caller saw it.
/// Returns rows affected.
pub async fn move_pack<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pack_id: i64,
    from_seat_id: i64,
    to_seat_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = packs::Entity::update_many()
        .col_expr(packs::Column::SeatId, Expr::value(to_seat_id))
        .filter(packs::Column::Id.eq(pack_id))
        .filter(packs::Column::SeatId.eq(from_seat_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn create_pack<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PackCreate,
) -> Result<packs::Model, sea_orm::DbErr> {
    let pack_active = packs::ActiveModel {
        id: NotSet,
        seat_id: Set(dto.seat_id),
        original_seat_id: Set(dto.seat_id),
        round: Set(dto.round),
    };

    pack_active.insert(conn).await
}
