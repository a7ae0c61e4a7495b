//! SeaORM adapter for seats - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{seats, users};

pub mod dto;

pub use dto::SeatCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
) -> Result<Option<seats::Model>, sea_orm::DbErr> {
    seats::Entity::find_by_id(seat_id).one(conn).await
}

pub async fn find_by_draft_and_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
    user_id: i64,
) -> Result<Option<seats::Model>, sea_orm::DbErr> {
    seats::Entity::find()
        .filter(seats::Column::DraftId.eq(draft_id))
        .filter(seats::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn find_by_draft_and_position<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
    position: i32,
) -> Result<Option<seats::Model>, sea_orm::DbErr> {
    seats::Entity::find()
        .filter(seats::Column::DraftId.eq(draft_id))
        .filter(seats::Column::Position.eq(position))
        .one(conn)
        .await
}

/// Seats of a draft with their occupants, ordered by position.
pub async fn list_with_occupants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<(seats::Model, Option<users::Model>)>, sea_orm::DbErr> {
    seats::Entity::find()
        .find_also_related(users::Entity)
        .filter(seats::Column::DraftId.eq(draft_id))
        .order_by_asc(seats::Column::Position)
        .all(conn)
        .await
}

pub async fn list_unoccupied<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<seats::Model>, sea_orm::DbErr> {
    seats::Entity::find()
        .filter(seats::Column::DraftId.eq(draft_id))
        .filter(seats::Column::UserId.is_null())
        .order_by_asc(seats::Column::Position)
        .all(conn)
        .await
}

/// Assign a user to a seat only if it is still empty. Returns rows affected.
pub async fn claim_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = seats::Entity::update_many()
        .col_expr(seats::Column::UserId, Expr::value(user_id))
        .filter(seats::Column::Id.eq(seat_id))
        .filter(seats::Column::UserId.is_null())
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Raise a seat's round counter. Lower values are ignored. Returns rows affected.
pub async fn raise_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
    round: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = seats::Entity::update_many()
        .col_expr(seats::Column::Round, Expr::value(round))
        .filter(seats::Column::Id.eq(seat_id))
        .filter(seats::Column::Round.lt(round))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn create_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SeatCreate,
) -> Result<seats::Model, sea_orm::DbErr> {
    let seat_active = seats::ActiveModel {
        id: NotSet,
        draft_id: Set(dto.draft_id),
        position: Set(dto.position),
        user_id: Set(dto.user_id),
        round: Set(1),
    };

    seat_active.insert(conn).await
}
