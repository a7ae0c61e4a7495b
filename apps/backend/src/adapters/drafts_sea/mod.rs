//! SeaORM adapter for drafts - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::{drafts, seats};

pub mod dto;

pub use dto::{DraftCreate, SeatTallyRow};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Option<drafts::Model>, sea_orm::DbErr> {
    drafts::Entity::find_by_id(draft_id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<drafts::Model>, sea_orm::DbErr> {
    drafts::Entity::find()
        .order_by_asc(drafts::Column::Id)
        .all(conn)
        .await
}

pub async fn create_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DraftCreate,
) -> Result<drafts::Model, sea_orm::DbErr> {
    let draft_active = drafts::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
    };

    draft_active.insert(conn).await
}

/// Seat aggregates for every draft that has seats, optionally limited to one
/// draft. `user_id` 0 never matches a seat, which yields `joined_count = 0`.
pub async fn seat_tallies<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    only_draft: Option<i64>,
) -> Result<Vec<SeatTallyRow>, sea_orm::DbErr> {
    let mut query = seats::Entity::find()
        .select_only()
        .column(seats::Column::DraftId)
        .column_as(seats::Column::Id.count(), "seat_count")
        .column_as(
            Expr::cust("SUM(CASE WHEN user_id IS NULL THEN 1 ELSE 0 END)"),
            "open_seats",
        )
        .column_as(
            Expr::cust_with_values(
                "SUM(CASE WHEN user_id = ? THEN 1 ELSE 0 END)",
                [user_id],
            ),
            "joined_count",
        )
        .column_as(seats::Column::Round.min(), "min_round")
        .group_by(seats::Column::DraftId)
        .order_by_asc(seats::Column::DraftId);

    if let Some(draft_id) = only_draft {
        query = query.filter(seats::Column::DraftId.eq(draft_id));
    }

    query.into_model::<SeatTallyRow>().all(conn).await
}
