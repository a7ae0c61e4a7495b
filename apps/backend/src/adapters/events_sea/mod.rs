//! SeaORM adapter for the append-only event log.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::events;

pub mod dto;

pub use dto::EventCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: EventCreate,
) -> Result<events::Model, sea_orm::DbErr> {
    let event_active = events::ActiveModel {
        id: NotSet,
        draft_id: Set(dto.draft_id),
        position: Set(dto.position),
        round: Set(dto.round),
        announcement: Set(dto.announcement),
        card1: Set(dto.card1),
        card2: Set(dto.card2),
        modified: Set(dto.modified),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    event_active.insert(conn).await
}

pub async fn list_by_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<events::Model>, sea_orm::DbErr> {
    events::Entity::find()
        .filter(events::Column::DraftId.eq(draft_id))
        .order_by_asc(events::Column::Id)
        .all(conn)
        .await
}
