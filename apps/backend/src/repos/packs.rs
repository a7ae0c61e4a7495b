//! Pack repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::packs_sea as packs_adapter;
use crate::domain::seat_state::QueuedPack;
use crate::entities::pack_counts;
use crate::entities::packs::PICKS_PILE_ROUND;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

/// Pack domain model with its live card count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pack {
    pub id: i64,
    pub seat_id: i64,
    pub original_seat_id: i64,
    pub round: i32,
    pub count: i64,
}

impl Pack {
    pub fn is_picks_pile(&self) -> bool {
        self.round == PICKS_PILE_ROUND
    }

    pub fn queued(&self) -> QueuedPack {
        QueuedPack {
            pack_id: self.id,
            round: self.round,
            count: self.count,
        }
    }
}

impl From<pack_counts::Model> for Pack {
    fn from(model: pack_counts::Model) -> Self {
        Self {
            id: model.id,
            seat_id: model.seat_id,
            original_seat_id: model.original_seat_id,
            round: model.round,
            count: model.count,
        }
    }
}

pub async fn require_pack<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pack_id: i64,
) -> Result<Pack, DomainError> {
    packs_adapter::find_count_by_id(conn, pack_id)
        .await?
        .map(Pack::from)
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Other("Pack".into()),
                format!("Pack {pack_id} not found"),
            )
        })
}

pub async fn list_at_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
) -> Result<Vec<Pack>, DomainError> {
    let packs = packs_adapter::list_counts_at_seat(conn, seat_id).await?;
    Ok(packs.into_iter().map(Pack::from).collect())
}

pub async fn list_in_draft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<Pack>, DomainError> {
    let packs = packs_adapter::list_counts_in_draft(conn, draft_id).await?;
    Ok(packs.into_iter().map(Pack::from).collect())
}

/// A seat's picks pile. Every seat has exactly one; its absence is corruption.
pub async fn require_picks_pile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
) -> Result<Pack, DomainError> {
    packs_adapter::find_picks_pile(conn, seat_id)
        .await?
        .map(Pack::from)
        .ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Seat {seat_id} has no picks pile"),
            )
        })
}

/// Pass a pack on. Fails with a conflict if it already left `from_seat_id`.
pub async fn move_pack<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pack_id: i64,
    from_seat_id: i64,
    to_seat_id: i64,
) -> Result<(), DomainError> {
    match packs_adapter::move_pack(conn, pack_id, from_seat_id, to_seat_id).await? {
        0 => Err(DomainError::conflict(
            ConflictKind::PickRace,
            format!("Pack {pack_id} already left seat {from_seat_id}"),
        )),
        _ => Ok(()),
    }
}

pub async fn create_pack<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: packs_adapter::PackCreate,
) -> Result<i64, DomainError> {
    let pack = packs_adapter::create_pack(conn, dto).await?;
    Ok(pack.id)
}
