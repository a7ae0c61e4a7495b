//! Seat repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::seats_sea as seats_adapter;
use crate::entities::{seats, users};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Seat domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: i64,
    pub draft_id: i64,
    pub position: i32,
    pub user_id: Option<i64>,
    pub round: i32,
}

impl From<seats::Model> for Seat {
    fn from(model: seats::Model) -> Self {
        Self {
            id: model.id,
            draft_id: model.draft_id,
            position: model.position,
            user_id: model.user_id,
            round: model.round,
        }
    }
}

/// The person sitting at a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    pub user_id: i64,
    pub display_name: String,
    pub contact_id: Option<String>,
    pub picture: Option<String>,
}

impl From<users::Model> for Occupant {
    fn from(model: users::Model) -> Self {
        Self {
            user_id: model.id,
            display_name: model.display_name,
            contact_id: model.contact_id,
            picture: model.picture,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatWithOccupant {
    pub seat: Seat,
    pub occupant: Option<Occupant>,
}

pub async fn find_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
) -> Result<Option<Seat>, DomainError> {
    let seat = seats_adapter::find_by_id(conn, seat_id).await?;
    Ok(seat.map(Seat::from))
}

pub async fn require_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
) -> Result<Seat, DomainError> {
    find_seat(conn, seat_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, format!("Seat {seat_id} not found")))
}

pub async fn find_seat_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
    user_id: i64,
) -> Result<Option<Seat>, DomainError> {
    let seat = seats_adapter::find_by_draft_and_user(conn, draft_id, user_id).await?;
    Ok(seat.map(Seat::from))
}

pub async fn require_seat_at<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
    position: i32,
) -> Result<Seat, DomainError> {
    seats_adapter::find_by_draft_and_position(conn, draft_id, position)
        .await?
        .map(Seat::from)
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Seat,
                format!("No seat at position {position} in draft {draft_id}"),
            )
        })
}

pub async fn list_with_occupants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<SeatWithOccupant>, DomainError> {
    let rows = seats_adapter::list_with_occupants(conn, draft_id).await?;
    Ok(rows
        .into_iter()
        .map(|(seat, user)| SeatWithOccupant {
            seat: Seat::from(seat),
            occupant: user.map(Occupant::from),
        })
        .collect())
}

pub async fn list_unoccupied<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft_id: i64,
) -> Result<Vec<Seat>, DomainError> {
    let seats = seats_adapter::list_unoccupied(conn, draft_id).await?;
    Ok(seats.into_iter().map(Seat::from).collect())
}

/// Seat a user. Fails with `SeatTaken` if someone claimed it first.
pub async fn claim_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
    user_id: i64,
) -> Result<(), DomainError> {
    match seats_adapter::claim_seat(conn, seat_id, user_id).await? {
        0 => Err(DomainError::conflict(
            ConflictKind::SeatTaken,
            format!("Seat {seat_id} was taken by another player"),
        )),
        _ => Ok(()),
    }
}

/// Raise a seat's round counter; returns whether it changed.
pub async fn raise_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seat_id: i64,
    round: i32,
) -> Result<bool, DomainError> {
    Ok(seats_adapter::raise_round(conn, seat_id, round).await? > 0)
}

pub async fn create_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: seats_adapter::SeatCreate,
) -> Result<Seat, DomainError> {
    let seat = seats_adapter::create_seat(conn, dto).await?;
    Ok(Seat::from(seat))
}
