//! Draft fixtures: users, seats, picks piles and sealed packs.

use backend_test_support::unique_helpers::{unique_contact_id, unique_str};
use draft_backend::adapters::packs_sea::PackCreate;
use draft_backend::adapters::seats_sea::{self, SeatCreate};
use draft_backend::adapters::users_sea::UserCreate;
use draft_backend::domain::format::DraftFormat;
use draft_backend::entities::cards;
use draft_backend::repos::{cards as cards_repo, drafts, packs, seats, users};
use draft_backend::AppError;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

#[derive(Debug, Clone)]
pub struct SeededPack {
    pub pack_id: i64,
    pub round: i32,
    pub card_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct SeededSeat {
    pub seat_id: i64,
    pub position: i32,
    pub user_id: Option<i64>,
    pub contact_id: Option<String>,
    pub picks_pile_id: i64,
    /// Sealed packs by round, first round first.
    pub packs: Vec<SeededPack>,
}

#[derive(Debug, Clone)]
pub struct SeededDraft {
    pub draft_id: i64,
    pub seats: Vec<SeededSeat>,
}

impl SeededDraft {
    pub fn seat(&self, position: i32) -> &SeededSeat {
        &self.seats[usize::try_from(position).unwrap()]
    }

    pub fn user(&self, position: i32) -> i64 {
        self.seat(position).user_id.unwrap()
    }
}

/// Seed a draft in `format` with the first `occupied` positions seated.
/// Every occupant gets a contact id.
pub async fn seed_draft(
    conn: &(impl ConnectionTrait + Send + Sync),
    format: &DraftFormat,
    occupied: usize,
) -> Result<SeededDraft, AppError> {
    let draft = drafts::create_draft(conn, &unique_str("draft")).await?;
    let mut seeded = Vec::new();

    for position in 0..i32::from(format.table_size) {
        let (user_id, contact_id) = if usize::try_from(position).unwrap() < occupied {
            let contact = unique_contact_id();
            let user = users::create_user(
                conn,
                UserCreate::new(format!("player {position}"))
                    .with_contact(contact.clone())
                    .with_picture(format!("https://img.test/{position}.png")),
            )
            .await?;
            (Some(user.id), Some(contact))
        } else {
            (None, None)
        };

        let mut dto = SeatCreate::new(draft.id, position);
        if let Some(uid) = user_id {
            dto = dto.occupied_by(uid);
        }
        let seat = seats::create_seat(conn, dto).await?;
        let picks_pile_id = packs::create_pack(conn, PackCreate::picks_pile(seat.id)).await?;

        let mut boosters = Vec::new();
        for round in 1..=format.round_count {
            let pack_id = packs::create_pack(conn, PackCreate::booster(seat.id, round)).await?;
            let mut card_ids = Vec::new();
            for n in 0..format.cards_per_pack {
                let data = format!(r#"{{"name":"card {position}-{round}-{n}"}}"#);
                card_ids.push(cards_repo::create_card(conn, pack_id, &data).await?);
            }
            boosters.push(SeededPack {
                pack_id,
                round,
                card_ids,
            });
        }

        seeded.push(SeededSeat {
            seat_id: seat.id,
            position,
            user_id,
            contact_id,
            picks_pile_id,
            packs: boosters,
        });
    }

    Ok(SeededDraft {
        draft_id: draft.id,
        seats: seeded,
    })
}

/// Seed a seatless-but-named user that can join drafts.
pub async fn seed_user(conn: &(impl ConnectionTrait + Send + Sync)) -> Result<i64, AppError> {
    let user = users::create_user(
        conn,
        UserCreate::new(unique_str("user")).with_contact(unique_contact_id()),
    )
    .await?;
    Ok(user.id)
}

/// Lowest card id currently in `pack_id`.
pub async fn first_card_in(
    conn: &(impl ConnectionTrait + Send + Sync),
    pack_id: i64,
) -> Result<Option<i64>, AppError> {
    let card = cards::Entity::find()
        .filter(cards::Column::PackId.eq(pack_id))
        .order_by_asc(cards::Column::Id)
        .one(conn)
        .await?;
    Ok(card.map(|c| c.id))
}

pub async fn cards_in(
    conn: &(impl ConnectionTrait + Send + Sync),
    pack_id: i64,
) -> Result<Vec<i64>, AppError> {
    let rows = cards::Entity::find()
        .filter(cards::Column::PackId.eq(pack_id))
        .order_by_asc(cards::Column::Id)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|c| c.id).collect())
}

/// Move every seat of a draft to `round` without picking.
pub async fn raise_all_rounds(
    conn: &(impl ConnectionTrait + Send + Sync),
    draft: &SeededDraft,
    round: i32,
) -> Result<(), AppError> {
    for seat in &draft.seats {
        seats_sea::raise_round(conn, seat.seat_id, round).await?;
    }
    Ok(())
}
