use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Round tag of a seat's picks pile.
pub const PICKS_PILE_ROUND: i32 = 0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "packs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Seat currently holding the pack.
    #[sea_orm(column_name = "seat_id")]
    pub seat_id: i64,
    #[sea_orm(column_name = "original_seat_id")]
    pub original_seat_id: i64,
    pub round: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seats::Entity",
        from = "Column::SeatId",
        to = "super::seats::Column::Id"
    )]
    Seat,
    #[sea_orm(
        belongs_to = "super::seats::Entity",
        from = "Column::OriginalSeatId",
        to = "super::seats::Column::Id"
    )]
    OriginalSeat,
    #[sea_orm(has_many = "super::cards::Entity")]
    Cards,
}

impl Related<super::seats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seat.def()
    }
}

impl Related<super::cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
