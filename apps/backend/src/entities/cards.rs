use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "pack_id")]
    pub pack_id: i64,
    #[sea_orm(column_name = "original_pack_id")]
    pub original_pack_id: i64,
    /// Opaque JSON payload.
    #[sea_orm(column_type = "Text")]
    pub data: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::packs::Entity",
        from = "Column::PackId",
        to = "super::packs::Column::Id"
    )]
    Pack,
    /// Pack the card was dealt into; fixed for the card's lifetime.
    #[sea_orm(
        belongs_to = "super::packs::Entity",
        from = "Column::OriginalPackId",
        to = "super::packs::Column::Id"
    )]
    OriginalPack,
}

impl Related<super::packs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
