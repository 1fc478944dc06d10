use sea_orm::entity::prelude::*;
use shared_types::{ClaimId, GiftId, PersonId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "claim")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ClaimId,
    pub gift_id: GiftId,
    pub claimant_id: PersonId,
    pub quantity: i32,
    pub created_date: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gift::Entity",
        from = "Column::GiftId",
        to = "super::gift::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Gift,
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::ClaimantId",
        to = "super::person::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Claimant,
}

impl Related<super::gift::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gift.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Claimant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
