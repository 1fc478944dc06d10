use gift_core::model::claim::Claim;
use gift_core::repository::error::DataLayerError;
use sea_orm::Set;

use crate::entity::claim;
use crate::mapper::{quantity_from_db, quantity_to_db};

impl TryFrom<claim::Model> for Claim {
    type Error = DataLayerError;

    fn try_from(value: claim::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            gift_id: value.gift_id,
            claimant_id: value.claimant_id,
            quantity: quantity_from_db(value.quantity)?,
            created_date: value.created_date,
            gift: None,
            claimant: None,
        })
    }
}

impl TryFrom<Claim> for claim::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: Claim) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Set(value.id),
            gift_id: Set(value.gift_id),
            claimant_id: Set(value.claimant_id),
            quantity: Set(quantity_to_db(value.quantity)?),
            created_date: Set(value.created_date),
        })
    }
}
