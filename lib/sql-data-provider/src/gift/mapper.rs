use gift_core::model::gift::Gift;
use gift_core::repository::error::DataLayerError;

use crate::entity::gift;
use crate::mapper::quantity_from_db;

impl TryFrom<gift::Model> for Gift {
    type Error = DataLayerError;

    fn try_from(value: gift::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            name: value.name,
            description: value.description,
            family_id: value.family_id,
            total_quantity: quantity_from_db(value.total_quantity)?,
            claimed_quantity: quantity_from_db(value.claimed_quantity)?,
            created_date: value.created_date,
            last_modified: value.last_modified,
            family: None,
        })
    }
}
