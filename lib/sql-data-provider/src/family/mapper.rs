use gift_core::model::family::Family;

use crate::entity::family;

impl From<family::Model> for Family {
    fn from(value: family::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            campaign_id: value.campaign_id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            campaign: None,
        }
    }
}
