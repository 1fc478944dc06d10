use super::dto::GetGiftResponseDTO;
use crate::model::gift::Gift;

impl From<Gift> for GetGiftResponseDTO {
    fn from(value: Gift) -> Self {
        Self {
            remaining_quantity: value.remaining_quantity(),
            id: value.id,
            name: value.name,
            description: value.description,
            family_id: value.family_id,
            total_quantity: value.total_quantity,
            claimed_quantity: value.claimed_quantity,
            created_date: value.created_date,
            last_modified: value.last_modified,
        }
    }
}
