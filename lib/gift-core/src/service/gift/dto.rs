use shared_types::{FamilyId, GiftId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetGiftResponseDTO {
    pub id: GiftId,
    pub name: String,
    pub description: Option<String>,
    pub family_id: FamilyId,
    pub total_quantity: u32,
    pub claimed_quantity: u32,
    pub remaining_quantity: u32,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}
