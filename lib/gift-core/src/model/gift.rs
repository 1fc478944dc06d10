use shared_types::{FamilyId, GiftId};
use time::OffsetDateTime;

use super::family::{Family, FamilyRelations};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Gift {
    pub id: GiftId,
    pub name: String,
    pub description: Option<String>,
    pub family_id: FamilyId,
    pub total_quantity: u32,
    pub claimed_quantity: u32,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,

    // Relations
    pub family: Option<Family>,
}

impl Gift {
    pub fn remaining_quantity(&self) -> u32 {
        self.total_quantity.saturating_sub(self.claimed_quantity)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct GiftRelations {
    pub family: Option<FamilyRelations>,
}
