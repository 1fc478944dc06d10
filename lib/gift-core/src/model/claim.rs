use shared_types::{ClaimId, GiftId, PersonId};
use time::OffsetDateTime;

use super::gift::{Gift, GiftRelations};
use super::person::{Person, PersonRelations};

/// Reservation of gift units. Never updated after creation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    pub id: ClaimId,
    pub gift_id: GiftId,
    pub claimant_id: PersonId,
    pub quantity: u32,
    pub created_date: OffsetDateTime,

    // Relations
    pub gift: Option<Gift>,
    pub claimant: Option<Person>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct ClaimRelations {
    pub gift: Option<GiftRelations>,
    pub claimant: Option<PersonRelations>,
}
