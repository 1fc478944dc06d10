use one_dto_mapper::From;
use shared_types::{ClaimId, GiftId, PersonId};
use time::OffsetDateTime;

use crate::model::claim::Claim;

#[derive(Clone, Debug)]
pub struct ClaimGiftRequestDTO {
    pub claimant_id: PersonId,
    /// Must be within `1..=maxQuantityPerClaim`
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimGiftResponseDTO {
    pub id: ClaimId,
    pub claimed_quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Claim)]
pub struct GetClaimResponseDTO {
    pub id: ClaimId,
    pub gift_id: GiftId,
    pub claimant_id: PersonId,
    pub quantity: u32,
    pub created_date: OffsetDateTime,
}
