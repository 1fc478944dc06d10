use gift_core::service::claim::dto::{
    ClaimGiftRequestDTO, ClaimGiftResponseDTO, GetClaimResponseDTO,
};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{ClaimId, GiftId, PersonId};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(ClaimGiftRequestDTO)]
pub(crate) struct ClaimGiftRequestRestDTO {
    /// Person claiming the gift
    pub claimant_id: PersonId,
    /// Number of units to reserve, at least 1
    #[schema(example = 1)]
    pub quantity: i64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ClaimGiftResponseDTO)]
pub(crate) struct ClaimGiftResponseRestDTO {
    pub id: ClaimId,
    /// Claimed quantity of the gift after this claim
    pub claimed_quantity: u32,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetClaimResponseDTO)]
pub(crate) struct GetClaimResponseRestDTO {
    pub id: ClaimId,
    pub gift_id: GiftId,
    pub claimant_id: PersonId,
    pub quantity: u32,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
}
