use gift_core::service::gift::dto::GetGiftResponseDTO;
use one_dto_mapper::From;
use serde::Serialize;
use shared_types::{FamilyId, GiftId};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetGiftResponseDTO)]
pub(crate) struct GetGiftResponseRestDTO {
    pub id: GiftId,
    #[schema(example = "Winter coat")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub family_id: FamilyId,
    pub total_quantity: u32,
    pub claimed_quantity: u32,
    /// Units that can still be claimed
    pub remaining_quantity: u32,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
}
