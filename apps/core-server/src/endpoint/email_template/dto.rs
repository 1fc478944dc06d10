use gift_core::service::email_template::dto::{
    GetEmailTemplateResponseDTO, SeedEmailTemplatesResponseDTO,
};
use one_dto_mapper::From;
use serde::Serialize;
use shared_types::EmailTemplateId;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(SeedEmailTemplatesResponseDTO)]
pub(crate) struct SeedEmailTemplatesResponseRestDTO {
    /// Names of the templates inserted by this run
    #[schema(example = json!(["CLAIM_CONFIRMATION"]))]
    pub created: Vec<String>,
    /// Names of the templates that already existed
    pub skipped: Vec<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetEmailTemplateResponseDTO)]
pub(crate) struct GetEmailTemplateResponseRestDTO {
    pub id: EmailTemplateId,
    #[schema(example = "CLAIM_CONFIRMATION")]
    pub name: String,
    pub subject: String,
    pub body: String,
    pub is_default: bool,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
}
