use one_dto_mapper::From;
use shared_types::EmailTemplateId;
use time::OffsetDateTime;

use crate::model::email_template::EmailTemplate;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SeedEmailTemplatesResponseDTO {
    /// Names of templates inserted by this run
    pub created: Vec<String>,
    /// Names of templates that already existed
    pub skipped: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(EmailTemplate)]
pub struct GetEmailTemplateResponseDTO {
    pub id: EmailTemplateId,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub is_default: bool,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}
