use shared_types::EmailTemplateId;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmailTemplate {
    pub id: EmailTemplateId,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub is_default: bool,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}
