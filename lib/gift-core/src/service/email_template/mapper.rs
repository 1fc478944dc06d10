use time::OffsetDateTime;

use super::defaults::DefaultTemplate;
use crate::model::email_template::EmailTemplate;

pub(super) fn template_from_default(
    template: &DefaultTemplate,
    now: OffsetDateTime,
) -> EmailTemplate {
    EmailTemplate {
        id: uuid::Uuid::new_v4().into(),
        name: template.name.to_string(),
        subject: template.subject.to_string(),
        body: template.body.to_string(),
        is_default: true,
        created_date: now,
        last_modified: now,
    }
}
