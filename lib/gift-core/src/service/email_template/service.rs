use one_dto_mapper::convert_inner;
use time::OffsetDateTime;

use super::EmailTemplateService;
use super::defaults::DEFAULT_TEMPLATES;
use super::dto::{GetEmailTemplateResponseDTO, SeedEmailTemplatesResponseDTO};
use super::mapper::template_from_default;
use crate::repository::error::DataLayerError;
use crate::service::error::{AuthorizationError, ServiceError};

impl EmailTemplateService {
    /// Inserts the default email templates that do not exist yet.
    ///
    /// Idempotent by template name, can be run on every deployment.
    pub async fn seed_default_templates(
        &self,
    ) -> Result<SeedEmailTemplatesResponseDTO, ServiceError> {
        let session = self
            .session_provider
            .session()
            .ok_or(AuthorizationError::MissingSession)?;
        if !session.admin {
            return Err(AuthorizationError::AdminRequired.into());
        }

        let now = OffsetDateTime::now_utc();
        let mut result = SeedEmailTemplatesResponseDTO::default();

        for template in &DEFAULT_TEMPLATES {
            let name = template.name.to_string();

            if self
                .email_template_repository
                .get_email_template_by_name(template.name)
                .await?
                .is_some()
            {
                result.skipped.push(name);
                continue;
            }

            match self
                .email_template_repository
                .create_email_template(template_from_default(template, now))
                .await
            {
                Ok(_) => result.created.push(name),
                // inserted by a concurrent seeding run
                Err(DataLayerError::AlreadyExists) => result.skipped.push(name),
                Err(error) => return Err(error.into()),
            }
        }

        tracing::info!(
            "Seeded email templates: {} created, {} skipped",
            result.created.len(),
            result.skipped.len()
        );

        Ok(result)
    }

    /// Returns all email templates ordered by name
    pub async fn get_email_template_list(
        &self,
    ) -> Result<Vec<GetEmailTemplateResponseDTO>, ServiceError> {
        let templates = self
            .email_template_repository
            .get_email_template_list()
            .await?;

        Ok(convert_inner(templates))
    }
}
