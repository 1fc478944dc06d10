use shared_types::EmailTemplateId;

use super::error::DataLayerError;
use crate::model::email_template::EmailTemplate;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait EmailTemplateRepository: Send + Sync {
    async fn create_email_template(
        &self,
        request: EmailTemplate,
    ) -> Result<EmailTemplateId, DataLayerError>;

    async fn get_email_template_by_name(
        &self,
        name: &str,
    ) -> Result<Option<EmailTemplate>, DataLayerError>;

    async fn get_email_template_list(&self) -> Result<Vec<EmailTemplate>, DataLayerError>;
}
