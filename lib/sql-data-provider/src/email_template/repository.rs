use autometrics::autometrics;
use gift_core::model::email_template::EmailTemplate;
use gift_core::repository::email_template_repository::EmailTemplateRepository;
use gift_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::EmailTemplateId;

use super::EmailTemplateProvider;
use crate::entity::email_template;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl EmailTemplateRepository for EmailTemplateProvider {
    async fn create_email_template(
        &self,
        request: EmailTemplate,
    ) -> Result<EmailTemplateId, DataLayerError> {
        let template = email_template::Entity::insert(email_template::ActiveModel::from(
            email_template::Model::from(request),
        ))
        .exec(&self.db.tx())
        .await
        .map_err(to_data_layer_error)?;

        Ok(template.last_insert_id)
    }

    async fn get_email_template_by_name(
        &self,
        name: &str,
    ) -> Result<Option<EmailTemplate>, DataLayerError> {
        let template = email_template::Entity::find()
            .filter(email_template::Column::Name.eq(name))
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(template))
    }

    async fn get_email_template_list(&self) -> Result<Vec<EmailTemplate>, DataLayerError> {
        let templates = email_template::Entity::find()
            .order_by_asc(email_template::Column::Name)
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(templates))
    }
}
