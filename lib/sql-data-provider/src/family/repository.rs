use autometrics::autometrics;
use gift_core::model::family::{Family, FamilyRelations};
use gift_core::repository::error::DataLayerError;
use gift_core::repository::family_repository::FamilyRepository;
use sea_orm::EntityTrait;
use shared_types::FamilyId;

use super::FamilyProvider;
use crate::entity::family;
use crate::mapper::to_data_layer_error;

impl FamilyProvider {
    async fn resolve_relations(
        &self,
        model: family::Model,
        relations: &FamilyRelations,
    ) -> Result<Family, DataLayerError> {
        let campaign_id = model.campaign_id;
        let mut result = Family::from(model);

        if let Some(campaign_relations) = &relations.campaign {
            result.campaign = Some(
                self.campaign_repository
                    .get_campaign(&campaign_id, campaign_relations)
                    .await?
                    .ok_or(DataLayerError::MissingRequiredRelation {
                        relation: "family-campaign",
                        id: campaign_id.to_string(),
                    })?,
            );
        }

        Ok(result)
    }
}

#[autometrics]
#[async_trait::async_trait]
impl FamilyRepository for FamilyProvider {
    async fn get_family(
        &self,
        id: &FamilyId,
        relations: &FamilyRelations,
    ) -> Result<Option<Family>, DataLayerError> {
        let Some(model) = family::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?
        else {
            return Ok(None);
        };

        Ok(Some(self.resolve_relations(model, relations).await?))
    }
}
