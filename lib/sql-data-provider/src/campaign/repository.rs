use autometrics::autometrics;
use gift_core::model::campaign::{Campaign, CampaignRelations};
use gift_core::repository::campaign_repository::CampaignRepository;
use gift_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::EntityTrait;
use shared_types::CampaignId;

use super::CampaignProvider;
use crate::entity::campaign;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl CampaignRepository for CampaignProvider {
    async fn get_campaign(
        &self,
        id: &CampaignId,
        _relations: &CampaignRelations,
    ) -> Result<Option<Campaign>, DataLayerError> {
        let campaign = campaign::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(campaign))
    }
}
