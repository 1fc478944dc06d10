use shared_types::CampaignId;

use super::error::DataLayerError;
use crate::model::campaign::{Campaign, CampaignRelations};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CampaignRepository: Send + Sync {
    async fn get_campaign(
        &self,
        id: &CampaignId,
        relations: &CampaignRelations,
    ) -> Result<Option<Campaign>, DataLayerError>;
}
