use std::sync::Arc;

use gift_core::repository::campaign_repository::CampaignRepository;

use crate::transaction_context::TransactionManagerImpl;

mod mapper;
pub mod repository;

pub(crate) struct FamilyProvider {
    pub db: TransactionManagerImpl,
    pub campaign_repository: Arc<dyn CampaignRepository>,
}
