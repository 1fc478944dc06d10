use std::sync::Arc;

use crate::config::core_config::ClaimConfig;
use crate::proto::cache_invalidator::CacheInvalidator;
use crate::proto::session_provider::SessionProvider;
use crate::proto::transaction_manager::TransactionManager;
use crate::repository::claim_repository::ClaimRepository;
use crate::repository::gift_repository::GiftRepository;
use crate::repository::person_repository::PersonRepository;

pub mod dto;
mod mapper;
pub mod service;
mod validator;

#[derive(Clone)]
pub struct ClaimService {
    gift_repository: Arc<dyn GiftRepository>,
    claim_repository: Arc<dyn ClaimRepository>,
    person_repository: Arc<dyn PersonRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    session_provider: Arc<dyn SessionProvider>,
    cache_invalidator: Arc<dyn CacheInvalidator>,
    config: Arc<ClaimConfig>,
}

impl ClaimService {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        gift_repository: Arc<dyn GiftRepository>,
        claim_repository: Arc<dyn ClaimRepository>,
        person_repository: Arc<dyn PersonRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        session_provider: Arc<dyn SessionProvider>,
        cache_invalidator: Arc<dyn CacheInvalidator>,
        config: Arc<ClaimConfig>,
    ) -> Self {
        Self {
            gift_repository,
            claim_repository,
            person_repository,
            tx_manager,
            session_provider,
            cache_invalidator,
            config,
        }
    }
}
