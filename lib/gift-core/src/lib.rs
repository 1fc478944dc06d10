use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use proto::cache_invalidator::CacheInvalidator;
use proto::session_provider::SessionProvider;
use repository::DataRepository;
use service::claim::ClaimService;
use service::email_template::EmailTemplateService;
use service::gift::GiftService;

pub mod config;
pub mod model;
pub mod proto;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct GiftCore {
    pub claim_service: ClaimService,
    pub gift_service: GiftService,
    pub email_template_service: EmailTemplateService,
    pub config: Arc<CoreConfig>,
}

impl GiftCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        session_provider: Arc<dyn SessionProvider>,
        cache_invalidator: Arc<dyn CacheInvalidator>,
    ) -> Result<GiftCore, ConfigValidationError> {
        config.validate()?;
        let config = Arc::new(config);

        Ok(GiftCore {
            claim_service: ClaimService::new(
                data_provider.get_gift_repository(),
                data_provider.get_claim_repository(),
                data_provider.get_person_repository(),
                data_provider.get_tx_manager(),
                session_provider.clone(),
                cache_invalidator,
                Arc::new(config.claim.clone()),
            ),
            gift_service: GiftService::new(data_provider.get_gift_repository()),
            email_template_service: EmailTemplateService::new(
                data_provider.get_email_template_repository(),
                session_provider,
            ),
            config,
        })
    }
}
