use std::sync::Arc;

use campaign_repository::CampaignRepository;
use claim_repository::ClaimRepository;
use email_template_repository::EmailTemplateRepository;
use family_repository::FamilyRepository;
use gift_repository::GiftRepository;
use person_repository::PersonRepository;

use crate::proto::transaction_manager::TransactionManager;

pub mod campaign_repository;
pub mod claim_repository;
pub mod email_template_repository;
pub mod error;
pub mod family_repository;
pub mod gift_repository;
pub mod person_repository;

pub trait DataRepository: Send + Sync {
    fn get_campaign_repository(&self) -> Arc<dyn CampaignRepository>;
    fn get_family_repository(&self) -> Arc<dyn FamilyRepository>;
    fn get_person_repository(&self) -> Arc<dyn PersonRepository>;
    fn get_gift_repository(&self) -> Arc<dyn GiftRepository>;
    fn get_claim_repository(&self) -> Arc<dyn ClaimRepository>;
    fn get_email_template_repository(&self) -> Arc<dyn EmailTemplateRepository>;
    fn get_tx_manager(&self) -> Arc<dyn TransactionManager>;
}
