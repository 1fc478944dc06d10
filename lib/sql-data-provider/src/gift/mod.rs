use std::sync::Arc;

use gift_core::repository::family_repository::FamilyRepository;

use crate::transaction_context::TransactionManagerImpl;

mod mapper;
pub mod repository;


pub(crate) struct GiftProvider {
    pub db: TransactionManagerImpl,
    pub family_repository: Arc<dyn FamilyRepository>,
}
