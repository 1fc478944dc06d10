use std::sync::Arc;

use gift_core::repository::gift_repository::GiftRepository;
use gift_core::repository::person_repository::PersonRepository;

use crate::transaction_context::TransactionManagerImpl;

mod mapper;
pub mod repository;


pub(crate) struct ClaimProvider {
    pub db: TransactionManagerImpl,
    pub gift_repository: Arc<dyn GiftRepository>,
    pub person_repository: Arc<dyn PersonRepository>,
}
