use crate::transaction_context::TransactionManagerImpl;

pub mod repository;


pub(crate) struct EmailTemplateProvider {
    pub db: TransactionManagerImpl,
}
