use crate::transaction_context::TransactionManagerImpl;

pub mod repository;

pub(crate) struct CampaignProvider {
    pub db: TransactionManagerImpl,
}
