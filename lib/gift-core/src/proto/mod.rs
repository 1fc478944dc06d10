pub mod cache_invalidator;
pub mod session_provider;
pub mod transaction_manager;
