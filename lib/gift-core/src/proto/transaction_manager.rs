use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;

use crate::repository::error::DataLayerError;

/// Runs a unit of work atomically.
///
/// Repository calls awaited inside the future are executed on the same database transaction.
/// The transaction is committed if the future resolves to `Ok`, and rolled back otherwise
/// (including when the future is dropped before completion).
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn transaction(
        &self,
        future: Pin<Box<dyn Future<Output = Result<(), anyhow::Error>> + Send + 'async_trait>>,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError> {
        self.transaction_with_config(future, TransactionConfig::default())
            .await
    }

    async fn transaction_with_config(
        &self,
        future: Pin<Box<dyn Future<Output = Result<(), anyhow::Error>> + Send + 'async_trait>>,
        config: TransactionConfig,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionConfig {
    /// Overrides the configured transaction timeout
    pub timeout: Option<Duration>,
}

impl<'a> dyn TransactionManager + 'a {
    /// The outer result reports failures of the transaction itself (begin, commit, timeout),
    /// the inner one is the outcome of `future`. An inner `Err` always means the transaction was
    /// rolled back.
    pub async fn tx<T, E>(
        &self,
        future: impl Future<Output = Result<T, E>> + Send + 'a,
    ) -> Result<Result<T, E>, DataLayerError>
    where
        T: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.tx_with_config(future, TransactionConfig::default())
            .await
    }

    pub async fn tx_with_config<T, E>(
        &self,
        future: impl Future<Output = Result<T, E>> + Send + 'a,
        config: TransactionConfig,
    ) -> Result<Result<T, E>, DataLayerError>
    where
        T: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        let mut result = None;
        let boxed = async {
            result = Some(future.await?);
            Ok(())
        }
        .boxed();

        if let Err(error) = self.transaction_with_config(boxed, config).await? {
            tracing::debug!("Transaction rolled back: {error}");
            let error = anyhow::Error::downcast::<E>(error).map_err(|e| {
                DataLayerError::TransactionError(format!("Failed to downcast error: {e}"))
            })?;
            return Ok(Err(error));
        }

        Ok(Ok(result.ok_or(DataLayerError::TransactionError(
            "Failed to unpack transaction result".to_string(),
        ))?))
    }
}

/// Transaction manager that does _not_ provide transactions. Useful in test scenarios.
pub struct NoTransactionManager;

#[async_trait]
impl TransactionManager for NoTransactionManager {
    async fn transaction_with_config(
        &self,
        future: Pin<Box<dyn Future<Output = Result<(), anyhow::Error>> + Send + 'async_trait>>,
        _config: TransactionConfig,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError> {
        Ok(future.await)
    }
}
