use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gift_core::proto::transaction_manager::{TransactionConfig, TransactionManager};
use gift_core::repository::error::DataLayerError;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr, ExecResult,
    QueryResult, Statement, TransactionTrait,
};

use crate::mapper::to_data_layer_error;

const BEGIN_RETRY_DELAY: Duration = Duration::from_millis(50);

tokio::task_local! {
    static CURRENT_TRANSACTION: Arc<DatabaseTransaction>;
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TransactionSettings {
    pub timeout: Duration,
    pub begin_retries: u32,
}

/// Runs units of work on a database transaction bound to the current task.
///
/// Providers obtain their connection through [`TransactionManagerImpl::tx`], which resolves to
/// the running transaction inside [`TransactionManager::transaction`] and to the pool otherwise.
#[derive(Clone)]
pub struct TransactionManagerImpl {
    db: DatabaseConnection,
    settings: TransactionSettings,
}

impl TransactionManagerImpl {
    pub(crate) fn new(db: DatabaseConnection, settings: TransactionSettings) -> Self {
        Self { db, settings }
    }

    pub(crate) fn tx(&self) -> DbHandle<'_> {
        match CURRENT_TRANSACTION.try_with(Arc::clone) {
            Ok(transaction) => DbHandle::Transaction(transaction),
            Err(_) => DbHandle::Connection(&self.db),
        }
    }

    async fn begin(&self) -> Result<DatabaseTransaction, DataLayerError> {
        let mut attempt = 0;
        loop {
            match self.db.begin().await {
                Ok(transaction) => return Ok(transaction),
                // nothing was executed yet, safe to try again
                Err(error @ (DbErr::Conn(_) | DbErr::ConnectionAcquire(_)))
                    if attempt < self.settings.begin_retries =>
                {
                    attempt += 1;
                    tracing::warn!("Failed to begin transaction, attempt {attempt}: {error}");
                    tokio::time::sleep(BEGIN_RETRY_DELAY * attempt).await;
                }
                Err(error) => return Err(to_data_layer_error(error)),
            }
        }
    }
}

#[async_trait]
impl TransactionManager for TransactionManagerImpl {
    async fn transaction_with_config(
        &self,
        future: Pin<Box<dyn Future<Output = Result<(), anyhow::Error>> + Send + 'async_trait>>,
        config: TransactionConfig,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError> {
        // nested units of work join the outer transaction
        if CURRENT_TRANSACTION.try_with(|_| ()).is_ok() {
            return Ok(future.await);
        }

        let timeout = config.timeout.unwrap_or(self.settings.timeout);
        let transaction = Arc::new(self.begin().await?);

        let outcome =
            tokio::time::timeout(timeout, CURRENT_TRANSACTION.scope(transaction.clone(), future))
                .await;

        let transaction = Arc::into_inner(transaction).ok_or(DataLayerError::TransactionError(
            "Transaction still referenced after unit of work".to_string(),
        ))?;

        match outcome {
            Ok(Ok(())) => {
                transaction.commit().await.map_err(to_data_layer_error)?;
                Ok(Ok(()))
            }
            Ok(Err(error)) => {
                transaction.rollback().await.map_err(to_data_layer_error)?;
                Ok(Err(error))
            }
            Err(_) => {
                tracing::warn!("Transaction timed out after {timeout:?}, rolling back");
                transaction.rollback().await.map_err(to_data_layer_error)?;
                Err(DataLayerError::Timeout(timeout))
            }
        }
    }
}

pub(crate) enum DbHandle<'a> {
    Connection(&'a DatabaseConnection),
    Transaction(Arc<DatabaseTransaction>),
}

#[async_trait]
impl ConnectionTrait for DbHandle<'_> {
    fn get_database_backend(&self) -> DatabaseBackend {
        match self {
            Self::Connection(db) => db.get_database_backend(),
            Self::Transaction(tx) => tx.get_database_backend(),
        }
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        match self {
            Self::Connection(db) => db.execute(stmt).await,
            Self::Transaction(tx) => tx.execute(stmt).await,
        }
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        match self {
            Self::Connection(db) => db.execute_unprepared(sql).await,
            Self::Transaction(tx) => tx.execute_unprepared(sql).await,
        }
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        match self {
            Self::Connection(db) => db.query_one(stmt).await,
            Self::Transaction(tx) => tx.query_one(stmt).await,
        }
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        match self {
            Self::Connection(db) => db.query_all(stmt).await,
            Self::Transaction(tx) => tx.query_all(stmt).await,
        }
    }

    fn support_returning(&self) -> bool {
        match self {
            Self::Connection(db) => db.support_returning(),
            Self::Transaction(tx) => tx.support_returning(),
        }
    }
}
