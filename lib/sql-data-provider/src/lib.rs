use std::sync::Arc;
use std::time::Duration;

use campaign::CampaignProvider;
use claim::ClaimProvider;
use email_template::EmailTemplateProvider;
use family::FamilyProvider;
use gift::GiftProvider;
use gift_core::proto::transaction_manager::TransactionManager;
use gift_core::repository::DataRepository;
use gift_core::repository::campaign_repository::CampaignRepository;
use gift_core::repository::claim_repository::ClaimRepository;
use gift_core::repository::email_template_repository::EmailTemplateRepository;
use gift_core::repository::family_repository::FamilyRepository;
use gift_core::repository::gift_repository::GiftRepository;
use gift_core::repository::person_repository::PersonRepository;
use migration::{Migrator, MigratorTrait};
use person::PersonProvider;
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use transaction_context::{TransactionManagerImpl, TransactionSettings};

mod entity;
mod mapper;
mod transaction_context;

pub mod campaign;
pub mod claim;
pub mod email_template;
pub mod family;
pub mod gift;
pub mod person;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

pub type DbConn = DatabaseConnection;

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataLayerConfig {
    pub max_connections: u32,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub acquire_timeout: Duration,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub transaction_timeout: Duration,
    /// How many times beginning a transaction is retried on connection errors
    pub begin_retries: u32,
}

impl Default for DataLayerConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            transaction_timeout: Duration::from_secs(10),
            begin_retries: 3,
        }
    }
}

#[derive(Clone)]
pub struct DataLayer {
    campaign_repository: Arc<dyn CampaignRepository>,
    family_repository: Arc<dyn FamilyRepository>,
    person_repository: Arc<dyn PersonRepository>,
    gift_repository: Arc<dyn GiftRepository>,
    claim_repository: Arc<dyn ClaimRepository>,
    email_template_repository: Arc<dyn EmailTemplateRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl DataLayer {
    pub fn build(db: DbConn, config: &DataLayerConfig) -> Self {
        let tx_manager = TransactionManagerImpl::new(
            db,
            TransactionSettings {
                timeout: config.transaction_timeout,
                begin_retries: config.begin_retries,
            },
        );

        let campaign_repository = Arc::new(CampaignProvider {
            db: tx_manager.clone(),
        });
        let family_repository = Arc::new(FamilyProvider {
            db: tx_manager.clone(),
            campaign_repository: campaign_repository.clone(),
        });
        let person_repository = Arc::new(PersonProvider {
            db: tx_manager.clone(),
            family_repository: family_repository.clone(),
        });
        let gift_repository = Arc::new(GiftProvider {
            db: tx_manager.clone(),
            family_repository: family_repository.clone(),
        });
        let claim_repository = Arc::new(ClaimProvider {
            db: tx_manager.clone(),
            gift_repository: gift_repository.clone(),
            person_repository: person_repository.clone(),
        });
        let email_template_repository = Arc::new(EmailTemplateProvider {
            db: tx_manager.clone(),
        });

        Self {
            campaign_repository,
            family_repository,
            person_repository,
            gift_repository,
            claim_repository,
            email_template_repository,
            tx_manager: Arc::new(tx_manager),
        }
    }
}

impl DataRepository for DataLayer {
    fn get_campaign_repository(&self) -> Arc<dyn CampaignRepository> {
        self.campaign_repository.clone()
    }

    fn get_family_repository(&self) -> Arc<dyn FamilyRepository> {
        self.family_repository.clone()
    }

    fn get_person_repository(&self) -> Arc<dyn PersonRepository> {
        self.person_repository.clone()
    }

    fn get_gift_repository(&self) -> Arc<dyn GiftRepository> {
        self.gift_repository.clone()
    }

    fn get_claim_repository(&self) -> Arc<dyn ClaimRepository> {
        self.claim_repository.clone()
    }

    fn get_email_template_repository(&self) -> Arc<dyn EmailTemplateRepository> {
        self.email_template_repository.clone()
    }

    fn get_tx_manager(&self) -> Arc<dyn TransactionManager> {
        self.tx_manager.clone()
    }
}

/// Connects to the database and applies all pending migrations.
pub async fn db_conn(
    database_url: impl Into<String>,
    config: &DataLayerConfig,
) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(false);

    let db = sea_orm::Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}
