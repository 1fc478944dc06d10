use core_server::ServerConfig;
use core_server::router::start_server;
use gift_core::config::core_config::AppConfig;
use gift_core::model::campaign::CampaignStatus;
use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::{ClaimFixture, insert_claim_fixture};
use tempfile::NamedTempFile;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use crate::fixtures;

pub struct TestContext {
    pub db: DbConn,
    pub api: Client,
    base_url: String,
    _handle: JoinHandle<()>,
    _database_file: Option<NamedTempFile>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_config(fixtures::create_config(), None).await
    }

    /// Server on a file database with a multi-connection pool
    pub async fn new_with_file_database() -> Self {
        let file = NamedTempFile::new().unwrap();
        let config = fixtures::create_file_db_config(file.path());
        Self::new_with_config(config, Some(file)).await
    }

    async fn new_with_config(
        config: AppConfig<ServerConfig>,
        database_file: Option<NamedTempFile>,
    ) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let db = fixtures::create_db(&config).await;
        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await.unwrap() }
        });

        Self {
            db,
            api: Client::new(base_url.clone(), fixtures::DONOR_TOKEN.into()),
            base_url,
            _handle,
            _database_file: database_file,
        }
    }

    /// Active campaign with one gift of `total_quantity` units and a claimant linked to
    /// [`fixtures::DONOR_IDENTITY`]
    pub async fn new_with_gift(total_quantity: i32) -> (Self, ClaimFixture) {
        Self::new_with_campaign(CampaignStatus::Active, total_quantity).await
    }

    pub async fn new_with_campaign(
        status: CampaignStatus,
        total_quantity: i32,
    ) -> (Self, ClaimFixture) {
        let context = Self::new().await;
        let fixture = insert_claim_fixture(
            &context.db,
            status,
            total_quantity,
            Some(fixtures::DONOR_IDENTITY),
        )
        .await
        .unwrap();

        (context, fixture)
    }

    pub fn api_with_token(&self, token: &str) -> Client {
        Client::new(self.base_url.clone(), token.into())
    }

    pub fn unauthenticated_api(&self) -> Client {
        Client::unauthenticated(self.base_url.clone())
    }
}
