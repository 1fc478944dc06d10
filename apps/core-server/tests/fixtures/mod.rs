use std::path::Path;

use core_server::ServerConfig;
use gift_core::config::core_config::AppConfig;
use sql_data_provider::DbConn;

pub const DONOR_TOKEN: &str = "test";
pub const OTHER_DONOR_TOKEN: &str = "test-other";
pub const ADMIN_TOKEN: &str = "test-admin";

/// Identity behind [`DONOR_TOKEN`]
pub const DONOR_IDENTITY: &str = "donor-1";

pub fn create_config() -> AppConfig<ServerConfig> {
    create_config_with("{}")
}

/// Test configuration with `overlay` merged on top
pub fn create_config_with(overlay: impl AsRef<str>) -> AppConfig<ServerConfig> {
    let root = std::env!("CARGO_MANIFEST_DIR");
    let base = std::fs::read_to_string(format!("{root}/../../config/config.yml")).unwrap();

    let test = indoc::formatdoc! {"
        claim:
            rateLimit:
                maxClaims: 5
        app:
            databaseUrl: 'sqlite::memory:'
            database:
                maxConnections: 1
            traceLevel: 'debug'
            enableMetrics: true
            enableServerInfo: true
            authTokens:
                {DONOR_TOKEN}:
                    userId: {DONOR_IDENTITY}
                {OTHER_DONOR_TOKEN}:
                    userId: donor-2
                {ADMIN_TOKEN}:
                    userId: admin
                    admin: true
    "};

    AppConfig::from_yaml([base.as_str(), test.as_str(), overlay.as_ref()]).unwrap()
}

pub async fn create_db(config: &AppConfig<ServerConfig>) -> DbConn {
    sql_data_provider::db_conn(config.app.database_url.as_str(), &config.app.database)
        .await
        .unwrap()
}

/// Shared file database with a connection pool, so requests run on separate connections
pub fn create_file_db_config(path: &Path) -> AppConfig<ServerConfig> {
    create_config_with(indoc::formatdoc! {"
        claim:
            rateLimit:
                maxClaims: 100
        app:
            databaseUrl: 'sqlite://{}?mode=rwc'
            database:
                maxConnections: 10
    ", path.display()})
}
