use std::collections::HashMap;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use sql_data_provider::DataLayerConfig;

pub mod dto;
pub mod endpoint;
pub mod metrics;
pub mod router;
pub mod serialize;

mod cache;
mod middleware;
mod session;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub database: DataLayerConfig,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    /// Accepted bearer tokens and the identity each of them stands for
    pub auth_tokens: HashMap<String, AuthTokenConfig>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether the health endpoint is available
    pub enable_server_info: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenConfig {
    pub user_id: String,
    #[serde(default)]
    pub admin: bool,
}
