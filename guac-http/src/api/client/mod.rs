use crate::api::responses::{BackendStatus, ConnectionsResponse, UsersResponse};
use crate::config::Config;
use crate::error::Result;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub async fn fetch_users(&self) -> Result<UsersResponse> {
        let body = self.get_json("users").await?;
        Ok(UsersResponse::from(body))
    }

    pub async fn fetch_connections(&self) -> Result<ConnectionsResponse> {
        let body = self.get_json("connections").await?;
        Ok(ConnectionsResponse::from(body))
    }

    pub async fn check_status(&self) -> Result<BackendStatus> {
        let body = self.get_json("").await?;
        Ok(serde_json::from_value(body)?)
    }

    /// The status code is only logged: the body alone decides how a list
    /// response is classified.
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.config.endpoint(path);
        info!("Fetching {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with HTTP {}", url, status);
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
