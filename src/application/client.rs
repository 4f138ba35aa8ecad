/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::faucet::FaucetApi;
use crate::constants::{HISTORY_PATH, STATS_PATH};
use crate::error::AppError;
use crate::model::http::HttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Faucet API client
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the API configured in `config`
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Underlying HTTP client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl FaucetApi for Client {
    async fn get_stats(&self) -> Result<Value, AppError> {
        info!("Getting faucet stats");
        let stats: Value = self.http_client.get(STATS_PATH).await?;
        debug!("Faucet stats obtained");
        Ok(stats)
    }

    async fn get_history(&self) -> Result<Value, AppError> {
        info!("Getting faucet history");
        let history: Value = self.http_client.get(HISTORY_PATH).await?;
        debug!("Faucet history obtained");
        Ok(history)
    }
}
