/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Thin HTTP client for the faucet API
///
/// The faucet API is unauthenticated and local, so this client only handles:
/// - URL joining against the configured base URL
/// - Request timeout
/// - Optional retry on connection errors
pub struct HttpClient {
    http_client: HttpInternalClient,
    base_url: String,
    retry: RetryConfig,
}

impl HttpClient {
    /// Creates a new client from configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the base URL is empty or the client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let base_url = config.faucet_api.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AppError::InvalidInput(
                "faucet API base URL is empty".to_string(),
            ));
        }

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.faucet_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            retry: config.retry(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `path` against the base URL; absolute URLs pass through
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Makes a GET request and deserializes the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url_for(path);
        let response = make_http_request(&self.http_client, Method::GET, &url, &self.retry).await?;
        self.parse_response(response).await
    }

    /// Parses response body as JSON, keeping the parser error if it is not
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Makes an HTTP request, retrying connection errors per `retry_config`
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `retry_config` - Retry configuration (max retries and delay)
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - Transport error after retries, or a non-success status
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;
    let max_retries = retry_config.max_retries();
    let delay_secs = retry_config.delay_secs();

    loop {
        debug!("{} {}", method, url);

        let response = match client.request(method.clone(), url).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() && retry_count < max_retries => {
                retry_count += 1;
                warn!(
                    "Connection to {} failed (attempt {}): {}. Waiting {} seconds before retry...",
                    url, retry_count, e, delay_secs
                );
                tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                continue;
            }
            Err(e) => return Err(AppError::Network(e)),
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::Unexpected {
            status,
            body: error_body(&body),
        });
    }
}

/// Error bodies are shown as the faucet sent them, pretty-printed when they are JSON
fn error_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| body.to_string())
}
