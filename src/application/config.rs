use crate::constants::{
    DEFAULT_CONTAINER_RUNTIME, DEFAULT_FAUCET_API_URL, DEFAULT_FAUCET_SERVICE,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_RECENT_SENDS, DEFAULT_SEND_MARKER, DEFAULT_WALLET_PATH,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the faucet verifier
pub struct Config {
    /// Faucet HTTP API configuration
    pub faucet_api: FaucetApiConfig,
    /// Container runtime configuration
    pub container: ContainerConfig,
    /// Log scanning configuration
    pub log_scan: LogScanConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the faucet HTTP API
pub struct FaucetApiConfig {
    /// Base URL of the faucet API
    pub base_url: String,
    /// Timeout in seconds for API requests
    pub timeout: u64,
    /// Maximum retries on connection errors (0 = no retry)
    pub max_retry_count: u32,
    /// Delay in seconds between retries
    pub retry_delay_secs: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for reaching the faucet container
pub struct ContainerConfig {
    /// Container runtime binary (`docker`, `podman`)
    pub runtime: String,
    /// Optional compose file passed with `-f`
    pub compose_file: Option<String>,
    /// Compose service name of the faucet
    pub service: String,
    /// Wallet state file path inside the container
    pub wallet_path: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the recent sends check
pub struct LogScanConfig {
    /// Substring identifying send log lines
    pub marker: String,
    /// Number of most recent matches to show
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment and an optional `.env` file.
    ///
    /// Every value has a default, so an empty environment yields the fixed
    /// local setup: API on `127.0.0.1:8080`, service `faucet`, wallet at
    /// `/var/faucet/wallet.json`, last 5 `Simulated send` lines.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let retry = RetryConfig::default();

        Config {
            faucet_api: FaucetApiConfig {
                base_url: get_env_or_default(
                    "FAUCET_API_URL",
                    String::from(DEFAULT_FAUCET_API_URL),
                ),
                timeout: get_env_or_default("FAUCET_API_TIMEOUT", DEFAULT_HTTP_TIMEOUT_SECS),
                max_retry_count: retry.max_retries(),
                retry_delay_secs: retry.delay_secs(),
            },
            container: ContainerConfig {
                runtime: get_env_or_default(
                    "FAUCET_CONTAINER_RUNTIME",
                    String::from(DEFAULT_CONTAINER_RUNTIME),
                ),
                compose_file: get_env_or_none("FAUCET_COMPOSE_FILE"),
                service: get_env_or_default("FAUCET_SERVICE", String::from(DEFAULT_FAUCET_SERVICE)),
                wallet_path: get_env_or_default(
                    "FAUCET_WALLET_PATH",
                    String::from(DEFAULT_WALLET_PATH),
                ),
            },
            log_scan: LogScanConfig {
                marker: get_env_or_default("FAUCET_LOG_MARKER", String::from(DEFAULT_SEND_MARKER)),
                limit: get_env_or_default("FAUCET_RECENT_SENDS", DEFAULT_RECENT_SENDS),
            },
        }
    }

    /// Retry settings for faucet API requests
    #[must_use]
    pub fn retry(&self) -> RetryConfig {
        RetryConfig::with_max_retries_and_delay(
            self.faucet_api.max_retry_count,
            self.faucet_api.retry_delay_secs,
        )
    }
}
