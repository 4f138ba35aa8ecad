use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the faucet HTTP API
#[async_trait]
pub trait FaucetApi: Send + Sync {
    /// Gets aggregate statistics (`GET /stats`)
    async fn get_stats(&self) -> Result<Value, AppError>;

    /// Gets transaction history (`GET /history`)
    async fn get_history(&self) -> Result<Value, AppError>;
}
