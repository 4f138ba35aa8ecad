use crate::error::AppError;
use async_trait::async_trait;

/// Interface to the container runtime hosting the faucet
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Reads a file inside the running container of `service`
    ///
    /// # Returns
    /// * The raw file content
    async fn read_file(&self, service: &str, path: &str) -> Result<String, AppError>;

    /// Gets the aggregated log stream of `service`
    async fn logs(&self, service: &str) -> Result<String, AppError>;
}
