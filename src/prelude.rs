/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # faucet-verify prelude
//!
//! Brings the types needed to assemble and run a [`Verifier`] into scope.

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Verifier configuration
pub use crate::application::config::{Config, ContainerConfig, FaucetApiConfig, LogScanConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// INTERFACES AND IMPLEMENTATIONS
// ============================================================================

/// Faucet API interface and client
pub use crate::application::client::Client;
pub use crate::application::interfaces::faucet::FaucetApi;

/// Container runtime interface and `docker compose` implementation
pub use crate::application::interfaces::container::ContainerRuntime;
pub use crate::model::compose::DockerCompose;

/// HTTP transport
pub use crate::model::http::HttpClient;
pub use crate::model::retry::RetryConfig;

/// Verification service
pub use crate::application::services::verify_service::{Verifier, render_wallet};

// ============================================================================
// PRESENTATION
// ============================================================================

pub use crate::presentation::report::{CheckReport, Outcome, Section, pretty_json};
pub use crate::presentation::wallet::{TransactionRecord, WalletState, WalletSummary};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::config::{get_env_or_default, get_env_or_none};
pub use crate::utils::logger::setup_logger;
pub use crate::utils::logs::tail_matching;
