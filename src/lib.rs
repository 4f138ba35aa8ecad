/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # faucet-verify
//!
//! Read-only diagnostics for a running faucet service. Four checks run in a
//! fixed order and each prints its own labelled section:
//!
//! 1. the wallet state file inside the faucet container
//! 2. `GET /stats`
//! 3. `GET /history`
//! 4. the last `Simulated send` lines of the service log stream
//!
//! A failing check prints its error text and the next check still runs.
//!
//! ```ignore
//! use faucet_verify::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Arc::new(Config::new());
//! let runtime = Arc::new(DockerCompose::new(&config.container));
//! let api = Arc::new(Client::new(&config)?);
//! let verifier = Verifier::new(config, runtime, api);
//! for report in verifier.run_all().await {
//!     print!("{report}");
//! }
//! ```

/// Application layer: configuration, API client, services
pub mod application;
/// Default values
pub mod constants;
/// Error type
pub mod error;
/// Transport layer: HTTP and container runtime
pub mod model;
/// Commonly used items
pub mod prelude;
/// Output models and rendering
pub mod presentation;
/// Environment, logging and text helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
