/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing log stream filtering
pub mod logs;

pub use config::*;
pub use logger::*;
pub use logs::*;
