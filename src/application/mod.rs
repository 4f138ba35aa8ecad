/// Faucet API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces (container runtime, faucet API)
pub mod interfaces;
/// Verification services
pub mod services;
