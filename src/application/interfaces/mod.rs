/// Container runtime interface
pub mod container;
/// Faucet API interface
pub mod faucet;
