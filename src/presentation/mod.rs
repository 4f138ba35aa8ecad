/// Check reports and rendering
pub mod report;
/// Wallet state file models
pub mod wallet;
