/// Module containing the faucet verification service
pub mod verify_service;

pub use crate::application::interfaces::container::*;
pub use crate::application::interfaces::faucet::*;
pub use verify_service::*;
