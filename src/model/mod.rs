/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// `docker compose` container runtime
pub mod compose;
/// HTTP request utilities with retry
pub mod http;
/// Retry configuration for HTTP requests
pub mod retry;
