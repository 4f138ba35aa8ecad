/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;
use std::process::ExitStatus;

/// Errors raised while probing the faucet service
#[derive(Debug)]
pub enum AppError {
    /// Transport-level HTTP failure (connection refused, timeout, DNS)
    Network(reqwest::Error),
    /// The faucet API answered with a non-success status
    Unexpected {
        /// Status returned by the faucet
        status: StatusCode,
        /// Response body, pretty-printed when it is JSON
        body: String,
    },
    /// A document could not be parsed as JSON
    Json(serde_json::Error),
    /// The container runtime could not be spawned
    Io(std::io::Error),
    /// The container runtime ran but exited unsuccessfully
    CommandFailed {
        /// Command line that was executed
        command: String,
        /// Exit status reported by the process
        status: ExitStatus,
        /// Raw stderr of the process
        stderr: String,
    },
    /// Malformed configuration or argument
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected { status, body } => {
                write!(f, "unexpected status code: {status}")?;
                let body = body.trim_end();
                if !body.is_empty() {
                    write!(f, "\n{body}")?;
                }
                Ok(())
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::CommandFailed {
                command,
                status,
                stderr,
            } => {
                write!(f, "command `{command}` failed ({status})")?;
                let stderr = stderr.trim_end();
                if !stderr.is_empty() {
                    write!(f, ":\n{stderr}")?;
                }
                Ok(())
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
