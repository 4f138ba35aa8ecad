/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! `docker compose` backed container runtime
//!
//! Runs `<runtime> compose [-f file] exec -T <service> cat <path>` to read a
//! file and `<runtime> compose [-f file] logs --no-color <service>` to fetch
//! the log stream. Both are read-only toward the service.

use crate::application::config::ContainerConfig;
use crate::application::interfaces::container::ContainerRuntime;
use crate::error::AppError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Container runtime driving the `compose` subcommand of a docker-compatible CLI
#[derive(Debug, Clone)]
pub struct DockerCompose {
    runtime: String,
    compose_file: Option<String>,
}

impl DockerCompose {
    /// Creates a runtime wrapper from configuration
    pub fn new(config: &ContainerConfig) -> Self {
        Self {
            runtime: config.runtime.clone(),
            compose_file: config.compose_file.clone(),
        }
    }

    /// Full argument list for a compose subcommand
    pub fn compose_args(&self, args: &[&str]) -> Vec<String> {
        let mut out = vec!["compose".to_string()];
        if let Some(file) = &self.compose_file {
            out.push("-f".to_string());
            out.push(file.clone());
        }
        out.extend(args.iter().map(|a| a.to_string()));
        out
    }

    async fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let args = self.compose_args(args);
        let command = format!("{} {}", self.runtime, args.join(" "));
        debug!("Running {}", command);

        let output = Command::new(&self.runtime)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!("{} exited with {}", command, output.status);
            return Err(AppError::CommandFailed {
                command,
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ContainerRuntime for DockerCompose {
    async fn read_file(&self, service: &str, path: &str) -> Result<String, AppError> {
        self.run(&["exec", "-T", service, "cat", path]).await
    }

    async fn logs(&self, service: &str) -> Result<String, AppError> {
        self.run(&["logs", "--no-color", service]).await
    }
}
