use crate::application::config::Config;
use crate::application::interfaces::container::ContainerRuntime;
use crate::application::interfaces::faucet::FaucetApi;
use crate::constants::{HISTORY_PATH, STATS_PATH};
use crate::error::AppError;
use crate::presentation::report::{CheckReport, Section, pretty_json};
use crate::presentation::wallet::WalletState;
use crate::utils::logs::tail_matching;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the four read-only faucet checks
///
/// Every check turns its own failure into a `Failed` outcome, so a dead
/// service still yields four reports.
pub struct Verifier<R: ContainerRuntime, A: FaucetApi> {
    config: Arc<Config>,
    runtime: Arc<R>,
    api: Arc<A>,
}

impl<R: ContainerRuntime, A: FaucetApi> Verifier<R, A> {
    /// Creates a new verifier
    pub fn new(config: Arc<Config>, runtime: Arc<R>, api: Arc<A>) -> Self {
        Self {
            config,
            runtime,
            api,
        }
    }

    /// Reads the wallet state file from the container and pretty-prints it
    pub async fn check_wallet_file(&self) -> CheckReport {
        let container = &self.config.container;
        let source = format!("{}:{}", container.service, container.wallet_path);
        info!("Reading wallet file {}", source);

        let result = self
            .runtime
            .read_file(&container.service, &container.wallet_path)
            .await
            .and_then(|raw| render_wallet(&raw));

        self.report(Section::WalletFile, source, result)
    }

    /// Fetches `GET /stats` and pretty-prints it
    pub async fn check_stats(&self) -> CheckReport {
        let source = self.endpoint(STATS_PATH);
        let result = self.api.get_stats().await.and_then(|v| pretty_json(&v));
        self.report(Section::Stats, source, result)
    }

    /// Fetches `GET /history` and pretty-prints it
    pub async fn check_history(&self) -> CheckReport {
        let source = self.endpoint(HISTORY_PATH);
        let result = self.api.get_history().await.and_then(|v| pretty_json(&v));
        self.report(Section::History, source, result)
    }

    /// Prints the last marker lines of the service log stream
    pub async fn check_recent_sends(&self) -> CheckReport {
        let service = &self.config.container.service;
        let scan = &self.config.log_scan;
        let source = format!("{} logs, last {} \"{}\"", service, scan.limit, scan.marker);
        info!("Scanning {} logs for \"{}\"", service, scan.marker);

        let result = self.runtime.logs(service).await.map(|logs| {
            let lines = tail_matching(&logs, &scan.marker, scan.limit);
            debug!("{} matching log lines kept", lines.len());
            if lines.is_empty() {
                format!("(no log lines matching \"{}\")", scan.marker)
            } else {
                lines.join("\n")
            }
        });

        self.report(Section::RecentSends, source, result)
    }

    /// Runs one check by section
    pub async fn run_check(&self, section: Section) -> CheckReport {
        match section {
            Section::WalletFile => self.check_wallet_file().await,
            Section::Stats => self.check_stats().await,
            Section::History => self.check_history().await,
            Section::RecentSends => self.check_recent_sends().await,
        }
    }

    /// Runs all checks in order, handing each report to `sink` as soon as it is ready
    pub async fn run_with<F: FnMut(&CheckReport)>(&self, mut sink: F) -> Vec<CheckReport> {
        let mut reports = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let report = self.run_check(section).await;
            sink(&report);
            reports.push(report);
        }
        let failed = reports.iter().filter(|r| r.outcome.is_failed()).count();
        if failed > 0 {
            warn!("{} of {} checks reported errors", failed, reports.len());
        } else {
            info!("All {} checks completed", reports.len());
        }
        reports
    }

    /// Runs all checks in order
    pub async fn run_all(&self) -> Vec<CheckReport> {
        self.run_with(|_| {}).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "GET {}/{}",
            self.config.faucet_api.base_url.trim_end_matches('/'),
            path
        )
    }

    fn report(
        &self,
        section: Section,
        source: String,
        result: Result<String, AppError>,
    ) -> CheckReport {
        if let Err(e) = &result {
            warn!("{} check failed: {}", section, e);
        }
        CheckReport::new(section, source, result)
    }
}

/// Pretty-prints a wallet document, appending a summary when it has the faucet's schema
pub fn render_wallet(raw: &str) -> Result<String, AppError> {
    let document: Value = serde_json::from_str(raw)?;
    let mut out = pretty_json(&document)?;
    match serde_json::from_value::<WalletState>(document) {
        Ok(wallet) => {
            out.push('\n');
            out.push_str(&wallet.summary().to_string());
        }
        Err(e) => debug!("Wallet document has no known schema: {}", e),
    }
    Ok(out)
}
