//! Human readable check output

use crate::error::AppError;
use serde_json::Value;
use std::fmt;

/// The four checks, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Wallet state file inside the container
    WalletFile,
    /// `GET /stats`
    Stats,
    /// `GET /history`
    History,
    /// Marker lines in the log stream
    RecentSends,
}

impl Section {
    /// All sections in run order
    pub const ALL: [Section; 4] = [
        Section::WalletFile,
        Section::Stats,
        Section::History,
        Section::RecentSends,
    ];

    /// Heading printed above the section
    pub fn title(&self) -> &'static str {
        match self {
            Section::WalletFile => "Wallet file",
            Section::Stats => "Faucet stats",
            Section::History => "Transaction history",
            Section::RecentSends => "Recent sends",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// What a check produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered body
    Ok(String),
    /// Error text, shown in place of the body
    Failed(String),
}

impl Outcome {
    /// Returns true if the check failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Text to print, body or error
    pub fn text(&self) -> &str {
        match self {
            Outcome::Ok(body) | Outcome::Failed(body) => body,
        }
    }
}

impl From<Result<String, AppError>> for Outcome {
    fn from(result: Result<String, AppError>) -> Self {
        match result {
            Ok(body) => Outcome::Ok(body),
            Err(e) => Outcome::Failed(format!("error: {e}")),
        }
    }
}

/// Result of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Which check ran
    pub section: Section,
    /// Where the data came from (container path, URL, service logs)
    pub source: String,
    /// Body or error
    pub outcome: Outcome,
}

impl CheckReport {
    /// Creates a report from a check result
    pub fn new(section: Section, source: impl Into<String>, result: Result<String, AppError>) -> Self {
        Self {
            section,
            source: source.into(),
            outcome: result.into(),
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ({}) ===", self.section, self.source)?;
        writeln!(f, "{}", self.outcome.text().trim_end())
    }
}

/// Pretty-prints a JSON document with two-space indentation
pub fn pretty_json(value: &Value) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
