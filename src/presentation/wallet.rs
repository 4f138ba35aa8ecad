use prettytable::{Cell, Row, Table, format};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wallet state file as written by the faucet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletState {
    /// Faucet transparent address
    pub address: String,
    /// Creation time, ISO 8601
    #[serde(default)]
    pub created_at: Option<String>,
    /// Total funds ever added to the wallet
    #[serde(default)]
    pub initial_balance: f64,
    /// Sends recorded by the faucet, oldest first
    #[serde(default)]
    pub transaction_history: Vec<TransactionRecord>,
}

/// A single send recorded in the wallet file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction id (mock sends use a sha256 digest)
    pub txid: String,
    /// Recipient address
    pub to_address: String,
    /// Amount sent
    pub amount: f64,
    /// Send time, ISO 8601
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Optional memo for shielded recipients
    #[serde(default)]
    pub memo: Option<String>,
    /// Whether the send was simulated
    #[serde(default)]
    pub mock: bool,
}

impl WalletState {
    /// Sum of all recorded send amounts
    #[must_use]
    pub fn total_sent(&self) -> f64 {
        self.transaction_history.iter().map(|tx| tx.amount).sum()
    }

    /// Initial funding minus sends, never negative
    #[must_use]
    pub fn balance(&self) -> f64 {
        (self.initial_balance - self.total_sent()).max(0.0)
    }

    /// Condensed view used under the raw wallet document
    #[must_use]
    pub fn summary(&self) -> WalletSummary {
        WalletSummary {
            address: self.address.clone(),
            created_at: self.created_at.clone(),
            initial_balance: self.initial_balance,
            balance: self.balance(),
            total_sent: self.total_sent(),
            transactions: self.transaction_history.len(),
        }
    }
}

/// Derived wallet figures
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSummary {
    /// Faucet address
    pub address: String,
    /// Creation time
    pub created_at: Option<String>,
    /// Total funds ever added
    pub initial_balance: f64,
    /// Remaining balance
    pub balance: f64,
    /// Sum of all sends
    pub total_sent: f64,
    /// Number of recorded sends
    pub transactions: usize,
}

impl fmt::Display for WalletSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let created_at = self.created_at.as_deref().unwrap_or("-");
        let rows = [
            ("ADDRESS", self.address.clone()),
            ("CREATED", created_at.to_string()),
            ("INITIAL BALANCE", format!("{:.8}", self.initial_balance)),
            ("TOTAL SENT", format!("{:.8}", self.total_sent)),
            ("BALANCE", format!("{:.8}", self.balance)),
            ("TRANSACTIONS", self.transactions.to_string()),
        ];
        for (key, value) in rows {
            table.add_row(Row::new(vec![Cell::new(key), Cell::new(&value)]));
        }

        write!(f, "{}", table)
    }
}
