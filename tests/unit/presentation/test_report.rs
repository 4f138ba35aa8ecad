use faucet_verify::error::AppError;
use faucet_verify::presentation::report::{CheckReport, Outcome, Section, pretty_json};
use serde_json::json;

#[test]
fn test_sections_run_in_fixed_order() {
    assert_eq!(
        Section::ALL,
        [
            Section::WalletFile,
            Section::Stats,
            Section::History,
            Section::RecentSends
        ]
    );
    assert_eq!(Section::History.to_string(), "Transaction history");
}

#[test]
fn test_pretty_json_object() {
    let out = pretty_json(&json!({"sent": 3})).expect("serializable");
    assert_eq!(out, "{\n  \"sent\": 3\n}");
}

#[test]
fn test_pretty_json_empty_array() {
    assert_eq!(pretty_json(&json!([])).expect("serializable"), "[]");
}

#[test]
fn test_report_display_ok() {
    let report = CheckReport::new(
        Section::Stats,
        "GET http://127.0.0.1:8080/stats",
        Ok("{\n  \"sent\": 3\n}".to_string()),
    );
    assert_eq!(
        report.to_string(),
        "=== Faucet stats (GET http://127.0.0.1:8080/stats) ===\n{\n  \"sent\": 3\n}\n"
    );
    assert!(!report.outcome.is_failed());
}

#[test]
fn test_report_display_failure() {
    let report = CheckReport::new(
        Section::WalletFile,
        "faucet:/var/faucet/wallet.json",
        Err(AppError::InvalidInput("bad".to_string())),
    );
    assert_eq!(
        report.outcome,
        Outcome::Failed("error: invalid input: bad".to_string())
    );
    assert!(report.to_string().ends_with("error: invalid input: bad\n"));
}

#[test]
fn test_pretty_json_keeps_key_order() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"txid":"ab","to_address":"tmB","amount":1.0,"mock":true}"#)
            .expect("json");
    assert_eq!(
        pretty_json(&value).expect("serializable"),
        "{\n  \"txid\": \"ab\",\n  \"to_address\": \"tmB\",\n  \"amount\": 1.0,\n  \"mock\": true\n}"
    );
}
