use crate::ENV_LOCK;
use faucet_verify::application::config::Config;
use std::env;

const VARS: [&str; 10] = [
    "FAUCET_API_URL",
    "FAUCET_API_TIMEOUT",
    "FAUCET_SERVICE",
    "FAUCET_WALLET_PATH",
    "FAUCET_CONTAINER_RUNTIME",
    "FAUCET_COMPOSE_FILE",
    "FAUCET_LOG_MARKER",
    "FAUCET_RECENT_SENDS",
    "FAUCET_MAX_RETRY_COUNT",
    "FAUCET_RETRY_DELAY_SECS",
];

fn clear_vars() {
    for var in VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn test_defaults_match_local_setup() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_vars();

    let config = Config::new();

    assert_eq!(config.faucet_api.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.faucet_api.timeout, 30);
    assert_eq!(config.faucet_api.max_retry_count, 0);
    assert_eq!(config.container.runtime, "docker");
    assert_eq!(config.container.compose_file, None);
    assert_eq!(config.container.service, "faucet");
    assert_eq!(config.container.wallet_path, "/var/faucet/wallet.json");
    assert_eq!(config.log_scan.marker, "Simulated send");
    assert_eq!(config.log_scan.limit, 5);
    assert_eq!(config.retry().max_retries(), 0);
}

#[test]
fn test_environment_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_vars();
    unsafe {
        env::set_var("FAUCET_API_URL", "http://10.0.0.2:9090");
        env::set_var("FAUCET_SERVICE", "faucet-dev");
        env::set_var("FAUCET_COMPOSE_FILE", "docker/compose.yml");
        env::set_var("FAUCET_RECENT_SENDS", "10");
        env::set_var("FAUCET_API_TIMEOUT", "soon");
    }

    let config = Config::new();
    clear_vars();

    assert_eq!(config.faucet_api.base_url, "http://10.0.0.2:9090");
    assert_eq!(config.faucet_api.timeout, 30);
    assert_eq!(config.container.service, "faucet-dev");
    assert_eq!(
        config.container.compose_file.as_deref(),
        Some("docker/compose.yml")
    );
    assert_eq!(config.log_scan.limit, 10);
}

#[test]
fn test_config_display() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_vars();

    let rendered = Config::default().to_string();
    assert!(rendered.contains("faucet"));
    assert!(rendered.contains("Simulated send"));
}
