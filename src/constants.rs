/// Base URL of the faucet HTTP API
pub const DEFAULT_FAUCET_API_URL: &str = "http://127.0.0.1:8080";
/// Timeout in seconds for faucet API requests
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Path of the statistics endpoint
pub const STATS_PATH: &str = "stats";
/// Path of the transaction history endpoint
pub const HISTORY_PATH: &str = "history";
/// Compose service name of the faucet
pub const DEFAULT_FAUCET_SERVICE: &str = "faucet";
/// Location of the wallet state file inside the faucet container
pub const DEFAULT_WALLET_PATH: &str = "/var/faucet/wallet.json";
/// Container runtime binary invoked for `compose` subcommands
pub const DEFAULT_CONTAINER_RUNTIME: &str = "docker";
/// Log marker emitted by the faucet for every send
pub const DEFAULT_SEND_MARKER: &str = "Simulated send";
/// Number of matching log lines shown by the recent sends check
pub const DEFAULT_RECENT_SENDS: usize = 5;
/// Delay in seconds between HTTP retries when retries are enabled
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;
/// User agent string used in HTTP requests to identify this tool to the faucet
pub const USER_AGENT: &str = "faucet-verify/0.1.0";
