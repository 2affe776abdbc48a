// Venue and sequence constants. Everything tunable per run lives in
// SmokeSettings; these are the fixed values and the settings' defaults.
pub const SATS_PER_BTC: f64 = 1e8;
pub const API_VERSION: &str = "v2";

pub const PATH_FUTURES: &str = "/futures";
pub const PATH_FUTURES_TICKER: &str = "/futures/ticker";

pub const DEFAULT_USD_AMOUNT: f64 = 5.0;
pub const DEFAULT_LEVERAGE: u32 = 1;
pub const DEFAULT_REQUEST_DELAY_SECS: f64 = 3.0;
pub const DEFAULT_TAKE_PROFIT_PCT: f64 = 0.01;
pub const DEFAULT_LIMIT_OFFSET_USD: f64 = 100.0;
pub const DEFAULT_LOG_FILE: &str = "lnmarkets_test.log";
pub const DEFAULT_CONFIG_FILE: &str = "configuration.yml";

pub const ENV_KEY: &str = "LN_KEY";
pub const ENV_SECRET: &str = "LN_SECRET";
pub const ENV_PASSPHRASE: &str = "LN_PASSPHRASE";
