use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::constants::*;

/// How the second market order gets its take-profit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TakeProfitPolicy {
    /// Sent with the order, 1% above the pre-trade market price
    Direct,
    /// Set by an update call after the fill, 1% above the entry price
    Deferred,
}

/// Parameters of a smoke run, read from the `smoke` section of the config
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SmokeSettings {
    #[serde(default = "default_usd_amount")]
    pub usd_amount: f64,

    #[serde(default = "default_leverage")]
    pub leverage: u32,

    #[serde(default = "default_request_delay_secs")]
    pub request_delay_secs: f64,

    #[serde(default = "default_direct_take_profit")]
    pub direct_take_profit: bool,

    #[serde(default = "default_take_profit_pct")]
    pub take_profit_pct: f64,

    #[serde(default = "default_limit_offset_usd")]
    pub limit_offset_usd: f64,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_usd_amount() -> f64 {
    DEFAULT_USD_AMOUNT
}

fn default_leverage() -> u32 {
    DEFAULT_LEVERAGE
}

fn default_request_delay_secs() -> f64 {
    DEFAULT_REQUEST_DELAY_SECS
}

fn default_direct_take_profit() -> bool {
    true
}

fn default_take_profit_pct() -> f64 {
    DEFAULT_TAKE_PROFIT_PCT
}

fn default_limit_offset_usd() -> f64 {
    DEFAULT_LIMIT_OFFSET_USD
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for SmokeSettings {
    fn default() -> Self {
        Self {
            usd_amount: default_usd_amount(),
            leverage: default_leverage(),
            request_delay_secs: default_request_delay_secs(),
            direct_take_profit: default_direct_take_profit(),
            take_profit_pct: default_take_profit_pct(),
            limit_offset_usd: default_limit_offset_usd(),
            log_file: default_log_file(),
        }
    }
}

impl SmokeSettings {
    pub fn policy(&self) -> TakeProfitPolicy {
        if self.direct_take_profit {
            TakeProfitPolicy::Direct
        } else {
            TakeProfitPolicy::Deferred
        }
    }

    /// Blind pause after each order; bad values mean no pause
    pub fn request_delay(&self) -> Duration {
        if self.request_delay_secs.is_finite() && self.request_delay_secs > 0.0 {
            Duration::from_secs_f64(self.request_delay_secs)
        } else {
            Duration::ZERO
        }
    }
}
