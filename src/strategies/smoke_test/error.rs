use serde_json::Value;
use thiserror::Error;

use crate::domain::enums::OrderType;

/// Failure of a smoke run step. Take-profit update failures are reported
/// but do not stop the run; everything else does.
#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Failed to fetch ticker: {0:#}")]
    TickerUnavailable(anyhow::Error),

    #[error("Invalid market price received: {0}")]
    InvalidPrice(f64),

    #[error("Invalid margin computed for ${usd_amount} at price {price}")]
    InvalidMargin { usd_amount: f64, price: f64 },

    #[error("{} order rejected: {response}", .kind.label())]
    OrderRejected { kind: OrderType, response: Value },

    #[error("Failed to place {} order: {cause:#}", .kind.label())]
    OrderFailed { kind: OrderType, cause: anyhow::Error },

    #[error("Take-profit update rejected: {0}")]
    TakeProfitRejected(Value),

    #[error("Failed to update take-profit: {0:#}")]
    TakeProfitFailed(anyhow::Error),
}
