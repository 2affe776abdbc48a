//! LN Markets futures smoke test
//!
//! Fetches the market price, sizes a small USD margin in sats and places
//! two market buys and one limit buy, with the take-profit handling picked
//! by [`TakeProfitPolicy`].

mod config;
mod error;
mod market_data;
mod order_manager;
pub mod runner;


pub use config::*;
pub use error::SmokeError;
pub use market_data::{fetch_market_price, fetch_ticker};
pub use order_manager::{place_order, set_take_profit};
pub use runner::{SmokeReport, SmokeRunner, TakeProfitOutcome};
