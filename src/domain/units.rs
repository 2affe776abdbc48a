// USD -> satoshi conversion and price rounding
use log::error;
use thiserror::Error;

use crate::domain::constants::SATS_PER_BTC;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("price must be a positive finite number, got {0}")]
    InvalidPrice(f64),

    #[error("usd amount must be a non-negative finite number, got {0}")]
    InvalidAmount(f64),

    #[error("conversion result {0} does not fit an integer sat amount")]
    OutOfRange(f64),
}

/// Rounds to the nearest integer, ties to even.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Converts a USD notional into satoshis at the given BTC price
pub fn try_usd_to_sats(usd_amount: f64, price: f64) -> Result<u64, ConversionError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ConversionError::InvalidPrice(price));
    }
    if !usd_amount.is_finite() || usd_amount < 0.0 {
        return Err(ConversionError::InvalidAmount(usd_amount));
    }

    let sats = round_half_even(usd_amount / price * SATS_PER_BTC);
    if !sats.is_finite() || sats > u64::MAX as f64 {
        return Err(ConversionError::OutOfRange(sats));
    }
    Ok(sats as u64)
}

/// Same as [`try_usd_to_sats`] but collapses every failure into 0.
///
/// 0 is never a valid margin, callers must abort when they get it.
pub fn usd_to_sats(usd_amount: f64, price: f64) -> u64 {
    match try_usd_to_sats(usd_amount, price) {
        Ok(sats) => sats,
        Err(e) => {
            error!("Failed to convert ${} at price {} to sats: {}", usd_amount, price, e);
            0
        }
    }
}

/// Price `pct` above `base`, rounded to a whole dollar
pub fn price_above(base: f64, pct: f64) -> f64 {
    round_half_even(base * (1.0 + pct))
}
