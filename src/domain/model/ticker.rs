use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;

use crate::domain::model::response::numeric;

/// Futures ticker snapshot. Only `last_price` drives the smoke run,
/// the quotes are kept for logging.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Ticker {
    pub last_price: f64,
    pub bid_price: Option<f64>,
    pub offer_price: Option<f64>,
    pub index: Option<f64>,
}

impl Ticker {
    pub fn new(last_price: f64) -> Self {
        Self {
            last_price,
            bid_price: None,
            offer_price: None,
            index: None,
        }
    }

    /// Create a Ticker from a normalized ticker response
    pub fn from_json(data: &Value) -> Result<Self> {
        let last_price = data
            .get("lastPrice")
            .and_then(numeric)
            .ok_or_else(|| anyhow!("Missing lastPrice"))?;

        Ok(Self {
            last_price,
            bid_price: data.get("bidPrice").and_then(numeric),
            offer_price: data.get("offerPrice").and_then(numeric),
            index: data.get("index").and_then(numeric),
        })
    }

    /// Last traded price, None unless strictly positive
    pub fn valid_last_price(&self) -> Option<f64> {
        if self.last_price.is_finite() && self.last_price > 0.0 {
            Some(self.last_price)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_string_price() {
        let ticker = Ticker::from_json(&json!({
            "index": 49990.5,
            "lastPrice": "50000",
            "bidPrice": 49999.5,
            "offerPrice": "50000.5"
        }))
        .unwrap();

        assert_eq!(ticker.last_price, 50000.0);
        assert_eq!(ticker.bid_price, Some(49999.5));
        assert_eq!(ticker.offer_price, Some(50000.5));
        assert_eq!(ticker.index, Some(49990.5));
        assert_eq!(ticker.valid_last_price(), Some(50000.0));
    }

    #[test]
    fn test_from_json_missing_price() {
        assert!(Ticker::from_json(&json!({"index": 1.0})).is_err());
        assert!(Ticker::from_json(&json!({"lastPrice": null})).is_err());
    }

    #[test]
    fn test_non_positive_price_is_invalid() {
        assert_eq!(Ticker::new(0.0).valid_last_price(), None);
        assert_eq!(Ticker::new(-5.0).valid_last_price(), None);
    }
}
