// Domain model for futures trades
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::domain::enums::{OrderSide, OrderType, UpdateKind};
use crate::domain::model::response::numeric;

/// Whole-dollar prices go out as integers, anything else as a float.
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.is_finite() && price.fract() == 0.0 && price.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

fn serialize_opt_price<S>(price: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match price {
        Some(p) => serialize_price(p, serializer),
        None => serializer.serialize_none(),
    }
}

/// Body of a new-trade request
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct OrderRequest {
    #[serde(rename = "type")]
    pub kind: OrderType,
    pub side: OrderSide,
    pub margin: u64,
    pub leverage: u32,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_opt_price")]
    pub price: Option<f64>,
    #[serde(
        rename = "takeprofit",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_price"
    )]
    pub take_profit: Option<f64>,
}

impl OrderRequest {
    pub fn market(margin: u64, leverage: u32) -> Self {
        Self {
            kind: OrderType::Market,
            side: OrderSide::Buy,
            margin,
            leverage,
            price: None,
            take_profit: None,
        }
    }

    pub fn limit(margin: u64, leverage: u32, price: f64) -> Self {
        Self {
            kind: OrderType::Limit,
            side: OrderSide::Buy,
            margin,
            leverage,
            price: Some(price),
            take_profit: None,
        }
    }

    pub fn with_take_profit(mut self, take_profit: Option<f64>) -> Self {
        self.take_profit = take_profit;
        self
    }
}

/// Body of an update-trade request
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TradeUpdate {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    #[serde(serialize_with = "serialize_price")]
    pub value: f64,
}

impl TradeUpdate {
    pub fn take_profit(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            kind: UpdateKind::TakeProfit,
            value,
        }
    }
}

/// Extracts a usable trade identifier: a non-empty string or a number
pub fn identifier(data: &Value) -> Option<String> {
    match data.get("id")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A trade the venue accepted. Only constructible from a record with an id.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderResult {
    pub id: String,
    pub raw: Value,
}

impl OrderResult {
    pub fn from_value(raw: Value) -> Option<Self> {
        let id = identifier(&raw)?;
        Some(Self { id, raw })
    }

    /// Fill price reported by the venue, when it is a positive number
    pub fn entry_price(&self) -> Option<f64> {
        self.raw
            .get("entry_price")
            .and_then(numeric)
            .filter(|p| p.is_finite() && *p > 0.0)
    }
}
