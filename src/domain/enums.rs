use serde::{Serialize, Serializer};
use anyhow::{Result, anyhow};

// LN Markets encodes sides and order types as single letters on the wire,
// so serialization is spelled out per variant instead of using rename_all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl Serialize for OrderSide {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OrderSide::Buy => serializer.serialize_str("b"),
            OrderSide::Sell => serializer.serialize_str("s"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderType {
    Market,
    Limit,
}

impl Serialize for OrderType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OrderType::Market => serializer.serialize_str("m"),
            OrderType::Limit => serializer.serialize_str("l"),
        }
    }
}

impl OrderType {
    /// Human readable label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Market => "market",
            OrderType::Limit => "limit",
        }
    }
}

/// Field the update endpoint should change on a running trade
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateKind {
    TakeProfit,
    StopLoss,
}

impl Serialize for UpdateKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            UpdateKind::TakeProfit => serializer.serialize_str("takeprofit"),
            UpdateKind::StopLoss => serializer.serialize_str("stoploss"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.lnmarkets.com",
            Network::Testnet => "https://api.testnet.lnmarkets.com",
        }
    }

    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(anyhow!("Unknown network: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_letters() {
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), "\"b\"");
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), "\"m\"");
        assert_eq!(serde_json::to_string(&OrderType::Limit).unwrap(), "\"l\"");
        assert_eq!(serde_json::to_string(&UpdateKind::TakeProfit).unwrap(), "\"takeprofit\"");
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!(Network::from_str("mainnet").unwrap(), Network::Mainnet);
        assert_eq!(Network::from_str(" TESTNET ").unwrap(), Network::Testnet);
        assert!(Network::from_str("regtest").is_err());
        assert_eq!(Network::default().url(), "https://api.lnmarkets.com");
    }
}
