use log::error;
use serde_json::{Map, Value};

use crate::domain::model::order::OrderResult;
use crate::domain::model::response::RawResponse;
use crate::domain::model::ticker::Ticker;

/// Normalizes LN Markets responses
pub struct LnmParser;

impl LnmParser {
    /// Turns a raw response into a JSON value.
    ///
    /// Structured input passes through untouched. Text that fails to parse
    /// is logged and becomes an empty object, so callers can always do key
    /// lookups on the result.
    pub fn parse_response(response: RawResponse) -> Value {
        match response {
            RawResponse::Structured(value) => value,
            RawResponse::Text(text) => match serde_json::from_str::<Value>(&text) {
                Ok(value) => value,
                Err(e) => {
                    error!("Failed to parse response {:?}: {}", text, e);
                    Value::Object(Map::new())
                }
            },
        }
    }

    /// Parses a ticker response
    pub fn parse_ticker(response: RawResponse) -> anyhow::Result<Ticker> {
        let data = Self::parse_response(response);
        Ticker::from_json(&data)
    }

    /// Parses a trade response, None when the venue did not assign an id
    pub fn parse_order(response: RawResponse) -> (Option<OrderResult>, Value) {
        let data = Self::parse_response(response);
        (OrderResult::from_value(data.clone()), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_passthrough() {
        let value = json!({"id": "abc", "nested": {"x": 1}});
        assert_eq!(LnmParser::parse_response(RawResponse::Structured(value.clone())), value);

        let list = json!([1, 2, 3]);
        assert_eq!(LnmParser::parse_response(list.clone().into()), list);
    }

    #[test]
    fn test_text_is_decoded() {
        let parsed = LnmParser::parse_response(r#"{"lastPrice": 50000}"#.into());
        assert_eq!(parsed["lastPrice"], json!(50000));
    }

    #[test]
    fn test_garbage_becomes_empty_object() {
        let parsed = LnmParser::parse_response("<html>502 Bad Gateway</html>".into());
        assert_eq!(parsed, json!({}));
        assert!(parsed.get("id").is_none());

        assert_eq!(LnmParser::parse_response("".into()), json!({}));
    }

    #[test]
    fn test_parse_order_without_id() {
        let (order, data) = LnmParser::parse_order(r#"{"margin": 10000, "entry_price": 50000}"#.into());
        assert!(order.is_none());
        assert_eq!(data["margin"], json!(10000));
    }

    #[test]
    fn test_parse_ticker() {
        let ticker = LnmParser::parse_ticker(r#"{"lastPrice": "50000"}"#.into()).unwrap();
        assert_eq!(ticker.last_price, 50000.0);
        assert!(LnmParser::parse_ticker("oops".into()).is_err());
    }
}
