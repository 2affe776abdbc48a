use serde_json::Value;

/// A venue response as handed back by the transport.
///
/// Clients may return a body that is already decoded or the raw text;
/// `LnmParser::parse_response` turns either into a `Value`.
#[derive(Clone, Debug, PartialEq)]
pub enum RawResponse {
    Structured(Value),
    Text(String),
}

impl From<Value> for RawResponse {
    fn from(value: Value) -> Self {
        RawResponse::Structured(value)
    }
}

impl From<String> for RawResponse {
    fn from(text: String) -> Self {
        RawResponse::Text(text)
    }
}

impl From<&str> for RawResponse {
    fn from(text: &str) -> Self {
        RawResponse::Text(text.to_string())
    }
}

/// Reads a JSON number or a numeric string as f64
pub fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
