use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ring::hmac;

/// Signs LN Markets v2 requests with the account's API secret
pub struct RequestSigner {
    key: hmac::Key,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
        }
    }

    /// Format: "{timestamp}{METHOD}{path}{payload}", HMAC-SHA256, base64.
    ///
    /// `path` carries the version prefix (`/v2/futures`), `payload` is the
    /// compact JSON body or the query string, empty when there is none.
    pub fn sign(&self, timestamp: i64, method: &str, path: &str, payload: &str) -> String {
        let message = format!("{timestamp}{method}{path}{payload}");
        let tag = hmac::sign(&self.key, message.as_bytes());
        BASE64.encode(tag.as_ref())
    }
}
