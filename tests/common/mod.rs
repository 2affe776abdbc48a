//! Shared fixtures for the integration tests
#![allow(dead_code)]

use lnm_smoke::{LnMarketsRest, LnmCredentials, SmokeSettings};
use wiremock::MockServer;


pub const TEST_SECRET: &str = "test-secret";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> LnmCredentials {
    LnmCredentials {
        key: "test-key".to_string(),
        secret: TEST_SECRET.to_string(),
        passphrase: "test-passphrase".to_string(),
    }
}

pub fn client_for(server: &MockServer) -> LnMarketsRest {
    LnMarketsRest::with_base_url(test_credentials(), &server.uri()).expect("client should build")
}

/// Default settings without the pause between orders

pub fn fast_settings(direct_take_profit: bool) -> SmokeSettings {
    SmokeSettings {
        request_delay_secs: 0.0,
        direct_take_profit,
        ..Default::default()
    }
}
