use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::{Client, Method};
use url::Url;

use crate::domain::constants::*;
use crate::domain::enums::Network;
use crate::domain::model::order::{OrderRequest, TradeUpdate};
use crate::domain::model::response::RawResponse;
use crate::domain::traits::FuturesApi;

use super::error::{LnmError, Result};
use super::signature::RequestSigner;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct LnmCredentials {
    pub key: String,
    pub secret: String,
    pub passphrase: String,
}

impl std::fmt::Debug for LnmCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LnmCredentials")
            .field("key", &self.key)
            .field("secret", &"***")
            .field("passphrase", &"***")
            .finish()
    }
}

/// Minimal LN Markets v2 REST client covering the futures endpoints
#[derive(Debug)]
pub struct LnMarketsRest {
    http: Client,
    base_url: Url,
    credentials: LnmCredentials,
    signer: RequestSigner,
}

impl LnMarketsRest {
    pub fn new(credentials: LnmCredentials, network: Network) -> Result<Self> {
        Self::with_base_url(credentials, network.url())
    }

    /// Point the client at any host, used for testnets and mock servers
    pub fn with_base_url(credentials: LnmCredentials, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            signer: RequestSigner::new(&credentials.secret),
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Versioned path, as used both in the URL and in the signature
    fn versioned_path(endpoint: &str) -> String {
        format!("/{}{}", API_VERSION, endpoint)
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        authenticated: bool,
    ) -> Result<RawResponse> {
        let path = Self::versioned_path(endpoint);
        let url = self.base_url.join(&path)?;
        let mut request = self.http.request(method.clone(), url);

        if authenticated {
            let timestamp = Utc::now().timestamp_millis();
            let payload = body.as_deref().unwrap_or("");
            let signature = self.signer.sign(timestamp, method.as_str(), &path, payload);
            request = request
                .header("LNM-ACCESS-KEY", &self.credentials.key)
                .header("LNM-ACCESS-PASSPHRASE", &self.credentials.passphrase)
                .header("LNM-ACCESS-TIMESTAMP", timestamp.to_string())
                .header("LNM-ACCESS-SIGNATURE", signature);
        }

        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        debug!("{} {}", method, path);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("{} {} -> {}", method, path, status);

        if !status.is_success() {
            return Err(LnmError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(RawResponse::Text(text))
    }
}

#[async_trait]
impl FuturesApi for LnMarketsRest {
    async fn get_ticker(&self) -> anyhow::Result<RawResponse> {
        Ok(self.send(Method::GET, PATH_FUTURES_TICKER, None, false).await?)
    }

    async fn new_trade(&self, params: &OrderRequest) -> anyhow::Result<RawResponse> {
        let body = serde_json::to_string(params).map_err(LnmError::from)?;
        Ok(self.send(Method::POST, PATH_FUTURES, Some(body), true).await?)
    }

    async fn update_trade(&self, params: &TradeUpdate) -> anyhow::Result<RawResponse> {
        let body = serde_json::to_string(params).map_err(LnmError::from)?;
        Ok(self.send(Method::PUT, PATH_FUTURES, Some(body), true).await?)
    }
}
