use anyhow::Result;
use async_trait::async_trait;

use crate::domain::model::order::{OrderRequest, TradeUpdate};
use crate::domain::model::response::RawResponse;

/// The three futures endpoints the smoke run talks to.
#[async_trait]
pub trait FuturesApi: Send + Sync {
    async fn get_ticker(&self) -> Result<RawResponse>;
    async fn new_trade(&self, params: &OrderRequest) -> Result<RawResponse>;
    async fn update_trade(&self, params: &TradeUpdate) -> Result<RawResponse>;
}
