use log::{debug, error};

use crate::domain::model::ticker::Ticker;
use crate::domain::traits::FuturesApi;
use crate::infrastructure::exchange::lnmarkets::LnmParser;

use super::error::SmokeError;

/// Fetches and parses the futures ticker
pub async fn fetch_ticker(api: &dyn FuturesApi) -> Result<Ticker, SmokeError> {
    let response = api.get_ticker().await.map_err(|e| {
        error!("Failed to fetch ticker: {:#}", e);
        SmokeError::TickerUnavailable(e)
    })?;

    let ticker = LnmParser::parse_ticker(response).map_err(|e| {
        error!("Failed to read ticker: {:#}", e);
        SmokeError::TickerUnavailable(e)
    })?;

    debug!("Ticker: {:?}", ticker);
    Ok(ticker)
}

/// Last price of the futures market, rejected unless strictly positive
pub async fn fetch_market_price(api: &dyn FuturesApi) -> Result<f64, SmokeError> {
    let ticker = fetch_ticker(api).await?;
    ticker.valid_last_price().ok_or_else(|| {
        error!("Invalid market price received: {}", ticker.last_price);
        SmokeError::InvalidPrice(ticker.last_price)
    })
}
