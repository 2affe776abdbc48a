use log::{debug, error, info};
use serde_json::Value;

use crate::domain::model::order::{identifier, OrderRequest, OrderResult, TradeUpdate};
use crate::domain::traits::FuturesApi;
use crate::infrastructure::exchange::lnmarkets::LnmParser;

use super::error::SmokeError;

/// Submits a buy order and keeps it only if the venue assigned an id
pub async fn place_order(
    api: &dyn FuturesApi,
    request: &OrderRequest,
) -> Result<OrderResult, SmokeError> {
    let kind = request.kind;
    debug!("Order parameters: {}", serde_json::to_string(request).unwrap_or_default());

    let response = api.new_trade(request).await.map_err(|e| {
        error!("Failed to place {} order: {:#}", kind.label(), e);
        SmokeError::OrderFailed { kind, cause: e }
    })?;

    match LnmParser::parse_order(response) {
        (Some(order), _) => {
            info!("{} order placed: {}", kind.label(), order.raw);
            Ok(order)
        }
        (None, data) => {
            error!("{} order rejected: {}", kind.label(), data);
            Err(SmokeError::OrderRejected { kind, response: data })
        }
    }
}

/// Sets the take-profit of a running trade through the update endpoint
pub async fn set_take_profit(
    api: &dyn FuturesApi,
    trade_id: &str,
    take_profit: f64,
) -> Result<Value, SmokeError> {
    let update = TradeUpdate::take_profit(trade_id, take_profit);
    debug!("Take-profit update parameters: {}", serde_json::to_string(&update).unwrap_or_default());

    let response = api.update_trade(&update).await.map_err(|e| {
        error!("Failed to set take-profit: {:#}", e);
        SmokeError::TakeProfitFailed(e)
    })?;

    let data = LnmParser::parse_response(response);
    if identifier(&data).is_some() {
        info!("Take-profit set: {}", data);
        Ok(data)
    } else {
        error!("Take-profit update rejected: {}", data);
        Err(SmokeError::TakeProfitRejected(data))
    }
}
