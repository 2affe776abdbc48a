use std::sync::Arc;

use log::{error, info};
use tokio::time::sleep;

use crate::domain::model::order::{OrderRequest, OrderResult};
use crate::domain::traits::FuturesApi;
use crate::domain::units::{price_above, round_half_even, usd_to_sats};

use super::config::{SmokeSettings, TakeProfitPolicy};
use super::error::SmokeError;
use super::market_data::fetch_market_price;
use super::order_manager::{place_order, set_take_profit};

/// What happened to the second order's take-profit
#[derive(Clone, Debug, PartialEq)]
pub enum TakeProfitOutcome {
    /// Sent with the order. `ideal` is what the entry price would have given;
    /// the live order keeps `requested`.
    Attached { requested: f64, entry_price: f64, ideal: f64 },
    /// Set after the fill through the update endpoint
    Updated { value: f64, entry_price: f64 },
    /// The update call failed; the trade runs without take-profit
    UpdateFailed { value: f64, entry_price: f64 },
    /// No entry price on the fill, nothing was sent
    Skipped,
}

/// Summary of a completed run
#[derive(Clone, Debug, PartialEq)]
pub struct SmokeReport {
    pub market_price: f64,
    pub margin_sats: u64,
    pub first_order_id: String,
    pub second_order_id: String,
    pub second_take_profit: TakeProfitOutcome,
    pub limit_order_id: String,
    pub limit_price: f64,
    pub limit_take_profit: f64,
}

/// Runs the three-order smoke sequence against a futures API
pub struct SmokeRunner {
    api: Arc<dyn FuturesApi>,
    settings: SmokeSettings,
}

impl SmokeRunner {
    pub fn new(api: Arc<dyn FuturesApi>, settings: SmokeSettings) -> Self {
        Self { api, settings }
    }

    pub fn settings(&self) -> &SmokeSettings {
        &self.settings
    }

    /// Price, margin, market order, pause, market order with take-profit,
    /// pause, limit order with take-profit. The first failure ends the run.
    pub async fn run(&self) -> Result<SmokeReport, SmokeError> {
        let api = self.api.as_ref();
        let settings = &self.settings;

        let market_price = fetch_market_price(api).await.map_err(|e| {
            error!("Cannot fetch market price, stopping");
            e
        })?;

        let margin_sats = usd_to_sats(settings.usd_amount, market_price);
        if margin_sats == 0 {
            error!("Invalid margin computed, stopping");
            return Err(SmokeError::InvalidMargin {
                usd_amount: settings.usd_amount,
                price: market_price,
            });
        }
        info!(
            "Margin: {} sats for ${} at price {:.2}",
            margin_sats, settings.usd_amount, market_price
        );

        info!(
            "Placing first market buy order for ${} with leverage {}",
            settings.usd_amount, settings.leverage
        );
        let first = place_order(api, &OrderRequest::market(margin_sats, settings.leverage))
            .await
            .map_err(|e| {
                error!("First order failed, stopping");
                e
            })?;

        self.pause().await;

        info!(
            "Placing second market buy order for ${} with leverage {}",
            settings.usd_amount, settings.leverage
        );
        let (second, second_take_profit) = self.second_order(market_price, margin_sats).await?;

        self.pause().await;

        let limit_price = round_half_even(market_price - settings.limit_offset_usd);
        let limit_take_profit = price_above(limit_price, settings.take_profit_pct);
        info!(
            "Placing limit buy order for ${} with leverage {}",
            settings.usd_amount, settings.leverage
        );
        let limit_request = OrderRequest::limit(margin_sats, settings.leverage, limit_price)
            .with_take_profit(Some(limit_take_profit));
        let limit = place_order(api, &limit_request).await.map_err(|e| {
            error!("Limit order failed");
            e
        })?;
        info!(
            "Limit order placed at {:.0} with take-profit {:.0}",
            limit_price, limit_take_profit
        );

        Ok(SmokeReport {
            market_price,
            margin_sats,
            first_order_id: first.id,
            second_order_id: second.id,
            second_take_profit,
            limit_order_id: limit.id,
            limit_price,
            limit_take_profit,
        })
    }

    async fn second_order(
        &self,
        market_price: f64,
        margin_sats: u64,
    ) -> Result<(OrderResult, TakeProfitOutcome), SmokeError> {
        let api = self.api.as_ref();
        let pct = self.settings.take_profit_pct;
        let request = OrderRequest::market(margin_sats, self.settings.leverage);

        let result = match self.settings.policy() {
            TakeProfitPolicy::Direct => {
                let requested = price_above(market_price, pct);
                info!(
                    "Take-profit attached at {:.0} ({}% above estimated market price {:.2})",
                    requested,
                    pct * 100.0,
                    market_price
                );
                let order = place_order(api, &request.with_take_profit(Some(requested))).await;
                order.map(|order| {
                    let entry_price = order.entry_price().unwrap_or(market_price);
                    let ideal = price_above(entry_price, pct);
                    // The live order keeps the estimate, only the gap is reported.
                    info!(
                        "Entry price: {:.2}, estimated take-profit: {:.0}, ideal take-profit: {:.0}",
                        entry_price, requested, ideal
                    );
                    (order, TakeProfitOutcome::Attached { requested, entry_price, ideal })
                })
            }
            TakeProfitPolicy::Deferred => match place_order(api, &request).await {
                Ok(order) => {
                    let outcome = match order.entry_price() {
                        Some(entry_price) => {
                            let value = price_above(entry_price, pct);
                            info!(
                                "Setting take-profit at {:.0} ({}% above entry price {:.2})",
                                value,
                                pct * 100.0,
                                entry_price
                            );
                            match set_take_profit(api, &order.id, value).await {
                                Ok(_) => TakeProfitOutcome::Updated { value, entry_price },
                                Err(_) => TakeProfitOutcome::UpdateFailed { value, entry_price },
                            }
                        }
                        None => {
                            error!("No entry price on second order, take-profit not set");
                            TakeProfitOutcome::Skipped
                        }
                    };
                    Ok((order, outcome))
                }
                Err(e) => Err(e),
            },
        };

        result.map_err(|e| {
            error!("Second order failed, stopping");
            e
        })
    }

    async fn pause(&self) {
        let delay = self.settings.request_delay();
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}
