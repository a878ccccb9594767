/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Broker / Data Adapter
//!
//! The async trait the engine consumes and the caller implements. Grounded
//! on the `async` feature dependency set (`tokio`, `async-trait`, `futures`)
//! already declared in Cargo.toml but not previously wired to any `async fn`
//! in `src`; this is the first real consumer.
//! [`ReplayBrokerAdapter`] is the in-memory adapter the replay scheduler
//! drives directly; live callers provide their own implementation.

use crate::engine::bar::Bar;
use crate::engine::chain::OptionsChain;
use crate::engine::spreads::SpreadDescriptor;
use crate::error::EngineError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Mutex as AsyncMutex;
use tokio::time::Duration;

/// Bar aggregation granularity requested from [`BrokerAdapter::get_bars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTimeframe {
    /// One-minute bars.
    OneMinute,
    /// Five-minute bars.
    FiveMinutes,
    /// Fifteen-minute bars.
    FifteenMinutes,
    /// One-hour bars.
    OneHour,
    /// Daily bars.
    OneDay,
}

/// Snapshot of brokerage account state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSnapshot {
    /// Total portfolio value (cash + positions marked to market).
    pub portfolio_value: Decimal,
    /// Buying power available for new entries.
    pub buying_power: Decimal,
    /// Cash balance.
    pub cash: Decimal,
    /// Total equity.
    pub equity: Decimal,
    /// Unrealized P&L across open positions.
    pub unrealized_pnl: Decimal,
    /// Realized P&L for the current session.
    pub realized_pnl: Decimal,
}

/// Result of submitting or closing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    /// Broker-assigned order identifiers, one per leg.
    pub order_ids: Vec<String>,
    /// Broker-reported status string, e.g. `"filled"`, `"rejected"`.
    pub status: String,
}

/// The engine's sole I/O boundary. Implementors own authentication, rate
/// limiting beyond [`RateLimiter`], and retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrokerAdapter: Send + Sync {
    /// Fetches historical bars for `symbol` between `start` and `end`.
    async fn get_bars(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        timeframe: BarTimeframe,
    ) -> Result<Vec<Bar>, EngineError>;

    /// Fetches the current options chain for `symbol`, optionally as of a
    /// specific timestamp (replay mode).
    async fn get_options_chain(
        &self,
        symbol: &str,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<OptionsChain, EngineError>;

    /// Fetches the current spot price for `symbol`.
    async fn get_current_price(&self, symbol: &str) -> Result<Decimal, EngineError>;

    /// Fetches the current account snapshot.
    async fn get_account(&self) -> Result<AccountSnapshot, EngineError>;

    /// Submits a multi-leg spread order. Live adapters only — replay
    /// adapters may implement this as a no-op that always succeeds.
    async fn submit_spread_order(&self, spread: &SpreadDescriptor, qty: u32) -> Result<OrderResult, EngineError>;

    /// Closes an existing position by id.
    async fn close_position(&self, position_id: &str) -> Result<OrderResult, EngineError>;

    /// Checks connectivity/authentication without side effects.
    async fn test_connection(&self) -> Result<bool, EngineError>;
}

/// An in-memory adapter over pre-loaded bars and chain snapshots, for
/// historical replay. Bars are served strictly in order; chain snapshots are
/// served by nearest-preceding timestamp.
pub struct ReplayBrokerAdapter {
    bars: Mutex<VecDeque<Bar>>,
    chains: Vec<OptionsChain>,
    account: Mutex<AccountSnapshot>,
}

impl ReplayBrokerAdapter {
    /// Builds a replay adapter from a pre-loaded bar history and chain
    /// snapshots, seeded with `starting_cash`.
    pub fn new(bars: Vec<Bar>, chains: Vec<OptionsChain>, starting_cash: Decimal) -> Self {
        ReplayBrokerAdapter {
            bars: Mutex::new(bars.into_iter().collect()),
            chains,
            account: Mutex::new(AccountSnapshot {
                portfolio_value: starting_cash,
                buying_power: starting_cash,
                cash: starting_cash,
                equity: starting_cash,
                unrealized_pnl: Decimal::ZERO,
                realized_pnl: Decimal::ZERO,
            }),
        }
    }
}

#[async_trait]
impl BrokerAdapter for ReplayBrokerAdapter {
    async fn get_bars(
        &self,
        _symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        _timeframe: BarTimeframe,
    ) -> Result<Vec<Bar>, EngineError> {
        let bars = self.bars.lock().expect("replay bar queue lock poisoned");
        let slice: Vec<Bar> = bars
            .iter()
            .filter(|b| b.timestamp >= start && b.timestamp <= end)
            .copied()
            .collect();
        Ok(slice)
    }

    async fn get_options_chain(
        &self,
        symbol: &str,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<OptionsChain, EngineError> {
        let target = as_of.unwrap_or_else(Utc::now);
        self.chains
            .iter()
            .filter(|c| c.as_of <= target)
            .max_by_key(|c| c.as_of)
            .cloned()
            .ok_or_else(|| EngineError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "no chain snapshot at or before the requested timestamp".to_string(),
            })
    }

    async fn get_current_price(&self, symbol: &str) -> Result<Decimal, EngineError> {
        let bars = self.bars.lock().expect("replay bar queue lock poisoned");
        bars.back().map(|b| b.close).ok_or_else(|| EngineError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: "no bars loaded".to_string(),
        })
    }

    async fn get_account(&self) -> Result<AccountSnapshot, EngineError> {
        Ok(*self.account.lock().expect("replay account lock poisoned"))
    }

    async fn submit_spread_order(&self, _spread: &SpreadDescriptor, _qty: u32) -> Result<OrderResult, EngineError> {
        Ok(OrderResult {
            order_ids: vec![uuid::Uuid::new_v4().to_string()],
            status: "filled".to_string(),
        })
    }

    async fn close_position(&self, _position_id: &str) -> Result<OrderResult, EngineError> {
        Ok(OrderResult {
            order_ids: vec![uuid::Uuid::new_v4().to_string()],
            status: "filled".to_string(),
        })
    }

    async fn test_connection(&self) -> Result<bool, EngineError> {
        Ok(true)
    }
}

/// Token-bucket rate limiter, owned by the adapter (default: 200 req/min).
pub struct RateLimiter {
    capacity: u32,
    tokens: AsyncMutex<u32>,
    refill_interval: Duration,
}

impl RateLimiter {
    /// Builds a limiter allowing `requests_per_minute` requests, refilling
    /// continuously.
    pub fn new(requests_per_minute: u32) -> Self {
        RateLimiter {
            capacity: requests_per_minute,
            tokens: AsyncMutex::new(requests_per_minute),
            refill_interval: Duration::from_secs(60) / requests_per_minute.max(1),
        }
    }

    /// Blocks until a token is available, then consumes it.
    pub async fn acquire(&self) {
        loop {
            {
                let mut tokens = self.tokens.lock().await;
                if *tokens > 0 {
                    *tokens -= 1;
                    return;
                }
            }
            tokio::time::sleep(self.refill_interval).await;
            let mut tokens = self.tokens.lock().await;
            *tokens = (*tokens + 1).min(self.capacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bar_at(secs: i64, close: Decimal) -> Bar {
        Bar::new(
            DateTime::from_timestamp(secs, 0).unwrap(),
            close,
            close + dec!(1),
            close - dec!(1),
            close,
            1_000,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn replay_adapter_serves_bars_in_range() {
        let bars = vec![bar_at(0, dec!(450)), bar_at(60, dec!(451)), bar_at(120, dec!(452))];
        let adapter = ReplayBrokerAdapter::new(bars, vec![], dec!(10000));
        let slice = adapter
            .get_bars(
                "SPY",
                DateTime::from_timestamp(0, 0).unwrap(),
                DateTime::from_timestamp(60, 0).unwrap(),
                BarTimeframe::OneMinute,
            )
            .await
            .unwrap();
        assert_eq!(slice.len(), 2);
    }

    #[tokio::test]
    async fn replay_adapter_current_price_is_last_bar_close() {
        let bars = vec![bar_at(0, dec!(450)), bar_at(60, dec!(451))];
        let adapter = ReplayBrokerAdapter::new(bars, vec![], dec!(10000));
        let price = adapter.get_current_price("SPY").await.unwrap();
        assert_eq!(price, dec!(451));
    }

    #[tokio::test]
    async fn replay_adapter_rejects_price_with_no_bars() {
        let adapter = ReplayBrokerAdapter::new(vec![], vec![], dec!(10000));
        assert!(adapter.get_current_price("SPY").await.is_err());
    }

    #[tokio::test]
    async fn rate_limiter_allows_up_to_capacity_without_blocking() {
        let limiter = RateLimiter::new(5);
        for _ in 0..5 {
            limiter.acquire().await;
        }
    }
}
