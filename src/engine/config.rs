/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Strategy and Risk Configuration
//!
//! The engine's configuration with recognized options. Grounded on the
//! builder-pattern structs in [`crate::strategies::base`]: a plain data
//! struct with a `Default` impl, plus a builder for ergonomic partial overrides.

use crate::engine::indicators::IndicatorParams;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bar aggregation period the scheduler runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Timeframe {
    /// One-minute bars.
    OneMinute,
    /// Five-minute bars.
    FiveMinutes,
    /// Fifteen-minute bars.
    FifteenMinutes,
    /// One-hour bars.
    OneHour,
}

impl Timeframe {
    /// Interval in seconds, used by the live scheduler's tick timer.
    pub fn as_seconds(self) -> u64 {
        match self {
            Timeframe::OneMinute => 60,
            Timeframe::FiveMinutes => 300,
            Timeframe::FifteenMinutes => 900,
            Timeframe::OneHour => 3600,
        }
    }
}

/// Local trading-session hours the live scheduler skips cycles outside of.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarketHours {
    /// Session open, minutes since midnight in `tz`.
    pub open_minutes: u32,
    /// Session close, minutes since midnight in `tz`.
    pub close_minutes: u32,
    /// IANA timezone name, e.g. `"America/New_York"`. Informational only —
    /// the scheduler compares against UTC-normalized minutes supplied by the
    /// caller.
    pub tz: String,
}

impl Default for MarketHours {
    fn default() -> Self {
        MarketHours {
            open_minutes: 9 * 60 + 30,
            close_minutes: 16 * 60,
            tz: "America/New_York".to_string(),
        }
    }
}

/// Per-rule exit toggles, one per exit rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExitToggles {
    /// Rule 1.
    pub profit_target: bool,
    /// Rule 2.
    pub stop_loss: bool,
    /// Rule 3.
    pub price_breach: bool,
    /// Rule 4.
    pub greeks_exit: bool,
    /// Rule 5.
    pub vol_expansion: bool,
    /// Rule 6.
    pub time_limit: bool,
    /// Rule 7 (expiration settlement) is never toggleable off.
}

impl Default for ExitToggles {
    fn default() -> Self {
        ExitToggles {
            profit_target: true,
            stop_loss: true,
            price_breach: true,
            greeks_exit: true,
            vol_expansion: true,
            time_limit: true,
        }
    }
}

/// Strategy selection, indicator, and market-filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrategyConfig {
    /// Indicator kernel parameters.
    pub indicators: IndicatorParams,
    /// RSI level above which the market is considered overbought.
    pub rsi_overbought: Decimal,
    /// RSI level below which the market is considered oversold.
    pub rsi_oversold: Decimal,
    /// Maximum number of simultaneously open positions.
    pub max_concurrent_positions: usize,
    /// Fraction of balance risked per new trade (used in Kelly-lite sizing).
    pub max_risk_per_trade: Decimal,
    /// Fraction of balance the whole portfolio may risk.
    pub max_portfolio_risk: Decimal,
    /// Hard stop: maximum realized loss in a session before new entries pause.
    pub daily_loss_limit: Decimal,
    /// Portfolio delta-dollar cap, as a fraction of balance.
    pub max_portfolio_delta: Decimal,
    /// Portfolio gamma cap.
    pub max_portfolio_gamma: Decimal,
    /// Portfolio theta-dollar cap, as a fraction of balance per day.
    pub max_portfolio_theta: Decimal,
    /// Portfolio vega-dollar cap, as a fraction of balance per 1% vol.
    pub max_portfolio_vega: Decimal,
    /// Minimum mean chain IV accepted by the volatility gate.
    pub min_iv: f64,
    /// Maximum mean chain IV accepted by the volatility gate.
    pub max_iv: f64,
    /// Maximum average bid-ask spread percentage in the liquidity gate.
    pub max_bid_ask_spread_pct: Decimal,
    /// Minimum average volume in the liquidity gate.
    pub min_volume: u64,
    /// Minimum average open interest in the liquidity gate.
    pub min_open_interest: u64,
    /// Maximum VIX accepted by the volatility gate, if VIX is supplied.
    pub vix_max: f64,
    /// Minimum realistic net credit after costs, per contract.
    pub min_net_credit_after_costs: Decimal,
    /// Candidate wing widths (in strike points) spread builders try.
    pub wing_width_candidates: Vec<Decimal>,
    /// Fraction of `maxLoss`/credit at which rule 1 (`PROFIT_TARGET`) fires,
    /// for strategies not using the general default.
    pub profit_target_fraction: Decimal,
    /// Multiple of entry credit at which rule 2 (`STOP_LOSS`) fires via the
    /// closing-debit test.
    pub stop_loss_multiple: Decimal,
    /// Maximum days held before rule 6 (`TIME_LIMIT`) fires.
    pub time_limit_days: i64,
    /// Whether the strategy selector may choose naked-call/put variants.
    pub use_naked_options: bool,
    /// Which exit rules are active.
    pub exit_toggles: ExitToggles,
    /// Scheduler cadence.
    pub timeframe: Timeframe,
    /// Session hours the live scheduler respects.
    pub market_hours: MarketHours,
    /// Minimum seconds between a position close and a new entry on the same
    /// underlying.
    pub cooldown_seconds: i64,
    /// Seed for the fill/cost simulator's RNG. Held fixed across a replay so
    /// two runs over identical inputs draw the identical slippage sequence.
    pub cost_model_seed: u64,
    /// Number of resubmission attempts after a broker rejects an entry order,
    /// before the cycle gives up and raises `EngineError::OrderFailure`.
    pub max_order_retries: u32,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            indicators: IndicatorParams::default(),
            rsi_overbought: dec!(70),
            rsi_oversold: dec!(30),
            max_concurrent_positions: 3,
            max_risk_per_trade: dec!(0.02),
            max_portfolio_risk: dec!(0.5),
            daily_loss_limit: dec!(0.05),
            max_portfolio_delta: dec!(0.02),
            max_portfolio_gamma: dec!(0.5),
            max_portfolio_theta: dec!(0.01),
            max_portfolio_vega: dec!(0.05),
            min_iv: 0.08,
            max_iv: 0.60,
            max_bid_ask_spread_pct: dec!(0.25),
            min_volume: 10,
            min_open_interest: 100,
            vix_max: 35.0,
            min_net_credit_after_costs: dec!(0.05),
            wing_width_candidates: vec![dec!(5), dec!(10), dec!(15)],
            profit_target_fraction: dec!(0.5),
            stop_loss_multiple: dec!(2.0),
            time_limit_days: 21,
            use_naked_options: false,
            exit_toggles: ExitToggles::default(),
            timeframe: Timeframe::FiveMinutes,
            market_hours: MarketHours::default(),
            cooldown_seconds: 300,
            cost_model_seed: 0,
            max_order_retries: 2,
        }
    }
}

/// Builder for [`StrategyConfig`], for partial overrides without repeating
/// every field.
#[derive(Debug, Clone, Default)]
pub struct StrategyConfigBuilder {
    config: StrategyConfig,
}

impl StrategyConfigBuilder {
    /// Starts from [`StrategyConfig::default`].
    pub fn new() -> Self {
        StrategyConfigBuilder::default()
    }

    /// Overrides the scheduler cadence.
    pub fn timeframe(mut self, timeframe: Timeframe) -> Self {
        self.config.timeframe = timeframe;
        self
    }

    /// Overrides the maximum number of concurrent open positions.
    pub fn max_concurrent_positions(mut self, n: usize) -> Self {
        self.config.max_concurrent_positions = n;
        self
    }

    /// Overrides whether naked-option variants are eligible.
    pub fn use_naked_options(mut self, enabled: bool) -> Self {
        self.config.use_naked_options = enabled;
        self
    }

    /// Overrides the daily realized loss limit.
    pub fn daily_loss_limit(mut self, limit: Decimal) -> Self {
        self.config.daily_loss_limit = limit;
        self
    }

    /// Overrides the fill/cost simulator's RNG seed.
    pub fn cost_model_seed(mut self, seed: u64) -> Self {
        self.config.cost_model_seed = seed;
        self
    }

    /// Overrides the number of order-resubmission attempts after a broker
    /// rejection.
    pub fn max_order_retries(mut self, retries: u32) -> Self {
        self.config.max_order_retries = retries;
        self
    }

    /// Consumes the builder, returning the assembled config.
    pub fn build(self) -> StrategyConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = StrategyConfig::default();
        assert_eq!(config.max_concurrent_positions, 3);
        assert!(!config.use_naked_options);
        assert_eq!(config.min_net_credit_after_costs, dec!(0.05));
    }

    #[test]
    fn builder_overrides_only_requested_fields() {
        let config = StrategyConfigBuilder::new()
            .max_concurrent_positions(5)
            .use_naked_options(true)
            .build();
        assert_eq!(config.max_concurrent_positions, 5);
        assert!(config.use_naked_options);
        assert_eq!(config.rsi_overbought, dec!(70));
    }
}
