/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Options Chain
//!
//! A snapshot of tradeable contracts for one underlying at one instant, plus the
//! selectors the strategy selector and spread builders read from. Field shape is
//! grounded on [`crate::chains::optiondata::OptionData`] (bid/ask/iv/greeks/volume/
//! open interest per strike), flattened to one row per side and strike rather
//! than that type's combined call+put-per-strike row.

use crate::error::EngineError;
use crate::model::types::OptionStyle;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


/// A single listed option contract at one strike, one side, one expiration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OptionContract {
    /// Underlying symbol, e.g. "SPY".
    pub underlying_symbol: String,
    /// Strike price.
    pub strike_price: Decimal,
    /// Call or put.
    pub option_style: OptionStyle,
    /// Contract expiration (0-DTE: same calendar day as the chain snapshot).
    pub expiration: DateTime<Utc>,
    /// Best bid.
    pub bid: Decimal,
    /// Best ask.
    pub ask: Decimal,
    /// Mid of `bid`/`ask`.
    pub mid: Decimal,
    /// Black-Scholes implied volatility, annualized.
    pub implied_volatility: f64,
    /// Delta, signed by the contract's own side (positive for calls, negative
    /// for puts), independent of any position taken against it.
    pub delta: f64,
    /// Open interest.
    pub open_interest: u64,
    /// Trading volume for the current session.
    pub volume: u64,
}

impl OptionContract {
    /// Quoted bid/ask spread as a fraction of `mid` — the liquidity gate's input.
    pub fn spread_pct(&self) -> Decimal {
        if self.mid.is_zero() {
            return Decimal::ONE;
        }
        (self.ask - self.bid) / self.mid
    }
}

/// A full chain snapshot: every contract available for one underlying at one
/// instant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OptionsChain {
    /// Underlying symbol.
    pub underlying_symbol: String,
    /// Underlying spot price at the time of the snapshot.
    pub underlying_price: Decimal,
    /// When this snapshot was taken/fetched.
    pub as_of: DateTime<Utc>,
    /// Every contract in the snapshot, any strike/side/expiration.
    pub contracts: Vec<OptionContract>,
}

impl OptionsChain {
    /// All call contracts.
    pub fn calls(&self) -> Vec<&OptionContract> {
        self.contracts
            .iter()
            .filter(|c| c.option_style == OptionStyle::Call)
            .collect()
    }

    /// All put contracts.
    pub fn puts(&self) -> Vec<&OptionContract> {
        self.contracts
            .iter()
            .filter(|c| c.option_style == OptionStyle::Put)
            .collect()
    }

    /// Contracts whose strike is within `±width` of the underlying price.
    pub fn near_the_money(&self, width: Decimal) -> Vec<&OptionContract> {
        self.contracts
            .iter()
            .filter(|c| (c.strike_price - self.underlying_price).abs() <= width)
            .collect()
    }

    /// The contract at an exact strike and side, if listed.
    pub fn at_strike(&self, strike: Decimal, style: OptionStyle) -> Option<&OptionContract> {
        self.contracts
            .iter()
            .find(|c| c.strike_price == strike && c.option_style == style)
    }

    /// Rejects a snapshot older than `max_age_seconds` relative to `now`. Callers
    /// derive `max_age_seconds` from the configured scheduler cadence
    /// (`StrategyConfig::timeframe`) rather than a fixed constant, so a chain
    /// snapshot is only considered stale relative to how often the cycle loop
    /// actually refreshes it.
    pub fn check_staleness(&self, now: DateTime<Utc>, max_age_seconds: i64) -> Result<(), EngineError> {
        let age = (now - self.as_of).num_seconds();
        if age > max_age_seconds {
            return Err(EngineError::DataUnavailable {
                symbol: self.underlying_symbol.clone(),
                reason: format!("chain snapshot is {age}s old, exceeds {max_age_seconds}s"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn contract(strike: Decimal, style: OptionStyle) -> OptionContract {
        OptionContract {
            underlying_symbol: "SPY".to_string(),
            strike_price: strike,
            option_style: style,
            expiration: DateTime::from_timestamp(0, 0).unwrap(),
            bid: dec!(1.00),
            ask: dec!(1.10),
            mid: dec!(1.05),
            implied_volatility: 0.18,
            delta: 0.3,
            open_interest: 500,
            volume: 200,
        }
    }

    fn chain_at(as_of: DateTime<Utc>) -> OptionsChain {
        OptionsChain {
            underlying_symbol: "SPY".to_string(),
            underlying_price: dec!(450),
            as_of,
            contracts: vec![
                contract(dec!(445), OptionStyle::Put),
                contract(dec!(450), OptionStyle::Put),
                contract(dec!(450), OptionStyle::Call),
                contract(dec!(460), OptionStyle::Call),
            ],
        }
    }

    #[test]
    fn calls_and_puts_partition_the_chain() {
        let chain = chain_at(Utc::now());
        assert_eq!(chain.calls().len(), 2);
        assert_eq!(chain.puts().len(), 2);
    }

    #[test]
    fn near_the_money_filters_by_distance() {
        let chain = chain_at(Utc::now());
        let near = chain.near_the_money(dec!(5));
        assert_eq!(near.len(), 3);
    }

    #[test]
    fn at_strike_finds_exact_match_or_none() {
        let chain = chain_at(Utc::now());
        assert!(chain.at_strike(dec!(450), OptionStyle::Call).is_some());
        assert!(chain.at_strike(dec!(451), OptionStyle::Call).is_none());
    }

    #[test]
    fn staleness_check_rejects_old_snapshot() {
        let chain = chain_at(Utc::now() - chrono::Duration::seconds(60));
        assert!(chain.check_staleness(Utc::now(), 15).is_err());
    }

    #[test]
    fn staleness_check_accepts_fresh_snapshot() {
        let chain = chain_at(Utc::now());
        assert!(chain.check_staleness(Utc::now(), 15).is_ok());
    }

    #[test]
    fn staleness_check_uses_the_given_max_age_not_a_fixed_one() {
        let chain = chain_at(Utc::now() - chrono::Duration::seconds(60));
        assert!(chain.check_staleness(Utc::now(), 90).is_ok());
    }

    #[test]
    fn spread_pct_handles_zero_mid() {
        let mut c = contract(dec!(450), OptionStyle::Call);
        c.mid = Decimal::ZERO;
        assert_eq!(c.spread_pct(), Decimal::ONE);
    }
}
