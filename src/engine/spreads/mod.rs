/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Spread Builders
//!
//! Construction logic grounded on [`crate::strategies::bull_put_spread`] and
//! [`crate::strategies::iron_condor`] for the economics (short/long leg
//! roles, break-even, max profit/loss formulas) — not on those files' exact
//! type signatures, which predate the `Positive`/`Decimal` migration visible
//! elsewhere in the pack. This module follows the current idiom
//! ([`crate::model::option`], [`crate::greeks::equations`]) instead.

pub mod bear_call;
pub mod bull_put;
pub mod iron_condor;
pub mod naked;

use crate::engine::chain::OptionContract;
use crate::engine::costs::{MarketCondition, SpreadLeg, calculate_spread_costs, check_credit_floor};
use crate::engine::greeks::to_f64;
use crate::error::EngineError;
use crate::greeks::utils::{big_n, d2};
use crate::model::types::Action;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The lower/upper bound of a price range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Range {
    /// Lower bound.
    pub lo: Decimal,
    /// Upper bound.
    pub hi: Decimal,
}

/// A concrete, scored options position proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum SpreadDescriptor {
    /// A single uncovered short call.
    NakedCall {
        /// The short contract.
        contract: OptionContract,
        /// Number of contracts.
        qty: u32,
    },
    /// A single uncovered short put.
    NakedPut {
        /// The short contract.
        contract: OptionContract,
        /// Number of contracts.
        qty: u32,
    },
    /// Sell a put, buy a further-OTM put as a hedge.
    BullPut {
        /// Short leg.
        sell_put: OptionContract,
        /// Long (hedge) leg.
        buy_put: OptionContract,
        /// Net credit received per contract.
        net_credit: Decimal,
        /// Maximum profit per contract (`= net_credit`).
        max_profit: Decimal,
        /// Maximum loss per contract.
        max_loss: Decimal,
        /// Breakeven underlying price at expiration.
        breakeven: Decimal,
        /// Estimated probability of profit, in `[0, 1]`.
        pop: f64,
    },
    /// Sell a call, buy a further-OTM call as a hedge.
    BearCall {
        /// Short leg.
        sell_call: OptionContract,
        /// Long (hedge) leg.
        buy_call: OptionContract,
        /// Net credit received per contract.
        net_credit: Decimal,
        /// Maximum profit per contract (`= net_credit`).
        max_profit: Decimal,
        /// Maximum loss per contract.
        max_loss: Decimal,
        /// Breakeven underlying price at expiration.
        breakeven: Decimal,
        /// Estimated probability of profit, in `[0, 1]`.
        pop: f64,
    },
    /// A bull-put and bear-call combined, profiting while price stays range-bound.
    IronCondor {
        /// Short put leg.
        sell_put: OptionContract,
        /// Long put leg (hedge).
        buy_put: OptionContract,
        /// Short call leg.
        sell_call: OptionContract,
        /// Long call leg (hedge).
        buy_call: OptionContract,
        /// Net credit received per contract.
        net_credit: Decimal,
        /// Maximum profit per contract (`= net_credit`).
        max_profit: Decimal,
        /// Maximum loss per contract (the wider of the two wings, minus credit).
        max_loss: Decimal,
        /// Estimated probability of profit, in `[0, 1]`.
        pop: f64,
        /// Underlying price range in which the position is fully profitable.
        profit_zone: Range,
        /// Lower and upper breakeven prices.
        breakevens: Range,
    },
}

/// A ranked candidate: the descriptor plus its composite score. Higher is
/// better.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// The candidate spread.
    pub descriptor: SpreadDescriptor,
    /// Composite rank score.
    pub score: f64,
    /// Probability of profit, carried alongside for tie-breaking.
    pub pop: f64,
    /// Wing width (points), carried alongside for tie-breaking; `0` for
    /// single-leg (naked) candidates.
    pub wing_width: Decimal,
}

/// Weighted composite score: credit 0.375, geometric quality 0.30,
/// risk/reward 0.20, PoP 0.125.
pub fn composite_score(credit_score: f64, geometric_quality: f64, risk_reward: f64, pop: f64) -> f64 {
    0.375 * credit_score + 0.30 * geometric_quality + 0.20 * risk_reward + 0.125 * pop
}

/// Ranks candidates by score, breaking ties by higher PoP then tighter wings,
/// and returns the top one.
pub fn rank_best(mut candidates: Vec<ScoredCandidate>) -> Option<ScoredCandidate> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.pop.partial_cmp(&a.pop).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| a.wing_width.cmp(&b.wing_width))
    });
    candidates.into_iter().next()
}

/// Prices a two-leg credit vertical (short + long) and returns
/// `(net_credit_per_contract, max_loss_per_contract)`, rejecting spreads
/// below the credit floor.
pub fn price_vertical(
    short: &OptionContract,
    long: &OptionContract,
    wing_width: Decimal,
    qty: u32,
    floor: Decimal,
    rng: &mut impl Rng,
) -> Result<(Decimal, Decimal), EngineError> {
    let legs = vec![
        SpreadLeg {
            side: Action::Sell,
            bid: short.bid,
            ask: short.ask,
            qty,
        },
        SpreadLeg {
            side: Action::Buy,
            bid: long.bid,
            ask: long.ask,
            qty,
        },
    ];
    let (_, _, net_received) = calculate_spread_costs(&legs, MarketCondition::Normal, rng)?;
    check_credit_floor(net_received, qty, floor)?;
    let net_credit = net_received / (Decimal::from(qty) * Decimal::from(100));
    let max_loss = wing_width - net_credit;
    Ok((net_credit, max_loss))
}

/// Probability of profit for a credit vertical: `N(d2)` evaluated with the
/// breakeven as the notional strike, i.e. the risk-neutral probability that
/// the underlying finishes on the profitable side of breakeven at
/// expiration. Nudged by up to ±5 points when momentum agrees or disagrees
/// with the required direction.
pub fn vertical_pop(
    underlying_price: Decimal,
    breakeven: Decimal,
    iv: f64,
    time_to_expiration: f64,
    rfr: f64,
    macd_histogram: f64,
    bullish_direction: bool,
) -> f64 {
    let s = to_f64(underlying_price);
    let k = to_f64(breakeven);
    let d2v = d2(s, k, rfr, time_to_expiration, iv.max(1e-6));
    // Probability the underlying finishes above breakeven; a bearish
    // breakeven check (price must stay below) uses the complement.
    let base = if bullish_direction { big_n(d2v) } else { 1.0 - big_n(d2v) };
    let momentum_sign = if macd_histogram > 0.0 { 1.0 } else if macd_histogram < 0.0 { -1.0 } else { 0.0 };
    let alignment = if bullish_direction { momentum_sign } else { -momentum_sign };
    (base + 0.05 * alignment).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_score_weights_sum_to_one() {
        let score = composite_score(1.0, 1.0, 1.0, 1.0);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rank_best_prefers_higher_score_then_pop_then_tighter_wing() {
        let a = ScoredCandidate {
            descriptor: SpreadDescriptor::NakedCall {
                contract: dummy_contract(),
                qty: 1,
            },
            score: 0.5,
            pop: 0.6,
            wing_width: Decimal::from(10),
        };
        let b = ScoredCandidate {
            descriptor: SpreadDescriptor::NakedCall {
                contract: dummy_contract(),
                qty: 1,
            },
            score: 0.9,
            pop: 0.4,
            wing_width: Decimal::from(5),
        };
        let best = rank_best(vec![a, b.clone()]).unwrap();
        assert_eq!(best.score, b.score);
    }

    fn dummy_contract() -> OptionContract {
        use crate::model::types::OptionStyle;
        use rust_decimal_macros::dec;
        OptionContract {
            underlying_symbol: "SPY".to_string(),
            strike_price: dec!(450),
            option_style: OptionStyle::Call,
            expiration: chrono::Utc::now(),
            bid: dec!(1.0),
            ask: dec!(1.1),
            mid: dec!(1.05),
            implied_volatility: 0.2,
            delta: 0.3,
            open_interest: 100,
            volume: 50,
        }
    }
}
