/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! Single-leg (naked short call / naked short put) construction, a
//! higher-variance alternative to a defined-risk vertical, enabled only when
//! `useNakedOptions` is set.

use crate::engine::chain::OptionsChain;
use crate::engine::config::StrategyConfig;
use crate::engine::costs::{MarketCondition, simulate_fill};
use crate::engine::spreads::{ScoredCandidate, SpreadDescriptor, composite_score, rank_best};
use crate::greeks::utils::big_n;
use crate::model::types::Action;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Delta band for the naked short leg — narrower than a vertical's short leg
/// since there is no hedge to cap tail risk.
pub const SHORT_DELTA_MIN: f64 = 0.05;
/// See [`SHORT_DELTA_MIN`].
pub const SHORT_DELTA_MAX: f64 = 0.30;
/// Minimum credit per contract.
pub const MIN_PREMIUM: Decimal = dec!(0.05);

/// Builds the best-scoring naked call from `chain`, or `None`.
pub fn build_call(chain: &OptionsChain, config: &StrategyConfig) -> Option<SpreadDescriptor> {
    build_side(chain, true, config)
}

/// Builds the best-scoring naked put from `chain`, or `None`.
pub fn build_put(chain: &OptionsChain, config: &StrategyConfig) -> Option<SpreadDescriptor> {
    build_side(chain, false, config)
}

fn build_side(chain: &OptionsChain, is_call: bool, config: &StrategyConfig) -> Option<SpreadDescriptor> {
    let contracts: Vec<_> = if is_call { chain.calls() } else { chain.puts() };
    let price = chain.underlying_price;

    let candidates: Vec<ScoredCandidate> = contracts
        .into_iter()
        .filter(|c| c.bid > Decimal::ZERO && c.ask > Decimal::ZERO)
        .filter(|c| (SHORT_DELTA_MIN..=SHORT_DELTA_MAX).contains(&c.delta.abs()))
        .enumerate()
        .filter_map(|(index, c)| {
            let mut rng = StdRng::seed_from_u64(config.cost_model_seed ^ index as u64);
            let fill = simulate_fill(Action::Sell, c.bid, c.ask, 1, MarketCondition::Normal, &mut rng).ok()?;
            if fill.executed_price < MIN_PREMIUM {
                return None;
            }
            let pop = 1.0 - big_n(c.delta.abs() * 2.5).min(1.0).max(0.0);
            let distance_pct = ((c.strike_price - price).abs() / price).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            let credit_score = (fill.executed_price / c.strike_price).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            // Unbounded downside: risk/reward is scored purely on premium collected
            // per unit of delta exposure, not a max-loss ratio.
            let risk_reward = (1.0 - c.delta.abs()).clamp(0.0, 1.0);
            let score = composite_score(credit_score, distance_pct, risk_reward, pop);

            let descriptor = if is_call {
                SpreadDescriptor::NakedCall { contract: c.clone(), qty: 1 }
            } else {
                SpreadDescriptor::NakedPut { contract: c.clone(), qty: 1 }
            };

            Some(ScoredCandidate {
                descriptor,
                score,
                pop,
                wing_width: Decimal::ZERO,
            })
        })
        .collect();

    rank_best(candidates).map(|c| c.descriptor)
}

/// Expiration settlement for a naked short: collect the premium if the
/// contract finishes OTM, otherwise lose the full intrinsic value.
pub fn settle_at_expiration(strike: Decimal, premium_received: Decimal, settlement_price: Decimal, is_call: bool) -> Decimal {
    let intrinsic = if is_call {
        (settlement_price - strike).max(Decimal::ZERO)
    } else {
        (strike - settlement_price).max(Decimal::ZERO)
    };
    premium_received - intrinsic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::chain::OptionContract;
    use crate::model::types::OptionStyle;
    use chrono::Utc;

    fn contract(strike: Decimal, style: OptionStyle, delta: f64) -> OptionContract {
        OptionContract {
            underlying_symbol: "SPY".to_string(),
            strike_price: strike,
            option_style: style,
            expiration: Utc::now(),
            bid: dec!(1.00),
            ask: dec!(1.10),
            mid: dec!(1.05),
            implied_volatility: 0.20,
            delta,
            open_interest: 500,
            volume: 200,
        }
    }

    fn sample_chain() -> OptionsChain {
        OptionsChain {
            underlying_symbol: "SPY".to_string(),
            underlying_price: dec!(450),
            as_of: Utc::now(),
            contracts: vec![
                contract(dec!(460), OptionStyle::Call, 0.20),
                contract(dec!(440), OptionStyle::Put, -0.20),
            ],
        }
    }

    #[test]
    fn builds_naked_call() {
        let chain = sample_chain();
        let spread = build_call(&chain, &StrategyConfig::default());
        assert!(matches!(spread, Some(SpreadDescriptor::NakedCall { .. })));
    }

    #[test]
    fn builds_naked_put() {
        let chain = sample_chain();
        let spread = build_put(&chain, &StrategyConfig::default());
        assert!(matches!(spread, Some(SpreadDescriptor::NakedPut { .. })));
    }

    #[test]
    fn settlement_otm_keeps_full_premium() {
        let pnl = settle_at_expiration(dec!(460), dec!(1.00), dec!(450), true);
        assert_eq!(pnl, dec!(1.00));
    }

    #[test]
    fn settlement_itm_loses_intrinsic_minus_premium() {
        let pnl = settle_at_expiration(dec!(460), dec!(1.00), dec!(470), true);
        assert_eq!(pnl, dec!(-9.00));
    }
}
