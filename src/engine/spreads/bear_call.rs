/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! Bear-call (short call vertical) construction. Mirrors
//! [`crate::engine::spreads::bull_put`] with the OTM direction and
//! settlement inequalities flipped.

use crate::engine::chain::OptionsChain;
use crate::engine::config::StrategyConfig;
use crate::engine::regime::MarketRegime;
use crate::engine::spreads::{ScoredCandidate, SpreadDescriptor, composite_score, price_vertical, rank_best, vertical_pop};
use crate::model::types::OptionStyle;
use itertools::Itertools;
use rand::SeedableRng;
use rayon::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Short-leg delta band.
pub const SHORT_DELTA_MIN: f64 = 0.05;
/// See [`SHORT_DELTA_MIN`].
pub const SHORT_DELTA_MAX: f64 = 0.50;
/// Minimum net credit per contract.
pub const MIN_NET_CREDIT: Decimal = dec!(0.05);

/// Builds the best-scoring bear-call spread from `chain`, or `None`.
pub fn build(
    chain: &OptionsChain,
    _regime: &MarketRegime,
    tte_years: f64,
    rfr: f64,
    config: &StrategyConfig,
) -> Option<SpreadDescriptor> {
    let price = chain.underlying_price;
    let calls: Vec<_> = chain
        .calls()
        .into_iter()
        .filter(|c| c.strike_price > price)
        .filter(|c| c.bid > Decimal::ZERO && c.ask > Decimal::ZERO)
        .collect();

    let shorts: Vec<_> = calls
        .iter()
        .filter(|c| (SHORT_DELTA_MIN..=SHORT_DELTA_MAX).contains(&c.delta.abs()))
        .collect();

    let pairs: Vec<_> = shorts
        .iter()
        .cartesian_product(config.wing_width_candidates.iter())
        .enumerate()
        .collect();

    let candidates: Vec<ScoredCandidate> = pairs
        .into_par_iter()
        .filter_map(|(index, (short, &width))| {
            let long_strike = short.strike_price + width;
            let long = calls.iter().find(|c| c.strike_price == long_strike)?;
            if long.delta.abs() >= short.delta.abs() {
                return None;
            }

            let mut rng = rand::rngs::StdRng::seed_from_u64(config.cost_model_seed ^ index as u64);
            let (net_credit, max_loss) =
                price_vertical(short, long, width, 1, MIN_NET_CREDIT, &mut rng).ok()?;
            if max_loss <= Decimal::ZERO {
                return None;
            }
            let breakeven = short.strike_price + net_credit;
            let pop = vertical_pop(
                price,
                breakeven,
                short.implied_volatility,
                tte_years,
                rfr,
                0.0,
                false,
            );

            let credit_score = (net_credit / width).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            let risk_reward = (net_credit / max_loss).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            let distance_from_money = ((short.strike_price - price) / price)
                .to_f64()
                .unwrap_or(0.0)
                .clamp(0.0, 1.0);
            let score = composite_score(credit_score, distance_from_money, risk_reward, pop);

            Some(ScoredCandidate {
                descriptor: SpreadDescriptor::BearCall {
                    sell_call: (*short).clone(),
                    buy_call: long.clone(),
                    net_credit,
                    max_profit: net_credit,
                    max_loss,
                    breakeven,
                    pop,
                },
                score,
                pop,
                wing_width: width,
            })
        })
        .collect();

    rank_best(candidates).map(|c| c.descriptor)
}

/// Expiration settlement, mirroring the bull-put's shape: keep the full
/// credit below the short strike, lose
/// `longCall - shortCall - credit` at or above the long strike, partial loss
/// in between.
pub fn settle_at_expiration(
    sell_call_strike: Decimal,
    buy_call_strike: Decimal,
    net_credit: Decimal,
    settlement_price: Decimal,
) -> Decimal {
    if settlement_price <= sell_call_strike {
        net_credit
    } else if settlement_price >= buy_call_strike {
        -(buy_call_strike - sell_call_strike - net_credit)
    } else {
        net_credit - (settlement_price - sell_call_strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::chain::OptionContract;
    use crate::engine::regime::{Regime, RegimeSignals};
    use chrono::Utc;

    fn contract(strike: Decimal, style: OptionStyle, delta: f64, bid: Decimal, ask: Decimal) -> OptionContract {
        OptionContract {
            underlying_symbol: "SPY".to_string(),
            strike_price: strike,
            option_style: style,
            expiration: Utc::now(),
            bid,
            ask,
            mid: (bid + ask) / dec!(2),
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
                contract(dec!(460), OptionStyle::Call, 0.20, dec!(1.50), dec!(1.60)),
                contract(dec!(465), OptionStyle::Call, 0.10, dec!(0.70), dec!(0.80)),
                contract(dec!(470), OptionStyle::Call, 0.05, dec!(0.30), dec!(0.40)),
            ],
        }
    }

    fn bearish_regime() -> MarketRegime {
        MarketRegime {
            regime: Regime::Bearish,
            confidence: 75,
            signals: RegimeSignals {
                trend: dec!(30),
                volatility: Decimal::ZERO,
                momentum: Decimal::ZERO,
            },
            reasoning: vec![],
        }
    }

    #[test]
    fn builds_a_credit_spread_from_a_liquid_chain() {
        let chain = sample_chain();
        let config = StrategyConfig {
            wing_width_candidates: vec![dec!(5)],
            ..StrategyConfig::default()
        };
        let spread = build(&chain, &bearish_regime(), 0.003, 0.04, &config);
        assert!(spread.is_some());
    }

    #[test]
    fn settlement_below_short_strike_keeps_full_credit() {
        let pnl = settle_at_expiration(dec!(460), dec!(465), dec!(1.00), dec!(455));
        assert_eq!(pnl, dec!(1.00));
    }

    #[test]
    fn settlement_above_long_strike_loses_wing_minus_credit() {
        let pnl = settle_at_expiration(dec!(460), dec!(465), dec!(1.00), dec!(470));
        assert_eq!(pnl, dec!(-4.00));
    }

    #[test]
    fn settlement_between_strikes_is_partial() {
        let pnl = settle_at_expiration(dec!(460), dec!(465), dec!(1.00), dec!(462));
        assert_eq!(pnl, dec!(-1.00));
    }
}
