/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! Iron-condor (short put vertical + short call vertical) construction.
//! Grounded on [`crate::strategies::iron_condor`] for the four-leg economics.

use crate::engine::chain::OptionsChain;
use crate::engine::config::StrategyConfig;
use crate::engine::costs::{MarketCondition, SpreadLeg, calculate_spread_costs, check_credit_floor};
use crate::engine::regime::MarketRegime;
use crate::engine::spreads::{Range, ScoredCandidate, SpreadDescriptor, composite_score, rank_best};
use crate::model::types::{Action, OptionStyle};
use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Short-leg delta band for both wings.
pub const SHORT_DELTA_MIN: f64 = 0.05;
/// See [`SHORT_DELTA_MIN`].
pub const SHORT_DELTA_MAX: f64 = 0.30;
/// Minimum combined net credit per contract.
pub const MIN_NET_CREDIT: Decimal = dec!(0.05);

/// Builds the best-scoring iron condor from `chain`, or `None`.
pub fn build(
    chain: &OptionsChain,
    _regime: &MarketRegime,
    _tte_years: f64,
    _rfr: f64,
    config: &StrategyConfig,
) -> Option<SpreadDescriptor> {
    let price = chain.underlying_price;

    let puts: Vec<_> = chain
        .puts()
        .into_iter()
        .filter(|p| p.strike_price < price)
        .filter(|p| p.bid > Decimal::ZERO && p.ask > Decimal::ZERO)
        .filter(|p| (SHORT_DELTA_MIN..=SHORT_DELTA_MAX).contains(&p.delta.abs()))
        .collect();
    let calls: Vec<_> = chain
        .calls()
        .into_iter()
        .filter(|c| c.strike_price > price)
        .filter(|c| c.bid > Decimal::ZERO && c.ask > Decimal::ZERO)
        .filter(|c| (SHORT_DELTA_MIN..=SHORT_DELTA_MAX).contains(&c.delta.abs()))
        .collect();

    let short_puts = puts.clone();
    let short_calls = calls.clone();

    let pairs: Vec<_> = short_puts
        .iter()
        .cartesian_product(short_calls.iter())
        .cartesian_product(config.wing_width_candidates.iter())
        .enumerate()
        .collect();

    let candidates: Vec<ScoredCandidate> = pairs
        .into_par_iter()
        .filter_map(|(index, ((sell_put, sell_call), &width))| {
            let buy_put_strike = sell_put.strike_price - width;
            let buy_call_strike = sell_call.strike_price + width;
            let buy_put = chain
                .puts()
                .into_iter()
                .find(|p| p.strike_price == buy_put_strike)?
                .clone();
            let buy_call = chain
                .calls()
                .into_iter()
                .find(|c| c.strike_price == buy_call_strike)?
                .clone();

            let legs = vec![
                SpreadLeg { side: Action::Sell, bid: sell_put.bid, ask: sell_put.ask, qty: 1 },
                SpreadLeg { side: Action::Buy, bid: buy_put.bid, ask: buy_put.ask, qty: 1 },
                SpreadLeg { side: Action::Sell, bid: sell_call.bid, ask: sell_call.ask, qty: 1 },
                SpreadLeg { side: Action::Buy, bid: buy_call.bid, ask: buy_call.ask, qty: 1 },
            ];
            // Each candidate draws from its own RNG, seeded from the config
            // seed and its position in the candidate set, so scoring stays
            // both parallelizable (no shared mutable generator across
            // threads) and reproducible across replays of the same chain.
            let mut rng = StdRng::seed_from_u64(config.cost_model_seed ^ index as u64);
            let (_, _, net_received) = calculate_spread_costs(&legs, MarketCondition::Normal, &mut rng).ok()?;
            check_credit_floor(net_received, 1, MIN_NET_CREDIT).ok()?;
            let net_credit = net_received / dec!(100);

            let max_loss = width - net_credit;
            if max_loss <= Decimal::ZERO {
                return None;
            }

            let breakeven_lo = sell_put.strike_price - net_credit;
            let breakeven_hi = sell_call.strike_price + net_credit;
            let profit_zone = Range {
                lo: sell_put.strike_price,
                hi: sell_call.strike_price,
            };

            let pop = condor_pop(price, &profit_zone, sell_put.implied_volatility, sell_call.implied_volatility);

            let credit_score = (net_credit / width).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            let risk_reward = (net_credit / max_loss).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            let zone_width_pct = ((profit_zone.hi - profit_zone.lo) / price).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            let score = composite_score(credit_score, zone_width_pct, risk_reward, pop);

            Some(ScoredCandidate {
                descriptor: SpreadDescriptor::IronCondor {
                    sell_put: (*sell_put).clone(),
                    buy_put,
                    sell_call: (*sell_call).clone(),
                    buy_call,
                    net_credit,
                    max_profit: net_credit,
                    max_loss,
                    pop,
                    profit_zone,
                    breakevens: Range { lo: breakeven_lo, hi: breakeven_hi },
                },
                score,
                pop,
                wing_width: width,
            })
        })
        .collect();

    rank_best(candidates).map(|c| c.descriptor)
}

/// Probability of profit for a condor: normalized profit-zone width, boosted
/// for low average IV (calmer market, less likely to breach the zone) and
/// penalized the closer price sits to either short strike.
fn condor_pop(price: Decimal, zone: &Range, put_iv: f64, call_iv: f64) -> f64 {
    let width = (zone.hi - zone.lo).to_f64().unwrap_or(0.0);
    let price_f = price.to_f64().unwrap_or(1.0).max(1.0);
    let normalized_width = (width / price_f).clamp(0.0, 1.0);

    let avg_iv = (put_iv + call_iv) / 2.0;
    let low_vol_bonus = if avg_iv < 0.20 { 0.05 } else { 0.0 };

    let dist_to_put = (price - zone.lo).to_f64().unwrap_or(0.0) / price_f;
    let dist_to_call = (zone.hi - price).to_f64().unwrap_or(0.0) / price_f;
    let proximity_penalty = if dist_to_put.min(dist_to_call) < 0.01 { 0.10 } else { 0.0 };

    (0.5 + normalized_width + low_vol_bonus - proximity_penalty).clamp(0.0, 1.0)
}

/// Expiration settlement: within the profit zone keeps the credit; beyond a
/// wing applies that wing's loss formula; between a short and long strike on
/// one side is a partial loss.
pub fn settle_at_expiration(
    sell_put: Decimal,
    buy_put: Decimal,
    sell_call: Decimal,
    buy_call: Decimal,
    net_credit: Decimal,
    settlement_price: Decimal,
) -> Decimal {
    if settlement_price >= sell_put && settlement_price <= sell_call {
        net_credit
    } else if settlement_price < sell_put {
        if settlement_price <= buy_put {
            -(sell_put - buy_put - net_credit)
        } else {
            net_credit - (sell_put - settlement_price)
        }
    } else if settlement_price >= buy_call {
        -(buy_call - sell_call - net_credit)
    } else {
        net_credit - (settlement_price - sell_call)
    }
}

#[allow(dead_code)]
fn assert_call_style(style: OptionStyle) -> bool {
    style == OptionStyle::Call
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
            implied_volatility: 0.18,
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
                contract(dec!(440), OptionStyle::Put, -0.20, dec!(1.50), dec!(1.60)),
                contract(dec!(435), OptionStyle::Put, -0.10, dec!(0.70), dec!(0.80)),
                contract(dec!(460), OptionStyle::Call, 0.20, dec!(1.50), dec!(1.60)),
                contract(dec!(465), OptionStyle::Call, 0.10, dec!(0.70), dec!(0.80)),
            ],
        }
    }

    fn neutral_regime() -> MarketRegime {
        MarketRegime {
            regime: Regime::Neutral,
            confidence: 65,
            signals: RegimeSignals {
                trend: dec!(50),
                volatility: Decimal::ZERO,
                momentum: Decimal::ZERO,
            },
            reasoning: vec![],
        }
    }

    #[test]
    fn builds_a_four_leg_condor_from_a_liquid_chain() {
        let chain = sample_chain();
        let config = StrategyConfig {
            wing_width_candidates: vec![dec!(5)],
            ..StrategyConfig::default()
        };
        let spread = build(&chain, &neutral_regime(), 0.003, 0.04, &config);
        assert!(spread.is_some());
        if let Some(SpreadDescriptor::IronCondor { profit_zone, .. }) = spread {
            assert_eq!(profit_zone, Range { lo: dec!(440), hi: dec!(460) });
        } else {
            panic!("expected IronCondor descriptor");
        }
    }

    #[test]
    fn settlement_inside_zone_keeps_full_credit() {
        let pnl = settle_at_expiration(dec!(440), dec!(435), dec!(460), dec!(465), dec!(1.00), dec!(450));
        assert_eq!(pnl, dec!(1.00));
    }

    #[test]
    fn settlement_beyond_call_wing_loses_wing_minus_credit() {
        let pnl = settle_at_expiration(dec!(440), dec!(435), dec!(460), dec!(465), dec!(1.00), dec!(470));
        assert_eq!(pnl, dec!(-4.00));
    }

    #[test]
    fn settlement_beyond_put_wing_loses_wing_minus_credit() {
        let pnl = settle_at_expiration(dec!(440), dec!(435), dec!(460), dec!(465), dec!(1.00), dec!(430));
        assert_eq!(pnl, dec!(-4.00));
    }
}
