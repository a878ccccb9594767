/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Strategy Selector
//!
//! Runs the admission gates in order, maps the surviving regime to a
//! strategy family, and delegates to the matching spread builder.
//! Grounded on [`crate::strategies::utils`]'s liquidity/side-filtering idiom
//! and [`crate::strategies::base::Validable`]'s gate-as-trait-method pattern,
//! generalized here into an ordered pipeline of free functions rather than a
//! trait, since the gates are evaluated in a fixed sequence and short-circuit.

use crate::engine::chain::OptionsChain;
use crate::engine::config::StrategyConfig;
use crate::engine::regime::{MarketRegime, Regime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The strategy family chosen for a cycle, before a spread builder has
/// produced a concrete descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrategyKind {
    /// Credit put spread below the market.
    BullPutSpread,
    /// Credit call spread above the market.
    BearCallSpread,
    /// Four-leg range-bound credit spread.
    IronCondor,
    /// Single short call, no hedge.
    NakedCall,
    /// Single short put, no hedge.
    NakedPut,
}

/// Why admission stopped, and at which gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum GateOutcome {
    /// A strategy family was chosen and may proceed to a spread builder.
    Proceed {
        /// The chosen family.
        kind: StrategyKind,
    },
    /// A gate rejected the cycle; no spread builder runs.
    NoTrade {
        /// Human-readable rejection reason.
        reason: String,
    },
}

/// Gate 1: regime confidence floor.
pub const MIN_REGIME_CONFIDENCE: u8 = 40;

/// Gate 2: accepted mean-IV band.
pub const MIN_MEAN_IV: f64 = 0.08;
/// See [`MIN_MEAN_IV`].
pub const MAX_MEAN_IV: f64 = 0.60;
/// Maximum VIX accepted when VIX is supplied.
pub const MAX_VIX: f64 = 35.0;
/// Maximum allowed divergence between `VIX/100` and mean chain IV.
pub const MAX_VIX_IV_DIVERGENCE: f64 = 0.15;

/// Gate 3: near-the-money band as a fraction of price, and the minimum
/// sample size required before the liquidity gate can evaluate at all.
pub const NTM_BAND_FRACTION: f64 = 0.10;
/// See [`NTM_BAND_FRACTION`].
pub const MIN_NTM_CONTRACTS: usize = 4;
/// Maximum average bid-ask spread percentage.
pub const MAX_AVG_SPREAD_PCT: Decimal = dec!(0.25);
/// Maximum fraction of NTM contracts allowed to be effectively untradeable
/// (bid below a nickel or ask above $50).
pub const MAX_ILLIQUID_FRACTION: f64 = 0.30;
/// Minimum delta spread across the NTM set (too flat implies a degenerate
/// chain, e.g. all contracts deep OTM).
pub const MIN_NTM_DELTA_RANGE: f64 = 0.30;

/// Runs gates 1-4 and returns either the chosen [`StrategyKind`] or a
/// [`GateOutcome::NoTrade`] with the first failing gate's reason. Gate 5
/// (delegating to a spread builder) is the caller's responsibility — it needs
/// the concrete builder output, which this module doesn't construct.
pub fn run_gates(
    regime: &MarketRegime,
    chain: &OptionsChain,
    vix: Option<f64>,
    config: &StrategyConfig,
) -> GateOutcome {
    if regime.confidence < MIN_REGIME_CONFIDENCE {
        return GateOutcome::NoTrade {
            reason: format!(
                "regime confidence {} below floor {MIN_REGIME_CONFIDENCE}",
                regime.confidence
            ),
        };
    }

    if let Err(reason) = volatility_gate(chain, vix) {
        return GateOutcome::NoTrade { reason };
    }

    if let Err(reason) = liquidity_gate(chain) {
        return GateOutcome::NoTrade { reason };
    }

    match map_strategy(regime, config) {
        Some(kind) => GateOutcome::Proceed { kind },
        None => GateOutcome::NoTrade {
            reason: "no strategy mapping for regime/RSI combination".to_string(),
        },
    }
}

fn mean_iv(chain: &OptionsChain) -> Option<f64> {
    if chain.contracts.is_empty() {
        return None;
    }
    let sum: f64 = chain.contracts.iter().map(|c| c.implied_volatility).sum();
    Some(sum / chain.contracts.len() as f64)
}

fn volatility_gate(chain: &OptionsChain, vix: Option<f64>) -> Result<(), String> {
    let Some(iv) = mean_iv(chain) else {
        return Err("volatility gate: empty chain, no mean IV".to_string());
    };
    if !(MIN_MEAN_IV..=MAX_MEAN_IV).contains(&iv) {
        return Err(format!(
            "volatility gate: mean IV {iv:.3} outside [{MIN_MEAN_IV}, {MAX_MEAN_IV}]"
        ));
    }
    if let Some(vix) = vix {
        if vix > MAX_VIX {
            return Err(format!("volatility gate: VIX {vix:.1} above {MAX_VIX}"));
        }
        let divergence = (vix / 100.0 - iv).abs();
        if divergence > MAX_VIX_IV_DIVERGENCE {
            return Err(format!(
                "volatility gate: |VIX/100 - meanIV| {divergence:.3} exceeds {MAX_VIX_IV_DIVERGENCE}"
            ));
        }
    }
    Ok(())
}

fn liquidity_gate(chain: &OptionsChain) -> Result<(), String> {
    let price = chain.underlying_price;
    let band = price * Decimal::try_from(NTM_BAND_FRACTION).unwrap();
    let ntm = chain.near_the_money(band);

    if ntm.len() < MIN_NTM_CONTRACTS {
        return Err(format!(
            "liquidity gate: only {} near-the-money contracts, need >= {MIN_NTM_CONTRACTS}",
            ntm.len()
        ));
    }

    let avg_spread_pct: Decimal =
        ntm.iter().map(|c| c.spread_pct()).sum::<Decimal>() / Decimal::from(ntm.len());
    if avg_spread_pct > MAX_AVG_SPREAD_PCT {
        return Err(format!(
            "liquidity gate: avg spread {avg_spread_pct} exceeds {MAX_AVG_SPREAD_PCT}"
        ));
    }

    let illiquid = ntm
        .iter()
        .filter(|c| c.bid < dec!(0.05) || c.ask > dec!(50))
        .count();
    let illiquid_fraction = illiquid as f64 / ntm.len() as f64;
    if illiquid_fraction > MAX_ILLIQUID_FRACTION {
        return Err(format!(
            "liquidity gate: {illiquid_fraction:.2} of NTM contracts illiquid, exceeds {MAX_ILLIQUID_FRACTION}"
        ));
    }

    let has_volume_data = ntm.iter().any(|c| c.volume > 0 || c.open_interest > 0);
    if has_volume_data {
        let avg_volume = ntm.iter().map(|c| c.volume as f64).sum::<f64>() / ntm.len() as f64;
        let avg_oi = ntm.iter().map(|c| c.open_interest as f64).sum::<f64>() / ntm.len() as f64;
        if avg_volume < 10.0 || avg_oi < 100.0 {
            return Err(format!(
                "liquidity gate: avg volume {avg_volume:.1} / avg OI {avg_oi:.1} below floor"
            ));
        }
    }

    let deltas: Vec<f64> = ntm.iter().map(|c| c.delta).collect();
    let delta_range = deltas.iter().cloned().fold(f64::MIN, f64::max)
        - deltas.iter().cloned().fold(f64::MAX, f64::min);
    if delta_range < MIN_NTM_DELTA_RANGE {
        return Err(format!(
            "liquidity gate: NTM delta range {delta_range:.3} below {MIN_NTM_DELTA_RANGE}"
        ));
    }

    Ok(())
}

fn map_strategy(regime: &MarketRegime, config: &StrategyConfig) -> Option<StrategyKind> {
    let rsi = regime.signals.trend.to_f64().unwrap_or(50.0);
    let oversold = config.rsi_oversold.to_f64().unwrap_or(30.0);
    let overbought = config.rsi_overbought.to_f64().unwrap_or(70.0);

    match regime.regime {
        Regime::Bullish => Some(if config.use_naked_options {
            StrategyKind::NakedCall
        } else {
            StrategyKind::BullPutSpread
        }),
        Regime::Bearish => Some(if config.use_naked_options {
            StrategyKind::NakedPut
        } else {
            StrategyKind::BearCallSpread
        }),
        Regime::Neutral => {
            if config.use_naked_options && rsi <= oversold {
                Some(StrategyKind::NakedCall)
            } else if config.use_naked_options && rsi >= overbought {
                Some(StrategyKind::NakedPut)
            } else {
                Some(StrategyKind::IronCondor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::chain::OptionContract;
    use crate::engine::regime::RegimeSignals;
    use crate::model::types::OptionStyle;
    use chrono::Utc;

    fn regime_with(confidence: u8, kind: Regime, rsi: Decimal) -> MarketRegime {
        MarketRegime {
            regime: kind,
            confidence,
            signals: RegimeSignals {
                trend: rsi,
                volatility: Decimal::ZERO,
                momentum: Decimal::ZERO,
            },
            reasoning: vec![],
        }
    }

    fn liquid_chain() -> OptionsChain {
        let mut contracts = Vec::new();
        for i in 0..6 {
            let strike = dec!(450) + Decimal::from(i);
            contracts.push(OptionContract {
                underlying_symbol: "SPY".to_string(),
                strike_price: strike,
                option_style: if i % 2 == 0 { OptionStyle::Call } else { OptionStyle::Put },
                expiration: Utc::now(),
                bid: dec!(1.00),
                ask: dec!(1.10),
                mid: dec!(1.05),
                implied_volatility: 0.20,
                delta: if i % 2 == 0 { 0.1 + 0.1 * i as f64 } else { -0.1 - 0.1 * i as f64 },
                open_interest: 500,
                volume: 200,
            });
        }
        OptionsChain {
            underlying_symbol: "SPY".to_string(),
            underlying_price: dec!(450),
            as_of: Utc::now(),
            contracts,
        }
    }

    #[test]
    fn low_confidence_regime_rejects_immediately() {
        let regime = regime_with(20, Regime::Bullish, dec!(65));
        let outcome = run_gates(&regime, &liquid_chain(), None, &StrategyConfig::default());
        assert!(matches!(outcome, GateOutcome::NoTrade { .. }));
    }

    #[test]
    fn bullish_regime_maps_to_bull_put_spread_by_default() {
        let regime = regime_with(75, Regime::Bullish, dec!(65));
        let outcome = run_gates(&regime, &liquid_chain(), None, &StrategyConfig::default());
        assert_eq!(
            outcome,
            GateOutcome::Proceed {
                kind: StrategyKind::BullPutSpread
            }
        );
    }

    #[test]
    fn sparse_chain_fails_liquidity_gate() {
        let mut chain = liquid_chain();
        chain.contracts.truncate(2);
        let regime = regime_with(75, Regime::Bullish, dec!(65));
        let outcome = run_gates(&regime, &chain, None, &StrategyConfig::default());
        assert!(matches!(outcome, GateOutcome::NoTrade { .. }));
    }

    #[test]
    fn vix_divergence_from_chain_iv_fails_volatility_gate() {
        let regime = regime_with(75, Regime::Bullish, dec!(65));
        // mean chain IV is 0.20; VIX=2 implies VIX/100=0.02, a 0.18 divergence.
        let outcome = run_gates(&regime, &liquid_chain(), Some(2.0), &StrategyConfig::default());
        assert!(matches!(outcome, GateOutcome::NoTrade { .. }));
    }
}
