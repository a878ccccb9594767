/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Regime Detector
//!
//! A small, deterministic rule engine over [`crate::engine::indicators`]
//! output. Grounded on the "classification function that accumulates a
//! `reasoning` trail" idiom seen around `risk::model`'s category assignment
//! sites, generalized into its own typed output here.

use crate::engine::bar::Bar;
use crate::engine::indicators::{self, IndicatorParams};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bars required before a regime can be anything other than a low-confidence
/// `NEUTRAL`.
pub const MIN_BARS_FOR_CONFIDENT_REGIME: usize = 50;

/// Directional classification of the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Regime {
    /// RSI and trend both point up.
    Bullish,
    /// RSI and trend both point down.
    Bearish,
    /// Neither condition holds, or there isn't enough history to tell.
    Neutral,
}

/// Sub-signals that fed the classification, retained for observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegimeSignals {
    /// Latest RSI reading.
    pub trend: Decimal,
    /// Realized volatility proxy: population stddev of closes over the
    /// regime window.
    pub volatility: Decimal,
    /// MACD histogram, as a momentum proxy.
    pub momentum: Decimal,
}

/// A classified market regime with its supporting signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarketRegime {
    /// The classified direction.
    pub regime: Regime,
    /// Confidence in `[0, 100]`.
    pub confidence: u8,
    /// The indicator/trend signals the classification was derived from.
    pub signals: RegimeSignals,
    /// Human-readable trail of why this regime was chosen.
    pub reasoning: Vec<String>,
}

/// Classifies the market from a bar history:
/// `RSI > 60 ∧ close > SMA20 ⇒ BULLISH(75)`; `RSI < 40 ∧ close < SMA20 ⇒
/// BEARISH(75)`; else `NEUTRAL(65)`. Fewer than
/// [`MIN_BARS_FOR_CONFIDENT_REGIME`] bars yields `NEUTRAL(30)`.
pub fn classify(bars: &[Bar], params: &IndicatorParams) -> MarketRegime {
    if bars.len() < MIN_BARS_FOR_CONFIDENT_REGIME {
        return MarketRegime {
            regime: Regime::Neutral,
            confidence: 30,
            signals: RegimeSignals {
                trend: Decimal::ZERO,
                volatility: Decimal::ZERO,
                momentum: Decimal::ZERO,
            },
            reasoning: vec!["insufficient data".to_string()],
        };
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close.to_f64().unwrap_or(0.0)).collect();
    let sma20 = closes[closes.len() - 20..].iter().sum::<f64>() / 20.0;
    let last_close = closes[closes.len() - 1];

    let ind = match indicators::compute(bars, params) {
        Ok(ind) => ind,
        Err(err) => {
            return MarketRegime {
                regime: Regime::Neutral,
                confidence: 30,
                signals: RegimeSignals {
                    trend: Decimal::ZERO,
                    volatility: Decimal::ZERO,
                    momentum: Decimal::ZERO,
                },
                reasoning: vec![err.to_string()],
            };
        }
    };

    let variance = closes[closes.len() - 20..]
        .iter()
        .map(|c| (c - sma20).powi(2))
        .sum::<f64>()
        / 20.0;
    let volatility = Decimal::from_f64_retain(variance.sqrt()).unwrap_or(Decimal::ZERO);

    let rsi = ind.rsi.to_f64().unwrap_or(0.0);
    let signals = RegimeSignals {
        trend: ind.rsi,
        volatility,
        momentum: ind.macd_histogram,
    };

    if rsi > 60.0 && last_close > sma20 {
        return MarketRegime {
            regime: Regime::Bullish,
            confidence: 75,
            signals,
            reasoning: vec![format!(
                "rsi {rsi:.1} > 60 and close {last_close:.2} > sma20 {sma20:.2}"
            )],
        };
    }
    if rsi < 40.0 && last_close < sma20 {
        return MarketRegime {
            regime: Regime::Bearish,
            confidence: 75,
            signals,
            reasoning: vec![format!(
                "rsi {rsi:.1} < 40 and close {last_close:.2} < sma20 {sma20:.2}"
            )],
        };
    }
    MarketRegime {
        regime: Regime::Neutral,
        confidence: 65,
        signals,
        reasoning: vec!["neither bullish nor bearish threshold met".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn make_bars(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let close = Decimal::from_f64_retain(c).unwrap();
                Bar::new(
                    DateTime::<Utc>::from_timestamp(i as i64 * 60, 0).unwrap(),
                    close,
                    close + dec!(0.5),
                    close - dec!(0.5),
                    close,
                    10_000,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn sparse_history_is_neutral_low_confidence() {
        let bars = make_bars(&[450.0; 10]);
        let regime = classify(&bars, &IndicatorParams::default());
        assert_eq!(regime.regime, Regime::Neutral);
        assert_eq!(regime.confidence, 30);
    }

    #[test]
    fn strong_uptrend_is_bullish() {
        let closes: Vec<f64> = (0..80).map(|i| 400.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let regime = classify(&bars, &IndicatorParams::default());
        assert_eq!(regime.regime, Regime::Bullish);
        assert_eq!(regime.confidence, 75);
    }

    #[test]
    fn strong_downtrend_is_bearish() {
        let closes: Vec<f64> = (0..80).map(|i| 500.0 - i as f64).collect();
        let bars = make_bars(&closes);
        let regime = classify(&bars, &IndicatorParams::default());
        assert_eq!(regime.regime, Regime::Bearish);
        assert_eq!(regime.confidence, 75);
    }

    #[test]
    fn flat_market_is_neutral() {
        let bars = make_bars(&vec![450.0; 80]);
        let regime = classify(&bars, &IndicatorParams::default());
        assert_eq!(regime.regime, Regime::Neutral);
        assert_eq!(regime.confidence, 65);
    }
}
