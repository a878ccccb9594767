/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Indicator Kernel
//!
//! Stateless, pure computation of RSI, MACD, and Bollinger Bands over a rolling
//! [`Bar`](crate::engine::bar::Bar) window. Mirrors the "pure function over plain
//! numerics" shape of [`crate::greeks::utils`]: every indicator is a free function
//! over a slice, independently unit-testable, composed by [`compute`].

use crate::engine::bar::Bar;
use crate::error::IndicatorError;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parameters controlling indicator computation. Mirrors the `StrategyConfig`
/// fields `rsiPeriod, macdFast, macdSlow, macdSignal, bbPeriod, bbStdDev`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IndicatorParams {
    /// Lookback period for Wilder-smoothed RSI.
    pub rsi_period: usize,
    /// Fast EMA period for MACD.
    pub macd_fast: usize,
    /// Slow EMA period for MACD.
    pub macd_slow: usize,
    /// Signal-line EMA period for MACD.
    pub macd_signal: usize,
    /// Lookback period for the Bollinger middle band (SMA).
    pub bb_period: usize,
    /// Number of standard deviations for the Bollinger bands.
    pub bb_std_dev: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        IndicatorParams {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_period: 20,
            bb_std_dev: 2.0,
        }
    }
}

impl IndicatorParams {
    /// Minimum bar count required for [`compute`] to return `Some`: the
    /// longest lookback among RSI, MACD (slow+signal), and Bollinger, plus a
    /// one-bar buffer.
    pub fn min_bars(&self) -> usize {
        let longest = self
            .rsi_period
            .max(self.macd_slow + self.macd_signal)
            .max(self.bb_period);
        longest + 1
    }
}

/// Indicator values aligned on the last bar of the window supplied to
/// [`compute`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Indicators {
    /// Wilder-smoothed Relative Strength Index, in `[0, 100]`.
    pub rsi: Decimal,
    /// MACD line: EMA(close, fast) − EMA(close, slow).
    pub macd: Decimal,
    /// Signal line: EMA(macd, signal period).
    pub macd_signal: Decimal,
    /// MACD histogram: macd − macd_signal.
    pub macd_histogram: Decimal,
    /// Upper Bollinger band: middle + std_dev·σ.
    pub bb_upper: Decimal,
    /// Middle Bollinger band: SMA(close, period).
    pub bb_middle: Decimal,
    /// Lower Bollinger band: middle − std_dev·σ.
    pub bb_lower: Decimal,
}

/// Computes [`Indicators`] from a bar history, or
/// `Err(IndicatorError::InsufficientHistory)` if `bars` is shorter than
/// [`IndicatorParams::min_bars`].
pub fn compute(bars: &[Bar], params: &IndicatorParams) -> Result<Indicators, IndicatorError> {
    let need = params.min_bars();
    if bars.len() < need {
        return Err(IndicatorError::InsufficientHistory { need, got: bars.len() });
    }
    let insufficient = || IndicatorError::InsufficientHistory { need, got: bars.len() };

    let closes: Vec<f64> = bars.iter().map(|b| b.close.to_f64().unwrap_or(0.0)).collect();

    let rsi = wilder_rsi(&closes, params.rsi_period).ok_or_else(insufficient)?;

    let ema_fast = ema_series(&closes, params.macd_fast);
    let ema_slow = ema_series(&closes, params.macd_slow);
    let macd_series: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal_series = ema_series(&macd_series, params.macd_signal);

    let macd = *macd_series.last().ok_or_else(insufficient)?;
    let macd_signal = *signal_series.last().ok_or_else(insufficient)?;
    let macd_histogram = macd - macd_signal;

    let bb_middle = sma(&closes, params.bb_period).ok_or_else(insufficient)?;
    let sigma = stddev(&closes, params.bb_period).ok_or_else(insufficient)?;
    let bb_upper = bb_middle + params.bb_std_dev * sigma;
    let bb_lower = bb_middle - params.bb_std_dev * sigma;

    Ok(Indicators {
        rsi: to_decimal(rsi),
        macd: to_decimal(macd),
        macd_signal: to_decimal(macd_signal),
        macd_histogram: to_decimal(macd_histogram),
        bb_upper: to_decimal(bb_upper),
        bb_middle: to_decimal(bb_middle),
        bb_lower: to_decimal(bb_lower),
    })
}

fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or(Decimal::ZERO)
}

/// Simple moving average of the trailing `period` values, or `None` if there
/// are fewer than `period` values.
fn sma(values: &[f64], period: usize) -> Option<f64> {
    if values.len() < period || period == 0 {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Population standard deviation of the trailing `period` values.
fn stddev(values: &[f64], period: usize) -> Option<f64> {
    let mean = sma(values, period)?;
    let window = &values[values.len() - period..];
    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// Exponential moving average over the full series, seeded with the simple
/// average of the first `period` values (the standard EMA warm-up). Returns a
/// series the same length as `values`; entries before the seed repeat the seed.
fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() || period == 0 {
        return vec![0.0; values.len()];
    }
    let period = period.min(values.len());
    let alpha = 2.0 / (period as f64 + 1.0);
    let seed = values[..period].iter().sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(values.len());
    out.resize(period, seed);
    let mut prev = seed;
    for &v in &values[period..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}

/// Wilder-smoothed RSI of the trailing `period`-length window (plus one seed
/// bar), or `None` if there isn't enough history.
fn wilder_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if closes.len() < period + 1 {
        return None;
    }
    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let (mut avg_gain, mut avg_loss) = {
        let seed = &deltas[..period];
        let gain = seed.iter().filter(|d| **d > 0.0).sum::<f64>() / period as f64;
        let loss = seed.iter().filter(|d| **d < 0.0).map(|d| -d).sum::<f64>() / period as f64;
        (gain, loss)
    };
    for &d in &deltas[period..] {
        let gain = d.max(0.0);
        let loss = (-d).max(0.0);
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
    }
    if avg_gain == 0.0 && avg_loss == 0.0 {
        return Some(50.0);
    }
    if avg_loss == 0.0 {
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rust_decimal_macros::dec;

    fn make_bars(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let close = Decimal::from_f64(c).unwrap();
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
    fn insufficient_history_reports_need_and_got() {
        let bars = make_bars(&[100.0, 101.0, 102.0]);
        let params = IndicatorParams::default();
        let err = compute(&bars, &params).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::InsufficientHistory {
                need: params.min_bars(),
                got: 3
            }
        );
    }

    #[test]
    fn uptrend_yields_high_rsi_and_positive_macd_histogram_eventually() {
        let closes: Vec<f64> = (0..80).map(|i| 400.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let ind = compute(&bars, &IndicatorParams::default()).unwrap();
        assert!(ind.rsi > dec!(60), "rsi={}", ind.rsi);
        assert!(ind.bb_upper >= ind.bb_middle);
        assert!(ind.bb_middle >= ind.bb_lower);
    }

    #[test]
    fn flat_series_has_rsi_50_and_zero_bandwidth() {
        let closes = vec![450.0; 60];
        let bars = make_bars(&closes);
        let ind = compute(&bars, &IndicatorParams::default()).unwrap();
        assert_eq!(ind.rsi, dec!(50));
        assert_eq!(ind.bb_upper, ind.bb_lower);
    }

    #[test]
    fn min_bars_accounts_for_macd_and_bollinger() {
        let params = IndicatorParams::default();
        assert_eq!(params.min_bars(), 26 + 9 + 1);
    }
}
