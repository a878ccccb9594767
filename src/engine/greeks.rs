/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Greeks Engine
//!
//! Per-leg and portfolio Black-Scholes Greeks, built directly on the reused
//! [`crate::greeks::utils`] kernel (`d1`, `d2`, `n`, `big_n`) rather than
//! reimplementing the normal-CDF math.

use crate::greeks::utils::{big_n, d1, d2, n};
use crate::model::types::Side;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-leg or aggregated Greeks at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GreeksSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Spot price of the underlying.
    pub underlying_price: Decimal,
    /// Time to expiration, in years.
    pub time_to_expiration: f64,
    /// Implied volatility used for the evaluation.
    pub iv: f64,
    /// Risk-free rate used for the evaluation.
    pub rfr: f64,
    /// First-order price sensitivity to the underlying.
    pub delta: f64,
    /// Rate of change of delta.
    pub gamma: f64,
    /// Time decay, per calendar day.
    pub theta: f64,
    /// Sensitivity to a 1-point change in IV.
    pub vega: f64,
    /// Sensitivity to a 1% change in the risk-free rate.
    pub rho: f64,
}

/// A leg fed to [`portfolio`]: a contract's Greeks inputs plus the position's
/// side and size.
#[derive(Debug, Clone, Copy)]
pub struct GreeksLeg {
    /// Strike price of the leg's contract.
    pub strike_price: f64,
    /// `true` for a call, `false` for a put.
    pub is_call: bool,
    /// Long or short.
    pub side: Side,
    /// Number of contracts.
    pub quantity: u32,
    /// Implied volatility for this leg.
    pub iv: f64,
}

/// Evaluates standard Black-Scholes Greeks for a single contract.
///
/// `is_call` selects between call and put payoff conventions; `rfr` is the
/// annualized risk-free rate.
#[allow(clippy::too_many_arguments)]
pub fn per_leg(
    underlying_price: f64,
    strike_price: f64,
    is_call: bool,
    time_to_expiration: f64,
    iv: f64,
    rfr: f64,
    timestamp: DateTime<Utc>,
) -> GreeksSnapshot {
    let d1v = d1(underlying_price, strike_price, rfr, time_to_expiration, iv);
    let d2v = d2(underlying_price, strike_price, rfr, time_to_expiration, iv);
    let sqrt_t = time_to_expiration.max(0.0).sqrt();
    let discount = (-rfr * time_to_expiration).exp();

    let delta = if is_call {
        big_n(d1v)
    } else {
        big_n(d1v) - 1.0
    };
    let gamma = if underlying_price > 0.0 && iv > 0.0 && sqrt_t > 0.0 {
        n(d1v) / (underlying_price * iv * sqrt_t)
    } else {
        0.0
    };
    let vega = underlying_price * n(d1v) * sqrt_t / 100.0;
    let theta_annual = if is_call {
        -(underlying_price * n(d1v) * iv) / (2.0 * sqrt_t.max(1e-9))
            - rfr * strike_price * discount * big_n(d2v)
    } else {
        -(underlying_price * n(d1v) * iv) / (2.0 * sqrt_t.max(1e-9))
            + rfr * strike_price * discount * big_n(-d2v)
    };
    let theta = theta_annual / 365.0;
    let rho = if is_call {
        strike_price * time_to_expiration * discount * big_n(d2v) / 100.0
    } else {
        -strike_price * time_to_expiration * discount * big_n(-d2v) / 100.0
    };

    GreeksSnapshot {
        timestamp,
        underlying_price: Decimal::from_f64(underlying_price).unwrap_or(Decimal::ZERO),
        time_to_expiration,
        iv,
        rfr,
        delta,
        gamma,
        theta,
        vega,
        rho,
    }
}

/// Sums per-leg Greeks into a portfolio (or spread) snapshot, negating short
/// legs' contribution. All legs are assumed priced off the same
/// `underlying_price` and `time_to_expiration`.
pub fn portfolio(
    legs: &[GreeksLeg],
    underlying_price: f64,
    time_to_expiration: f64,
    rfr: f64,
    timestamp: DateTime<Utc>,
) -> GreeksSnapshot {
    let mut delta = 0.0;
    let mut gamma = 0.0;
    let mut theta = 0.0;
    let mut vega = 0.0;
    let mut rho = 0.0;
    let mut iv_weighted = 0.0;
    let mut total_qty = 0.0;

    for leg in legs {
        let snap = per_leg(
            underlying_price,
            leg.strike_price,
            leg.is_call,
            time_to_expiration,
            leg.iv,
            rfr,
            timestamp,
        );
        let sign = match leg.side {
            Side::Long => 1.0,
            Side::Short => -1.0,
        };
        let qty = leg.quantity as f64;
        delta += sign * qty * snap.delta;
        gamma += sign * qty * snap.gamma;
        theta += sign * qty * snap.theta;
        vega += sign * qty * snap.vega;
        rho += sign * qty * snap.rho;
        iv_weighted += leg.iv * qty;
        total_qty += qty;
    }

    let iv = if total_qty > 0.0 {
        iv_weighted / total_qty
    } else {
        0.0
    };

    GreeksSnapshot {
        timestamp,
        underlying_price: Decimal::from_f64(underlying_price).unwrap_or(Decimal::ZERO),
        time_to_expiration,
        iv,
        rfr,
        delta,
        gamma,
        theta,
        vega,
        rho,
    }
}

/// Outcome of [`risk_check`]: whether the snapshot is flagged risky, plus the
/// individual threshold breaches that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskCheckOutcome {
    /// `true` if any threshold in [`RiskThresholds`] was breached.
    pub risky: bool,
    /// Human-readable description of each breach.
    pub warnings: Vec<String>,
}

/// Overridable thresholds for [`risk_check`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskThresholds {
    /// `|Δ|` above this is flagged "high-delta".
    pub max_abs_delta: f64,
    /// `|Γ|` above this is flagged "extreme gamma".
    pub max_abs_gamma: f64,
    /// Θ per day below this (more negative) is flagged "accelerating decay".
    pub min_theta_per_day: f64,
    /// `|𝜈|` per contract above this is flagged "vega explosion".
    pub max_abs_vega: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            max_abs_delta: 0.7,
            max_abs_gamma: 0.15,
            min_theta_per_day: -100.0,
            max_abs_vega: 50.0,
        }
    }
}

/// Flags a snapshot against [`RiskThresholds`], scaling theta by `qty` the way
/// a per-position snapshot's raw per-contract Greeks are compared against a
/// dollar-per-day threshold.
pub fn risk_check(snapshot: &GreeksSnapshot, qty: u32, thresholds: &RiskThresholds) -> RiskCheckOutcome {
    let mut warnings = Vec::new();
    let qty_f = qty.max(1) as f64;

    if snapshot.delta.abs() > thresholds.max_abs_delta {
        warnings.push(format!(
            "high-delta: |delta|={:.3} exceeds {:.3}",
            snapshot.delta.abs(),
            thresholds.max_abs_delta
        ));
    }
    if snapshot.gamma.abs() > thresholds.max_abs_gamma {
        warnings.push(format!(
            "extreme gamma: |gamma|={:.3} exceeds {:.3}",
            snapshot.gamma.abs(),
            thresholds.max_abs_gamma
        ));
    }
    let theta_total = snapshot.theta * qty_f;
    if theta_total < thresholds.min_theta_per_day {
        warnings.push(format!(
            "accelerating decay: theta={theta_total:.2}/day below {:.2}",
            thresholds.min_theta_per_day
        ));
    }
    if snapshot.vega.abs() > thresholds.max_abs_vega {
        warnings.push(format!(
            "vega explosion: |vega|={:.3} exceeds {:.3}",
            snapshot.vega.abs(),
            thresholds.max_abs_vega
        ));
    }

    RiskCheckOutcome {
        risky: !warnings.is_empty(),
        warnings,
    }
}

/// Converts a `Decimal` to `f64` for the Greeks kernel's plain-float inputs.
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn atm_call_delta_is_near_half() {
        let snap = per_leg(450.0, 450.0, true, 0.003, 0.2, 0.04, now());
        assert!((snap.delta - 0.5).abs() < 0.1, "delta={}", snap.delta);
    }

    #[test]
    fn put_delta_is_negative() {
        let snap = per_leg(450.0, 460.0, false, 0.003, 0.2, 0.04, now());
        assert!(snap.delta < 0.0, "delta={}", snap.delta);
    }

    #[test]
    fn short_leg_negates_portfolio_greeks() {
        let long_leg = GreeksLeg {
            strike_price: 450.0,
            is_call: true,
            side: Side::Long,
            quantity: 1,
            iv: 0.2,
        };
        let short_leg = GreeksLeg {
            strike_price: 450.0,
            is_call: true,
            side: Side::Short,
            quantity: 1,
            iv: 0.2,
        };
        let long_snap = portfolio(&[long_leg], 450.0, 0.003, 0.04, now());
        let short_snap = portfolio(&[short_leg], 450.0, 0.003, 0.04, now());
        assert!((long_snap.delta + short_snap.delta).abs() < 1e-9);
    }

    #[test]
    fn risk_check_flags_high_delta() {
        let snap = per_leg(450.0, 450.0, true, 0.003, 0.2, 0.04, now());
        let mut hot = snap;
        hot.delta = 0.9;
        let outcome = risk_check(&hot, 1, &RiskThresholds::default());
        assert!(outcome.risky);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn risk_check_clean_snapshot_has_no_warnings() {
        let snap = GreeksSnapshot {
            timestamp: now(),
            underlying_price: Decimal::from(450),
            time_to_expiration: 0.003,
            iv: 0.2,
            rfr: 0.04,
            delta: 0.2,
            gamma: 0.01,
            theta: -2.0,
            vega: 5.0,
            rho: 0.1,
        };
        let outcome = risk_check(&snap, 1, &RiskThresholds::default());
        assert!(!outcome.risky);
        assert!(outcome.warnings.is_empty());
    }
}
