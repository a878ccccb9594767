/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Portfolio Risk Governor
//!
//! Aggregate pre-admission limits on Greeks, notional, concentration, and
//! daily loss. The struct-of-thresholds-with-`Default` shape is grounded on
//! [`crate::risk::model::RiskMetricsSimulation`].

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overridable aggregate thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskThresholds {
    /// Delta-dollar proxy cap, as a fraction of balance.
    pub max_portfolio_delta_pct: Decimal,
    /// Portfolio gamma cap.
    pub max_portfolio_gamma: Decimal,
    /// Theta-dollar cap per day, as a fraction of balance.
    pub max_portfolio_theta_pct: Decimal,
    /// Vega-dollar cap per 1% vol, as a fraction of balance.
    pub max_portfolio_vega_pct: Decimal,
    /// Maximum notional exposure, as a multiple of balance.
    pub max_notional_multiple: Decimal,
    /// Herfindahl concentration index above which a warning (not a block) is
    /// issued.
    pub max_concentration_herfindahl: Decimal,
    /// Diversification score below which a warning is issued (only checked
    /// with 2+ positions).
    pub min_diversification_score: Decimal,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            max_portfolio_delta_pct: dec!(0.02),
            max_portfolio_gamma: dec!(0.5),
            max_portfolio_theta_pct: dec!(0.01),
            max_portfolio_vega_pct: dec!(0.05),
            max_notional_multiple: dec!(5),
            max_concentration_herfindahl: dec!(0.4),
            min_diversification_score: dec!(0.3),
        }
    }
}

/// Per-position notional, used for concentration/diversification checks.
#[derive(Debug, Clone, Copy)]
pub struct PositionNotional {
    /// `|entryPrice · qty · 100|` for this position.
    pub notional: Decimal,
}

/// Hypothetical post-entry portfolio aggregate, computed by the caller before
/// asking the governor to admit or reject.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioAggregate {
    /// Net portfolio delta (unsigned dollar-equivalent comparison is done by
    /// the governor; this is the raw signed per-contract-scaled delta).
    pub delta: f64,
    /// Net portfolio gamma.
    pub gamma: f64,
    /// Net portfolio theta per day.
    pub theta: f64,
    /// Net portfolio vega per 1% vol.
    pub vega: f64,
    /// Total notional across all open positions, including the candidate.
    pub total_notional: Decimal,
    /// Account balance the percentage caps are measured against.
    pub balance: Decimal,
}

/// Outcome of [`check`]: a hard rejection reason (if any) plus any non-
/// blocking warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GovernorOutcome {
    /// `Some(reason)` if a hard limit was breached; admission must be
    /// rejected.
    pub rejected: Option<String>,
    /// Warnings that do not block admission (concentration, diversification).
    pub warnings: Vec<String>,
}

impl GovernorOutcome {
    /// `true` only when no hard limit was breached.
    pub fn admitted(&self) -> bool {
        self.rejected.is_none()
    }
}

/// Checks a hypothetical post-entry portfolio against [`RiskThresholds`], plus
/// the session's daily-loss hard stop and the concentration/diversification
/// warnings.
pub fn check(
    aggregate: &PortfolioAggregate,
    positions: &[PositionNotional],
    daily_realized_loss: Decimal,
    daily_loss_limit: Decimal,
    thresholds: &RiskThresholds,
) -> GovernorOutcome {
    let balance = aggregate.balance.max(Decimal::ONE);
    let mut warnings = Vec::new();

    if daily_realized_loss <= -daily_loss_limit {
        return GovernorOutcome {
            rejected: Some(format!(
                "daily realized loss {daily_realized_loss} breached limit {daily_loss_limit}; session suspended"
            )),
            warnings,
        };
    }

    let delta_cap = (thresholds.max_portfolio_delta_pct * balance).to_f64().unwrap_or(f64::MAX);
    if aggregate.delta.abs() > delta_cap {
        return GovernorOutcome {
            rejected: Some(format!(
                "portfolio delta {:.2} exceeds cap {delta_cap:.2}",
                aggregate.delta
            )),
            warnings,
        };
    }

    if aggregate.gamma.abs() > thresholds.max_portfolio_gamma.to_f64().unwrap_or(f64::MAX) {
        return GovernorOutcome {
            rejected: Some(format!(
                "portfolio gamma {:.3} exceeds cap {}",
                aggregate.gamma, thresholds.max_portfolio_gamma
            )),
            warnings,
        };
    }

    let theta_cap = (thresholds.max_portfolio_theta_pct * balance).to_f64().unwrap_or(f64::MAX);
    if aggregate.theta.abs() > theta_cap {
        return GovernorOutcome {
            rejected: Some(format!(
                "portfolio theta {:.2} exceeds cap {theta_cap:.2}/day",
                aggregate.theta
            )),
            warnings,
        };
    }

    let vega_cap = (thresholds.max_portfolio_vega_pct * balance).to_f64().unwrap_or(f64::MAX);
    if aggregate.vega.abs() > vega_cap {
        return GovernorOutcome {
            rejected: Some(format!(
                "portfolio vega {:.2} exceeds cap {vega_cap:.2}",
                aggregate.vega
            )),
            warnings,
        };
    }

    let max_notional = thresholds.max_notional_multiple * balance;
    if aggregate.total_notional > max_notional {
        return GovernorOutcome {
            rejected: Some(format!(
                "notional {} exceeds {max_notional} ({}x balance)",
                aggregate.total_notional, thresholds.max_notional_multiple
            )),
            warnings,
        };
    }

    if let Some(h) = herfindahl(positions) {
        if h > thresholds.max_concentration_herfindahl {
            warnings.push(format!(
                "concentration Herfindahl {h:.3} exceeds {:.3} (warning only)",
                thresholds.max_concentration_herfindahl
            ));
        }
    }

    if positions.len() >= 2 {
        if let Some(h) = herfindahl(positions) {
            let diversification = Decimal::ONE - h;
            if diversification < thresholds.min_diversification_score {
                warnings.push(format!(
                    "diversification score {diversification:.3} below {:.3} (warning only)",
                    thresholds.min_diversification_score
                ));
            }
        }
    }

    GovernorOutcome {
        rejected: None,
        warnings,
    }
}

fn herfindahl(positions: &[PositionNotional]) -> Option<Decimal> {
    let total: Decimal = positions.iter().map(|p| p.notional.abs()).sum();
    if total.is_zero() {
        return None;
    }
    Some(
        positions
            .iter()
            .map(|p| {
                let share = p.notional.abs() / total;
                share * share
            })
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_aggregate(balance: Decimal) -> PortfolioAggregate {
        PortfolioAggregate {
            delta: 0.01,
            gamma: 0.01,
            theta: -1.0,
            vega: 1.0,
            total_notional: dec!(1000),
            balance,
        }
    }

    #[test]
    fn admits_a_clean_portfolio() {
        let outcome = check(&clean_aggregate(dec!(10000)), &[], Decimal::ZERO, dec!(500), &RiskThresholds::default());
        assert!(outcome.admitted());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn daily_loss_limit_is_a_hard_stop() {
        let outcome = check(&clean_aggregate(dec!(10000)), &[], dec!(-600), dec!(500), &RiskThresholds::default());
        assert!(!outcome.admitted());
    }

    #[test]
    fn excess_delta_rejects() {
        let mut aggregate = clean_aggregate(dec!(10000));
        aggregate.delta = 1000.0;
        let outcome = check(&aggregate, &[], Decimal::ZERO, dec!(500), &RiskThresholds::default());
        assert!(!outcome.admitted());
    }

    #[test]
    fn concentrated_portfolio_warns_but_admits() {
        let positions = vec![
            PositionNotional { notional: dec!(9000) },
            PositionNotional { notional: dec!(1000) },
        ];
        let outcome = check(&clean_aggregate(dec!(10000)), &positions, Decimal::ZERO, dec!(500), &RiskThresholds::default());
        assert!(outcome.admitted());
        assert!(!outcome.warnings.is_empty());
    }
}
