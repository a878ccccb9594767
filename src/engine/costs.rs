/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Transaction Cost Engine
//!
//! Per-leg fill simulation (slippage, commission, regulatory fees) and spread
//! net-credit aggregation. Field shape (side/premium/fees/quantity) is grounded
//! on [`crate::pnl::transaction::Transaction`]. Slippage is modeled as the
//! market condition's base fraction of the quoted spread, perturbed by a
//! seeded [`rand::Rng`] in `±20%` the way [`crate::pricing::utils::simulate_returns`]
//! takes its `rng` as a parameter rather than reaching for a global generator —
//! callers own the seed and therefore the reproducibility of a replay.

use crate::error::EngineError;
use crate::model::types::Action;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bounds of the uniform multiplier applied to the base slippage fraction,
/// modeling fill-to-fill variability within a market condition.
const SLIPPAGE_JITTER_MIN: f64 = 0.8;
const SLIPPAGE_JITTER_MAX: f64 = 1.2;

/// Minimum realistic net credit per spread, in dollars per contract.
pub const DEFAULT_MIN_NET_CREDIT: Decimal = dec!(0.05);

/// Default per-contract commission.
pub const DEFAULT_COMMISSION_PER_CONTRACT: Decimal = dec!(0.65);

/// Default per-contract regulatory fee, charged only on sells.
pub const DEFAULT_REGULATORY_FEE_PER_CONTRACT: Decimal = dec!(0.03);

/// Market liquidity condition, selecting the slippage fraction of the quoted
/// spread applied to a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MarketCondition {
    /// Tight, liquid market: 5% of spread.
    Benign,
    /// Typical conditions: 10% of spread.
    Normal,
    /// Wide, illiquid, or volatile market: 25% of spread.
    Stressed,
}

impl MarketCondition {
    fn slippage_fraction(self) -> Decimal {
        match self {
            MarketCondition::Benign => dec!(0.05),
            MarketCondition::Normal => dec!(0.10),
            MarketCondition::Stressed => dec!(0.25),
        }
    }
}

/// Simulated execution of one leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FillSimulation {
    /// `Buy` or `Sell` — `Other` is rejected by [`simulate_fill`].
    pub leg: Action,
    /// Quoted mid price at decision time.
    pub requested_price: Decimal,
    /// Simulated execution price after slippage.
    pub executed_price: Decimal,
    /// Slippage applied, in basis points of the quoted spread.
    pub slippage_bps: Decimal,
    /// Per-contract commission times quantity.
    pub commission: Decimal,
    /// Per-contract regulatory fee times quantity (sells only).
    pub regulatory_fees: Decimal,
    /// `commission + regulatory_fees`.
    pub total: Decimal,
}

/// Simulates a single leg's fill given the quoted market and a fill intent.
///
/// Pricing: `executedPrice = side=BUY ? ask + s : max(0.01, bid − s)`, where
/// `s` is `slippage_fraction(condition) × jitter × (ask − bid)` and `jitter`
/// is drawn uniformly from `rng` in `[0.8, 1.2]`. The same `rng` (seeded from
/// [`crate::engine::config::StrategyConfig::cost_model_seed`]) reused across a
/// replay reproduces the identical fill sequence every run.
pub fn simulate_fill(
    side: Action,
    bid: Decimal,
    ask: Decimal,
    qty: u32,
    condition: MarketCondition,
    rng: &mut impl Rng,
) -> Result<FillSimulation, EngineError> {
    if side == Action::Other {
        return Err(EngineError::InvariantViolation {
            detail: "fill simulation requires Buy or Sell, not Other".to_string(),
        });
    }
    if bid < Decimal::ZERO || ask < bid {
        return Err(EngineError::InvariantViolation {
            detail: format!("invalid quote: bid={bid} ask={ask}"),
        });
    }

    let spread = ask - bid;
    let requested_price = (bid + ask) / dec!(2);
    let jitter = Decimal::from_f64(rng.random_range(SLIPPAGE_JITTER_MIN..SLIPPAGE_JITTER_MAX)).unwrap_or(Decimal::ONE);
    let slippage = condition.slippage_fraction() * jitter * spread;

    let executed_price = match side {
        Action::Buy => ask + slippage,
        Action::Sell => (bid - slippage).max(dec!(0.01)),
        Action::Other => unreachable!(),
    };

    let slippage_bps = if requested_price.is_zero() {
        Decimal::ZERO
    } else {
        (executed_price - requested_price).abs() / requested_price * dec!(10000)
    };

    let qty_dec = Decimal::from(qty);
    let commission = DEFAULT_COMMISSION_PER_CONTRACT * qty_dec;
    let regulatory_fees = if side == Action::Sell {
        DEFAULT_REGULATORY_FEE_PER_CONTRACT * qty_dec
    } else {
        Decimal::ZERO
    };

    Ok(FillSimulation {
        leg: side,
        requested_price,
        executed_price,
        slippage_bps,
        commission,
        regulatory_fees,
        total: commission + regulatory_fees,
    })
}

/// One leg to price through [`calculate_spread_costs`]: a market quote, a
/// fill intent, and a quantity.
#[derive(Debug, Clone, Copy)]
pub struct SpreadLeg {
    /// `Buy` to open a long leg, `Sell` to open a short leg.
    pub side: Action,
    /// Best bid on the contract.
    pub bid: Decimal,
    /// Best ask on the contract.
    pub ask: Decimal,
    /// Number of contracts.
    pub qty: u32,
}

/// Simulates every leg of a spread and aggregates net proceeds.
///
/// Returns `(fills, total_cost, net_received)` where `net_received` sums sell
/// credits minus buy debits in dollars (×100 multiplier), then subtracts
/// `total_cost`.
pub fn calculate_spread_costs(
    legs: &[SpreadLeg],
    condition: MarketCondition,
    rng: &mut impl Rng,
) -> Result<(Vec<FillSimulation>, Decimal, Decimal), EngineError> {
    let mut fills = Vec::with_capacity(legs.len());
    let mut total_cost = Decimal::ZERO;
    let mut net_received = Decimal::ZERO;

    for leg in legs {
        let fill = simulate_fill(leg.side, leg.bid, leg.ask, leg.qty, condition, rng)?;
        let notional = fill.executed_price * Decimal::from(leg.qty) * dec!(100);
        net_received += match leg.side {
            Action::Sell => notional,
            Action::Buy => -notional,
            Action::Other => Decimal::ZERO,
        };
        total_cost += fill.total;
        fills.push(fill);
    }
    net_received -= total_cost;

    Ok((fills, total_cost, net_received))
}

/// Rejects a spread whose realistic entry credit per contract falls below
/// `floor` (default `$0.05`).
pub fn check_credit_floor(net_received: Decimal, qty: u32, floor: Decimal) -> Result<(), EngineError> {
    if qty == 0 {
        return Err(EngineError::InvariantViolation {
            detail: "cannot price a spread with zero quantity".to_string(),
        });
    }
    let per_contract = net_received / (Decimal::from(qty) * dec!(100));
    if per_contract < floor {
        return Err(EngineError::AdmissionRejected {
            reason: format!(
                "realistic entry credit {per_contract} below floor {floor} per contract"
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn buy_pays_ask_plus_slippage_within_jitter_bounds() {
        let mut rng = seeded(1);
        let fill = simulate_fill(Action::Buy, dec!(1.00), dec!(1.20), 1, MarketCondition::Normal, &mut rng).unwrap();
        assert!(fill.executed_price >= dec!(1.20) + dec!(0.20) * dec!(0.10) * dec!(0.8));
        assert!(fill.executed_price <= dec!(1.20) + dec!(0.20) * dec!(0.10) * dec!(1.2));
        assert_eq!(fill.regulatory_fees, Decimal::ZERO);
    }

    #[test]
    fn sell_receives_bid_minus_slippage_floored_at_a_penny() {
        let mut rng = seeded(2);
        let fill = simulate_fill(Action::Sell, dec!(0.01), dec!(0.03), 1, MarketCondition::Stressed, &mut rng).unwrap();
        assert_eq!(fill.executed_price, dec!(0.01));
        assert_eq!(fill.regulatory_fees, DEFAULT_REGULATORY_FEE_PER_CONTRACT);
    }

    #[test]
    fn rejects_inverted_quote() {
        let mut rng = seeded(3);
        let err = simulate_fill(Action::Buy, dec!(1.20), dec!(1.00), 1, MarketCondition::Normal, &mut rng);
        assert!(err.is_err());
    }

    #[test]
    fn same_seed_reproduces_identical_fill() {
        let fill_a = simulate_fill(Action::Buy, dec!(1.00), dec!(1.20), 1, MarketCondition::Normal, &mut seeded(42)).unwrap();
        let fill_b = simulate_fill(Action::Buy, dec!(1.00), dec!(1.20), 1, MarketCondition::Normal, &mut seeded(42)).unwrap();
        assert_eq!(fill_a.executed_price, fill_b.executed_price);
    }

    #[test]
    fn spread_costs_aggregate_credit_minus_debit() {
        let legs = vec![
            SpreadLeg {
                side: Action::Sell,
                bid: dec!(1.50),
                ask: dec!(1.60),
                qty: 1,
            },
            SpreadLeg {
                side: Action::Buy,
                bid: dec!(0.50),
                ask: dec!(0.60),
                qty: 1,
            },
        ];
        let mut rng = seeded(4);
        let (fills, total_cost, net_received) =
            calculate_spread_costs(&legs, MarketCondition::Normal, &mut rng).unwrap();
        assert_eq!(fills.len(), 2);
        assert!(total_cost > Decimal::ZERO);
        assert!(net_received > Decimal::ZERO, "net_received={net_received}");
    }

    #[test]
    fn credit_floor_rejects_thin_credit() {
        let err = check_credit_floor(dec!(2.00), 1, DEFAULT_MIN_NET_CREDIT);
        assert!(err.is_err());
        let ok = check_credit_floor(dec!(10.00), 1, DEFAULT_MIN_NET_CREDIT);
        assert!(ok.is_ok());
    }
}
