/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Position Manager
//!
//! Position lifecycle, opening sizing, per-cycle monitoring, exit-rule
//! adjudication, and expiration settlement. Field shape is grounded on
//! [`crate::model::position::Position`] (option + premium + fees
//! + date); rewritten because this engine's position is keyed on a
//! [`crate::engine::spreads::SpreadDescriptor`] (potentially multi-leg)
//! rather than a single [`crate::model::option::Options`] leg.

use crate::engine::greeks::GreeksSnapshot;
use crate::engine::spreads::SpreadDescriptor;
use crate::error::EngineError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle state of a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PositionState {
    /// Actively monitored, eligible for exit adjudication.
    Open,
    /// Exit decided, awaiting the close fill.
    Closing,
    /// Terminal; immutable once reached.
    Closed,
}

/// A snapshot of price/Greeks/P&L at one instant, used for both `entry` and
/// `current` on [`Position`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PositionSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Net credit (entry) or mark-to-market value (current), per contract.
    pub price: Decimal,
    /// Greeks at this instant.
    pub greeks: GreeksSnapshot,
    /// Running P&L at this instant (zero on the entry snapshot).
    pub pnl: Decimal,
}

/// An open or closed options position.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Position {
    /// Unique identifier, assigned at open.
    pub id: Uuid,
    /// Underlying symbol.
    pub symbol: String,
    /// The spread this position holds.
    pub spread: SpreadDescriptor,
    /// Number of contracts.
    pub qty: u32,
    /// Snapshot taken at open; immutable thereafter.
    pub entry: PositionSnapshot,
    /// Snapshot refreshed every monitoring cycle.
    pub current: PositionSnapshot,
    /// Maximum possible loss per contract, fixed at open.
    pub max_loss: Decimal,
    /// A simple 0-100 risk score recomputed each cycle (higher = riskier).
    pub risk_score: u8,
    /// Lifecycle state.
    pub state: PositionState,
    /// Highest P&L observed since open.
    pub max_pnl: Decimal,
    /// Lowest P&L observed since open.
    pub min_pnl: Decimal,
}

/// Terminal snapshot of a closed [`Position`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TradeRecord {
    /// The position this record closes out.
    pub position_id: Uuid,
    /// Underlying symbol.
    pub symbol: String,
    /// The closed spread.
    pub spread: SpreadDescriptor,
    /// Number of contracts.
    pub qty: u32,
    /// When the position was opened.
    pub entry_timestamp: DateTime<Utc>,
    /// When the position was closed.
    pub exit_timestamp: DateTime<Utc>,
    /// Mark-to-market price at close.
    pub exit_price: Decimal,
    /// Which exit rule fired.
    pub exit_reason: ExitReason,
    /// Total realized P&L, net of all costs.
    pub realized_pnl: Decimal,
    /// Realized P&L as a percentage of the account's `initial_balance`.
    pub pnl_pct: Decimal,
}

/// Which exit rule closed a position, in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExitReason {
    /// Rule 1.
    ProfitTarget,
    /// Rule 2.
    StopLoss,
    /// Rule 3.
    PriceBreach,
    /// Rule 4.
    GreeksExit,
    /// Rule 5.
    VolExpansion,
    /// Rule 6.
    TimeLimit,
    /// Rule 7.
    Expiration,
    /// The scheduler was stopped with an unconditional-close policy.
    EngineStopped,
}

/// Multipliers applied to the Kelly-lite base size at position opening.
#[derive(Debug, Clone, Copy)]
pub struct SizingInputs {
    /// Account balance available to risk.
    pub balance: Decimal,
    /// Fraction of balance risked per trade.
    pub max_risk_per_trade: Decimal,
    /// Per-contract max loss.
    pub max_loss: Decimal,
    /// Portfolio (or per-leg) delta at the proposed size of one contract.
    pub delta: f64,
    /// Portfolio (or per-leg) theta at the proposed size of one contract.
    pub theta: f64,
    /// Portfolio (or per-leg) vega at the proposed size of one contract.
    pub vega: f64,
    /// Time to expiration, in years.
    pub time_to_expiration: f64,
}

/// Derives the admitted quantity from the Kelly-lite base size plus the
/// Greeks/time multipliers, floored to at least 1 contract.
pub fn size_position(inputs: &SizingInputs) -> u32 {
    let base = (inputs.balance * inputs.max_risk_per_trade / (inputs.max_loss * dec!(100)))
        .floor()
        .to_u32()
        .unwrap_or(0);

    let mut qty = base.max(1) as f64;
    if inputs.delta.abs() > 0.5 {
        qty *= 0.7;
    }
    if inputs.theta < -20.0 {
        qty *= 0.8;
    }
    if inputs.vega.abs() > 50.0 {
        qty *= 0.9;
    }
    if inputs.time_to_expiration < 0.003 {
        qty *= 0.5;
    }

    (qty.floor() as u32).max(1)
}

/// Opens a position, given an admitted signal, its sized quantity, and the
/// entry Greeks/costs already computed by the caller (components C and D).
/// Rejects if the realistic entry credit per contract is at or below
/// `min_net_credit`.
#[allow(clippy::too_many_arguments)]
pub fn open(
    symbol: String,
    spread: SpreadDescriptor,
    qty: u32,
    entry_greeks: GreeksSnapshot,
    net_received: Decimal,
    min_net_credit: Decimal,
    timestamp: DateTime<Utc>,
    max_loss_per_contract: Decimal,
) -> Result<Position, EngineError> {
    if qty == 0 {
        return Err(EngineError::InvariantViolation {
            detail: "cannot open a position with zero quantity".to_string(),
        });
    }
    let entry_credit = net_received / (Decimal::from(qty) * dec!(100));
    if entry_credit <= min_net_credit {
        return Err(EngineError::AdmissionRejected {
            reason: format!("entry credit {entry_credit} at or below floor {min_net_credit}"),
        });
    }

    let entry = PositionSnapshot {
        timestamp,
        price: entry_credit,
        greeks: entry_greeks,
        pnl: Decimal::ZERO,
    };

    info!(symbol = %symbol, qty, credit = %entry_credit, "position opened");

    Ok(Position {
        id: Uuid::new_v4(),
        symbol,
        spread,
        qty,
        entry: entry.clone(),
        current: entry,
        max_loss: max_loss_per_contract,
        risk_score: 0,
        state: PositionState::Open,
        max_pnl: Decimal::ZERO,
        min_pnl: Decimal::ZERO,
    })
}

/// Credit-spread mark-to-market P&L: `(entryCredit − closingDebit) · qty · 100
/// − unrealizedCosts`.
pub fn credit_spread_pnl(
    entry_credit: Decimal,
    closing_debit: Decimal,
    qty: u32,
    unrealized_costs: Decimal,
) -> Decimal {
    (entry_credit - closing_debit) * Decimal::from(qty) * dec!(100) - unrealized_costs
}

/// Refreshes `current` with a new mark-to-market price/Greeks snapshot and
/// updates the running high/low water marks.
pub fn refresh(position: &mut Position, closing_debit: Decimal, greeks: GreeksSnapshot, unrealized_costs: Decimal, timestamp: DateTime<Utc>) {
    let pnl = credit_spread_pnl(position.entry.price, closing_debit, position.qty, unrealized_costs);
    position.current = PositionSnapshot {
        timestamp,
        price: closing_debit,
        greeks,
        pnl,
    };
    position.max_pnl = position.max_pnl.max(pnl);
    position.min_pnl = position.min_pnl.min(pnl);
    debug!(id = %position.id, pnl = %pnl, "position refreshed");
}

/// Strategy-specific exit parameters (condor defaults to a 0.3 profit-target
/// fraction, bear-call to a 0.6/2.5 stop-loss multiple, etc.).
#[derive(Debug, Clone, Copy)]
pub struct ExitParams {
    /// Fraction of `max_loss` (as credit) at which rule 1 fires.
    pub profit_target_fraction: Decimal,
    /// Multiple of entry credit at which rule 2's closing-debit test fires.
    pub stop_loss_multiple: Decimal,
    /// Maximum days held before rule 6 fires.
    pub time_limit_days: i64,
}

impl Default for ExitParams {
    fn default() -> Self {
        ExitParams {
            profit_target_fraction: dec!(0.5),
            stop_loss_multiple: dec!(2.0),
            time_limit_days: 21,
        }
    }
}

impl ExitParams {
    /// Layers strategy-specific overrides on top of a config-derived base:
    /// iron condors take profit at 0.3× max loss instead of the base
    /// fraction; bear calls take profit at 0.6×, stop out at 2.5× entry
    /// credit, and time out after 18 days. Bull puts and naked legs use
    /// `base` unchanged.
    pub fn for_spread(base: &ExitParams, spread: &SpreadDescriptor) -> ExitParams {
        match spread {
            SpreadDescriptor::IronCondor { .. } => ExitParams {
                profit_target_fraction: dec!(0.3),
                ..*base
            },
            SpreadDescriptor::BearCall { .. } => ExitParams {
                profit_target_fraction: dec!(0.6),
                stop_loss_multiple: dec!(2.5),
                time_limit_days: 18,
            },
            SpreadDescriptor::BullPut { .. } | SpreadDescriptor::NakedCall { .. } | SpreadDescriptor::NakedPut { .. } => *base,
        }
    }
}

/// Evaluates the 7 exit rules in fixed priority order and returns the first
/// that fires, or `None` if the position should keep
/// running. `entry_iv` and `current_iv` are mean chain IVs at entry and now.
/// `params` is the configured base; [`ExitParams::for_spread`] layers the
/// strategy-specific overrides for rules 1, 2, and 6 before they're tested.
#[allow(clippy::too_many_arguments)]
pub fn adjudicate_exit(
    position: &Position,
    underlying_price: Decimal,
    short_strikes: &[Decimal],
    now: DateTime<Utc>,
    entry_iv: f64,
    current_iv: f64,
    params: &ExitParams,
) -> Option<ExitReason> {
    let params = &ExitParams::for_spread(params, &position.spread);
    let pnl = position.current.pnl;

    // Rule 1: PROFIT_TARGET — fraction of the entry credit captured, e.g. the
    // 0.5 default closes once the position has decayed to 50% of what was
    // collected at entry (entry.price is the per-contract net credit).
    let target = params.profit_target_fraction * position.entry.price * Decimal::from(position.qty) * dec!(100);
    if pnl >= target {
        return Some(ExitReason::ProfitTarget);
    }

    // Rule 2: STOP_LOSS.
    let stop = -position.max_loss * Decimal::from(position.qty) * dec!(100);
    let closing_debit_floor = params.stop_loss_multiple * position.entry.price;
    if pnl <= stop || (position.entry.price - position.current.price).abs() >= closing_debit_floor {
        return Some(ExitReason::StopLoss);
    }

    // Rule 3: PRICE_BREACH — tolerance is the same ±2% used across strategies.
    const PRICE_BREACH_TOLERANCE: Decimal = dec!(1.02);
    let breached = match &position.spread {
        SpreadDescriptor::BearCall { sell_call, .. } => {
            underlying_price >= sell_call.strike_price * PRICE_BREACH_TOLERANCE
        }
        SpreadDescriptor::BullPut { breakeven, .. } => underlying_price <= breakeven / PRICE_BREACH_TOLERANCE,
        SpreadDescriptor::IronCondor { sell_put, sell_call, .. } => {
            underlying_price < sell_put.strike_price || underlying_price > sell_call.strike_price
        }
        SpreadDescriptor::NakedCall { contract, .. } => {
            underlying_price >= contract.strike_price * PRICE_BREACH_TOLERANCE
        }
        SpreadDescriptor::NakedPut { contract, .. } => {
            underlying_price <= contract.strike_price / PRICE_BREACH_TOLERANCE
        }
    };
    if breached {
        return Some(ExitReason::PriceBreach);
    }

    // Rule 4: GREEKS_EXIT.
    let delta_expansion = (position.current.greeks.delta - position.entry.greeks.delta).abs();
    if delta_expansion > 0.3 {
        return Some(ExitReason::GreeksExit);
    }

    // Rule 5: VOL_EXPANSION.
    if entry_iv > 0.0 && current_iv > 1.5 * entry_iv {
        return Some(ExitReason::VolExpansion);
    }

    // Rule 6: TIME_LIMIT.
    let held_days = (now - position.entry.timestamp).num_days();
    if held_days >= params.time_limit_days {
        return Some(ExitReason::TimeLimit);
    }

    // Rule 7: EXPIRATION.
    let expiration = short_strikes_expiration(position);
    if let Some(expiration) = expiration {
        if expiration <= now {
            return Some(ExitReason::Expiration);
        }
    }

    let _ = short_strikes; // reserved for future strike-level breach diagnostics.
    None
}

fn short_strikes_expiration(position: &Position) -> Option<DateTime<Utc>> {
    match &position.spread {
        SpreadDescriptor::BullPut { sell_put, .. } => Some(sell_put.expiration),
        SpreadDescriptor::BearCall { sell_call, .. } => Some(sell_call.expiration),
        SpreadDescriptor::IronCondor { sell_put, .. } => Some(sell_put.expiration),
        SpreadDescriptor::NakedCall { contract, .. } => Some(contract.expiration),
        SpreadDescriptor::NakedPut { contract, .. } => Some(contract.expiration),
    }
}

/// Closes a position: simulates the exit fill, realizes P&L net of all
/// costs, transitions to `CLOSED`, and produces the terminal [`TradeRecord`].
pub fn close(
    mut position: Position,
    exit_reason: ExitReason,
    timestamp: DateTime<Utc>,
    initial_balance: Decimal,
) -> Result<(Position, TradeRecord), EngineError> {
    // Exit fills are priced by the caller via engine::costs before close() is invoked;
    // position.current already reflects the net-of-costs mark.
    position.state = PositionState::Closed;
    let realized_pnl = position.current.pnl;
    let pnl_pct = if initial_balance.is_zero() {
        Decimal::ZERO
    } else {
        realized_pnl / initial_balance * dec!(100)
    };

    if matches!(exit_reason, ExitReason::StopLoss) {
        warn!(id = %position.id, pnl = %realized_pnl, "position stopped out");
    }

    let record = TradeRecord {
        position_id: position.id,
        symbol: position.symbol.clone(),
        spread: position.spread.clone(),
        qty: position.qty,
        entry_timestamp: position.entry.timestamp,
        exit_timestamp: timestamp,
        exit_price: position.current.price,
        exit_reason,
        realized_pnl,
        pnl_pct,
    };

    Ok((position, record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::chain::OptionContract;
    use crate::model::types::OptionStyle;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn dummy_greeks(delta: f64) -> GreeksSnapshot {
        GreeksSnapshot {
            timestamp: now(),
            underlying_price: dec!(450),
            time_to_expiration: 0.003,
            iv: 0.2,
            rfr: 0.04,
            delta,
            gamma: 0.01,
            theta: -2.0,
            vega: 5.0,
            rho: 0.1,
        }
    }

    fn contract(strike: Decimal, style: OptionStyle) -> OptionContract {
        OptionContract {
            underlying_symbol: "SPY".to_string(),
            strike_price: strike,
            option_style: style,
            expiration: now() + chrono::Duration::hours(2),
            bid: dec!(1.0),
            ask: dec!(1.1),
            mid: dec!(1.05),
            implied_volatility: 0.2,
            delta: 0.2,
            open_interest: 100,
            volume: 50,
        }
    }

    fn bull_put_position() -> Position {
        let spread = SpreadDescriptor::BullPut {
            sell_put: contract(dec!(440), OptionStyle::Put),
            buy_put: contract(dec!(435), OptionStyle::Put),
            net_credit: dec!(1.0),
            max_profit: dec!(1.0),
            max_loss: dec!(4.0),
            breakeven: dec!(439),
            pop: 0.7,
        };
        open(
            "SPY".to_string(),
            spread,
            2,
            dummy_greeks(-0.2),
            dec!(200.0),
            dec!(0.05),
            now(),
            dec!(4.0),
        )
        .unwrap()
    }

    #[test]
    fn sizing_applies_all_multipliers_and_floors_at_one() {
        let inputs = SizingInputs {
            balance: dec!(100),
            max_risk_per_trade: dec!(0.02),
            max_loss: dec!(400),
            delta: 0.6,
            theta: -25.0,
            vega: 60.0,
            time_to_expiration: 0.001,
        };
        assert_eq!(size_position(&inputs), 1);
    }

    #[test]
    fn open_rejects_thin_credit() {
        let spread = SpreadDescriptor::BullPut {
            sell_put: contract(dec!(440), OptionStyle::Put),
            buy_put: contract(dec!(435), OptionStyle::Put),
            net_credit: dec!(0.01),
            max_profit: dec!(0.01),
            max_loss: dec!(4.99),
            breakeven: dec!(439.99),
            pop: 0.6,
        };
        let result = open(
            "SPY".to_string(),
            spread,
            1,
            dummy_greeks(-0.1),
            dec!(1.0),
            dec!(0.05),
            now(),
            dec!(4.99),
        );
        assert!(result.is_err());
    }

    #[test]
    fn profit_target_fires_before_other_rules() {
        let mut position = bull_put_position();
        position.current.pnl = dec!(500);
        let reason = adjudicate_exit(
            &position,
            dec!(450),
            &[dec!(440)],
            now(),
            0.2,
            0.2,
            &ExitParams::default(),
        );
        assert_eq!(reason, Some(ExitReason::ProfitTarget));
    }

    #[test]
    fn expiration_fires_when_nothing_else_does() {
        let position = bull_put_position();
        let later = position.entry.timestamp + chrono::Duration::hours(3);
        let reason = adjudicate_exit(
            &position,
            dec!(450),
            &[dec!(440)],
            later,
            0.2,
            0.2,
            &ExitParams::default(),
        );
        assert_eq!(reason, Some(ExitReason::Expiration));
    }

    #[test]
    fn vol_expansion_fires_when_iv_spikes() {
        let position = bull_put_position();
        let reason = adjudicate_exit(
            &position,
            dec!(450),
            &[dec!(440)],
            now(),
            0.2,
            0.5,
            &ExitParams::default(),
        );
        assert_eq!(reason, Some(ExitReason::VolExpansion));
    }

    #[test]
    fn close_computes_pnl_pct_against_initial_balance() {
        let mut position = bull_put_position();
        position.current.pnl = dec!(50);
        let (_, record) = close(position, ExitReason::ProfitTarget, now(), dec!(1000)).unwrap();
        assert_eq!(record.pnl_pct, dec!(5));
    }

    fn iron_condor_position() -> Position {
        let spread = SpreadDescriptor::IronCondor {
            sell_put: contract(dec!(440), OptionStyle::Put),
            buy_put: contract(dec!(435), OptionStyle::Put),
            sell_call: contract(dec!(460), OptionStyle::Call),
            buy_call: contract(dec!(465), OptionStyle::Call),
            net_credit: dec!(1.0),
            max_profit: dec!(1.0),
            max_loss: dec!(4.0),
            pop: 0.6,
        };
        open("SPY".to_string(), spread, 2, dummy_greeks(0.0), dec!(200.0), dec!(0.05), now(), dec!(4.0)).unwrap()
    }

    fn bear_call_position() -> Position {
        let spread = SpreadDescriptor::BearCall {
            sell_call: contract(dec!(460), OptionStyle::Call),
            buy_call: contract(dec!(465), OptionStyle::Call),
            net_credit: dec!(1.0),
            max_profit: dec!(1.0),
            max_loss: dec!(4.0),
            breakeven: dec!(461),
            pop: 0.6,
        };
        open("SPY".to_string(), spread, 2, dummy_greeks(0.2), dec!(200.0), dec!(0.05), now(), dec!(4.0)).unwrap()
    }

    #[test]
    fn condor_takes_profit_at_thirty_percent_of_max_loss() {
        let mut position = iron_condor_position();
        // entry credit is 1.0/contract, qty=2 -> notional credit = 200. 30% of
        // that is 60, which the default 50% fraction (100) would not yet fire on.
        position.current.pnl = dec!(70);
        let reason = adjudicate_exit(&position, dec!(450), &[dec!(440), dec!(460)], now(), 0.2, 0.2, &ExitParams::default());
        assert_eq!(reason, Some(ExitReason::ProfitTarget));
    }

    #[test]
    fn bear_call_takes_profit_at_sixty_percent_not_fifty() {
        // entry credit is 1.0/contract, qty=2 -> notional credit = 200. The
        // default fraction (0.5) fires at 100, the bear-call override (0.6)
        // fires at 120. 110 sits between the two.
        let mut below_override = bear_call_position();
        below_override.current.pnl = dec!(110);
        let reason = adjudicate_exit(&below_override, dec!(450), &[dec!(460)], now(), 0.2, 0.2, &ExitParams::default());
        assert_eq!(reason, None, "110 is under the 60% override threshold of 120");

        let mut at_override = bear_call_position();
        at_override.current.pnl = dec!(120);
        let reason = adjudicate_exit(&at_override, dec!(450), &[dec!(460)], now(), 0.2, 0.2, &ExitParams::default());
        assert_eq!(reason, Some(ExitReason::ProfitTarget));
    }

    #[test]
    fn bear_call_times_out_after_eighteen_days_not_twenty_one() {
        let position = bear_call_position();
        let eighteen_days_later = position.entry.timestamp + chrono::Duration::days(19);
        let reason = adjudicate_exit(&position, dec!(450), &[dec!(460)], eighteen_days_later, 0.2, 0.2, &ExitParams::default());
        assert_eq!(reason, Some(ExitReason::TimeLimit));
    }
}
