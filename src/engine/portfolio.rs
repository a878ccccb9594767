/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Portfolio State
//!
//! Cash balance, open/closed positions, equity curve, and drawdown tracking
//! for a running engine. The equity-curve/drawdown shape follows the usual
//! peak-to-trough time-series pattern, updated incrementally cycle-by-cycle
//! instead of once at the end of a batch run.

use crate::engine::position::{Position, TradeRecord};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single point on the equity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquityPoint {
    /// When this sample was taken.
    pub timestamp: DateTime<Utc>,
    /// Account equity (cash plus mark-to-market of open positions).
    pub equity: Decimal,
}

/// Running portfolio state the scheduler owns and updates every cycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioState {
    /// Cash balance, excludes unrealized P&L.
    pub cash_balance: Decimal,
    /// Highest equity ever observed, used for drawdown.
    pub peak_balance: Decimal,
    /// Currently open positions.
    pub open_positions: Vec<Position>,
    /// Closed trade records, in closing order.
    pub closed_trades: Vec<TradeRecord>,
    /// Equity curve samples, one per cycle.
    pub equity_curve: Vec<EquityPoint>,
    /// Largest peak-to-trough drawdown observed so far, as a fraction.
    pub max_drawdown: Decimal,
    /// Realized P&L accumulated during the current trading day, reset at
    /// each session boundary by the caller.
    pub daily_realized_loss: Decimal,
}

impl PortfolioState {
    /// Starts a fresh portfolio with `starting_cash` and no positions.
    pub fn new(starting_cash: Decimal) -> Self {
        PortfolioState {
            cash_balance: starting_cash,
            peak_balance: starting_cash,
            open_positions: Vec::new(),
            closed_trades: Vec::new(),
            equity_curve: vec![EquityPoint {
                timestamp: Utc::now(),
                equity: starting_cash,
            }],
            max_drawdown: Decimal::ZERO,
            daily_realized_loss: Decimal::ZERO,
        }
    }

    /// Current equity: cash plus the running P&L of every open position.
    pub fn equity(&self) -> Decimal {
        self.cash_balance + self.open_positions.iter().map(|p| p.current.pnl).sum::<Decimal>()
    }

    /// Records a new equity sample and updates `peak_balance`/`max_drawdown`.
    pub fn sample_equity(&mut self, timestamp: DateTime<Utc>) {
        let equity = self.equity();
        self.equity_curve.push(EquityPoint { timestamp, equity });
        if equity > self.peak_balance {
            self.peak_balance = equity;
        }
        if self.peak_balance > Decimal::ZERO {
            let drawdown = (self.peak_balance - equity) / self.peak_balance;
            if drawdown > self.max_drawdown {
                self.max_drawdown = drawdown;
            }
        }
    }

    /// Moves `position` into `open_positions` and debits nothing from cash
    /// (the net credit was already reflected at fill time by the caller).
    pub fn track_open(&mut self, position: Position) {
        self.open_positions.push(position);
    }

    /// Removes the position with `position_id` from `open_positions`,
    /// credits its realized P&L to cash, and appends `record` to the trade
    /// log. No-op on the open-positions side if the id is not found (the
    /// trade record is still recorded).
    pub fn track_close(&mut self, position_id: uuid::Uuid, record: TradeRecord) {
        self.open_positions.retain(|p| p.id != position_id);
        self.cash_balance += record.realized_pnl;
        if record.realized_pnl < Decimal::ZERO {
            self.daily_realized_loss += record.realized_pnl;
        }
        self.closed_trades.push(record);
    }

    /// Resets the daily realized-loss counter at a new session boundary.
    pub fn reset_daily_loss(&mut self) {
        self.daily_realized_loss = Decimal::ZERO;
    }

    /// Win rate across closed trades, or `None` if none have closed yet.
    pub fn win_rate(&self) -> Option<Decimal> {
        if self.closed_trades.is_empty() {
            return None;
        }
        let wins = self.closed_trades.iter().filter(|t| t.realized_pnl > Decimal::ZERO).count();
        Some(Decimal::from(wins) / Decimal::from(self.closed_trades.len()))
    }

    /// Annualized Sharpe ratio computed from per-cycle equity returns,
    /// assuming `periods_per_year` cycles make up a year (e.g. 252 for daily
    /// bars, ~98280 for 1-minute bars during market hours). `None` if fewer
    /// than two equity samples exist or the return series has zero variance.
    pub fn sharpe_ratio(&self, periods_per_year: f64) -> Option<f64> {
        if self.equity_curve.len() < 2 {
            return None;
        }
        let returns: Vec<f64> = self
            .equity_curve
            .windows(2)
            .filter_map(|w| {
                let prev = w[0].equity.to_f64()?;
                let next = w[1].equity.to_f64()?;
                if prev == 0.0 { None } else { Some((next - prev) / prev) }
            })
            .collect();
        if returns.is_empty() {
            return None;
        }
        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;
        let std_dev = variance.sqrt();
        if std_dev == 0.0 {
            return None;
        }
        Some(mean / std_dev * periods_per_year.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::greeks::GreeksSnapshot;
    use crate::engine::position::PositionSnapshot;
    use crate::engine::spreads::SpreadDescriptor;
    use crate::engine::chain::OptionContract;
    use crate::model::types::OptionStyle;

    fn zero_greeks() -> GreeksSnapshot {
        GreeksSnapshot {
            timestamp: Utc::now(),
            underlying_price: dec!(450),
            time_to_expiration: 0.01,
            iv: 0.2,
            rfr: 0.05,
            delta: 0.0,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
            rho: 0.0,
        }
    }

    fn sample_position(pnl: Decimal) -> Position {
        let contract = OptionContract {
            underlying_symbol: "SPY".to_string(),
            strike_price: dec!(450),
            option_style: OptionStyle::Call,
            expiration: Utc::now(),
            bid: dec!(1.0),
            ask: dec!(1.1),
            mid: dec!(1.05),
            implied_volatility: 0.2,
            delta: 0.2,
            open_interest: 100,
            volume: 50,
        };
        let snapshot = PositionSnapshot {
            timestamp: Utc::now(),
            price: dec!(1.0),
            greeks: zero_greeks(),
            pnl,
        };
        Position {
            id: uuid::Uuid::new_v4(),
            symbol: "SPY".to_string(),
            spread: SpreadDescriptor::NakedCall { contract, qty: 1 },
            qty: 1,
            entry: snapshot,
            current: snapshot,
            max_loss: dec!(100),
            risk_score: 10,
            state: crate::engine::position::PositionState::Open,
            max_pnl: pnl,
            min_pnl: pnl,
        }
    }

    #[test]
    fn new_portfolio_starts_at_cash_with_one_equity_sample() {
        let portfolio = PortfolioState::new(dec!(10000));
        assert_eq!(portfolio.equity(), dec!(10000));
        assert_eq!(portfolio.equity_curve.len(), 1);
    }

    #[test]
    fn open_position_pnl_is_reflected_in_equity() {
        let mut portfolio = PortfolioState::new(dec!(10000));
        portfolio.track_open(sample_position(dec!(50)));
        assert_eq!(portfolio.equity(), dec!(10050));
    }

    #[test]
    fn drawdown_tracks_peak_to_trough() {
        let mut portfolio = PortfolioState::new(dec!(10000));
        portfolio.track_open(sample_position(dec!(500)));
        portfolio.sample_equity(Utc::now());
        assert_eq!(portfolio.peak_balance, dec!(10500));

        portfolio.open_positions[0].current.pnl = dec!(-1000);
        portfolio.sample_equity(Utc::now());
        assert!(portfolio.max_drawdown > Decimal::ZERO);
    }

    #[test]
    fn closing_a_losing_trade_accumulates_daily_loss() {
        let mut portfolio = PortfolioState::new(dec!(10000));
        let position = sample_position(Decimal::ZERO);
        let id = position.id;
        portfolio.track_open(position);

        let record = TradeRecord {
            position_id: id,
            symbol: "SPY".to_string(),
            spread: sample_position(Decimal::ZERO).spread,
            qty: 1,
            entry_timestamp: Utc::now(),
            exit_timestamp: Utc::now(),
            exit_price: dec!(0),
            exit_reason: crate::engine::position::ExitReason::StopLoss,
            realized_pnl: dec!(-200),
            pnl_pct: dec!(-2),
        };
        portfolio.track_close(id, record);
        assert!(portfolio.open_positions.is_empty());
        assert_eq!(portfolio.cash_balance, dec!(9800));
        assert_eq!(portfolio.daily_realized_loss, dec!(-200));
    }

    #[test]
    fn sharpe_ratio_is_none_with_a_single_sample() {
        let portfolio = PortfolioState::new(dec!(10000));
        assert!(portfolio.sharpe_ratio(252.0).is_none());
    }

    #[test]
    fn sharpe_ratio_is_positive_for_a_monotonic_uptrend() {
        let mut portfolio = PortfolioState::new(dec!(10000));
        let mut equity = dec!(10000);
        for _ in 0..10 {
            equity += dec!(10);
            portfolio.equity_curve.push(EquityPoint {
                timestamp: Utc::now(),
                equity,
            });
        }
        let sharpe = portfolio.sharpe_ratio(252.0).unwrap();
        assert!(sharpe > 0.0);
    }
}
