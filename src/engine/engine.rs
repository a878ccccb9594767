/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Engine
//!
//! The public entry point: wires a broker adapter, strategy configuration,
//! portfolio state, and event bus into a single handle with `start`/`stop`/
//! `changeTimeframe`/`getStatus` semantics, running either a historical
//! replay or a live interval-driven loop underneath.

use crate::engine::bar::BarWindow;
use crate::engine::broker::BrokerAdapter;
use crate::engine::config::{StrategyConfig, Timeframe};
use crate::engine::events::{EngineEvent, EngineEventBus};
use crate::engine::governor::RiskThresholds;
use crate::engine::greeks::GreeksSnapshot;
use crate::engine::position::Position;
use crate::engine::portfolio::PortfolioState;
use crate::engine::scheduler::{self, CycleContext};
use crate::error::EngineError;
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::RwLock;
use tracing::{info, warn};
use utoipa::ToSchema;

/// Which side of the greeks/risk caps a running engine is tracking, returned
/// from [`Engine::get_status`] alongside the scalar performance fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioGreeksSummary {
    /// Net portfolio delta.
    pub delta: f64,
    /// Net portfolio gamma.
    pub gamma: f64,
    /// Net portfolio theta per day.
    pub theta: f64,
    /// Net portfolio vega per 1% vol.
    pub vega: f64,
}

impl PortfolioGreeksSummary {
    fn from_snapshots<'a>(snapshots: impl Iterator<Item = &'a GreeksSnapshot>) -> Self {
        let mut summary = PortfolioGreeksSummary {
            delta: 0.0,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
        };
        for snap in snapshots {
            summary.delta += snap.delta;
            summary.gamma += snap.gamma;
            summary.theta += snap.theta;
            summary.vega += snap.vega;
        }
        summary
    }
}

/// Notional and concentration read on the currently open book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioRiskSummary {
    /// Sum of `|entryPrice · qty · 100|` across open positions.
    pub total_notional: Decimal,
    /// Number of open positions.
    pub open_position_count: usize,
}

/// Full status snapshot returned by [`Engine::get_status`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EngineStatus {
    /// Whether the cycle loop is currently running.
    pub is_running: bool,
    /// Configured bar timeframe.
    pub timeframe: Timeframe,
    /// Seconds since the engine last started, `0` if not running.
    pub uptime_seconds: i64,
    /// Total closed trades.
    pub total_trades: usize,
    /// Fraction of closed trades that were profitable, `None` with no closes yet.
    pub win_rate: Option<Decimal>,
    /// Realized plus unrealized P&L since inception.
    pub total_pnl: Decimal,
    /// Unrealized P&L across open positions only.
    pub unrealized_pnl: Decimal,
    /// Current account equity.
    pub current_balance: Decimal,
    /// Largest peak-to-trough drawdown observed, as a fraction.
    pub max_drawdown: Decimal,
    /// Annualized Sharpe ratio, `None` if too few samples exist.
    pub sharpe_ratio: Option<f64>,
    /// Currently open positions.
    pub open_positions: Vec<Position>,
    /// Aggregate Greeks across open positions.
    pub portfolio_greeks: PortfolioGreeksSummary,
    /// Aggregate notional/concentration read on open positions.
    pub portfolio_risk: PortfolioRiskSummary,
    /// When the next cycle is expected to run, `None` in replay mode once
    /// finished or while stopped.
    pub next_check_time: Option<DateTime<Utc>>,
    /// Whether naked-option strategies are enabled for this run.
    pub enabled_features: Vec<String>,
}

/// Result of [`Engine::start`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StartResult {
    /// Whether the engine is now running.
    pub ok: bool,
    /// Human-readable status message.
    pub msg: String,
}

/// The top-level engine handle. Holds the broker adapter, strategy
/// configuration, and shared mutable state (`PortfolioState`) behind a lock
/// the cycle task is the sole writer of, per the single-writer concurrency
/// model the scheduler implements.
pub struct Engine {
    broker: Arc<dyn BrokerAdapter>,
    config: RwLock<StrategyConfig>,
    risk_thresholds: RiskThresholds,
    portfolio: Arc<RwLock<PortfolioState>>,
    events: Arc<EngineEventBus>,
    running: Arc<AtomicBool>,
    started_at: RwLock<Option<DateTime<Utc>>>,
    symbol: String,
}

impl Engine {
    /// Builds a stopped engine for `symbol`, seeded with `starting_cash`.
    pub fn new(
        symbol: impl Into<String>,
        broker: Arc<dyn BrokerAdapter>,
        config: StrategyConfig,
        risk_thresholds: RiskThresholds,
        starting_cash: Decimal,
    ) -> Self {
        Engine::from_portfolio(symbol, broker, config, risk_thresholds, PortfolioState::new(starting_cash))
    }

    /// Builds a stopped engine for `symbol` from an already-assembled
    /// `PortfolioState` — the persistence round-trip path: deserialize a
    /// previously saved `PortfolioState` and resume from it rather than
    /// starting flat at `starting_cash`. Replaying zero timestamps afterward
    /// reproduces `getStatus()` exactly as it was before the save.
    pub fn from_portfolio(
        symbol: impl Into<String>,
        broker: Arc<dyn BrokerAdapter>,
        config: StrategyConfig,
        risk_thresholds: RiskThresholds,
        portfolio: PortfolioState,
    ) -> Self {
        Engine {
            broker,
            config: RwLock::new(config),
            risk_thresholds,
            portfolio: Arc::new(RwLock::new(portfolio)),
            events: Arc::new(EngineEventBus::default()),
            running: Arc::new(AtomicBool::new(false)),
            started_at: RwLock::new(None),
            symbol: symbol.into(),
        }
    }

    /// Subscribes to the semantic event stream (`started, stopped,
    /// tradeExecuted, positionClosed, performanceUpdate, cycleComplete,
    /// error`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Starts the live interval-driven cycle loop. Returns immediately after
    /// flipping the running flag; the caller is expected to keep the
    /// returned future alive for as long as the engine should run, polling
    /// [`Engine::is_running`] (e.g. from a signal handler) to stop it.
    pub async fn start(&self) -> Result<StartResult, EngineError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Ok(StartResult {
                ok: false,
                msg: "engine is already running".to_string(),
            });
        }
        let now = Utc::now();
        *self.started_at.write().await = Some(now);
        info!(symbol = %self.symbol, "engine started");

        let config = self.config.read().await.clone();
        let mut portfolio = self.portfolio.write().await;
        let running = Arc::clone(&self.running);
        let broker = Arc::clone(&self.broker);
        let events = Arc::clone(&self.events);

        let mut ctx = CycleContext {
            broker: broker.as_ref(),
            config: &config,
            portfolio: &mut *portfolio,
            events: events.as_ref(),
            risk_thresholds: &self.risk_thresholds,
            rfr: 0.05,
            vix: None,
            last_close: None,
            rng: StdRng::seed_from_u64(config.cost_model_seed),
            bar_window: BarWindow::default(),
        };

        let symbol = self.symbol.clone();
        let should_run = move || running.load(Ordering::SeqCst);
        let result = scheduler::run_live(&mut ctx, &symbol, should_run).await;

        self.running.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => Ok(StartResult {
                ok: true,
                msg: "engine stopped after live loop exited".to_string(),
            }),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                warn!(error = %err, "live loop ended with a recoverable error");
                Ok(StartResult {
                    ok: true,
                    msg: format!("engine stopped: {err}"),
                })
            }
        }
    }

    /// Runs a historical replay over `timestamps` using the configured
    /// broker adapter (normally a [`crate::engine::broker::ReplayBrokerAdapter`]).
    pub async fn run_replay(&self, timestamps: &[DateTime<Utc>]) -> Result<(), EngineError> {
        self.running.store(true, Ordering::SeqCst);
        *self.started_at.write().await = Some(Utc::now());

        let config = self.config.read().await.clone();
        let mut portfolio = self.portfolio.write().await;
        let mut ctx = CycleContext {
            broker: self.broker.as_ref(),
            config: &config,
            portfolio: &mut *portfolio,
            events: self.events.as_ref(),
            risk_thresholds: &self.risk_thresholds,
            rfr: 0.05,
            vix: None,
            last_close: None,
            rng: StdRng::seed_from_u64(config.cost_model_seed),
            bar_window: BarWindow::default(),
        };
        let result = scheduler::run_replay(&mut ctx, &self.symbol, timestamps).await;

        self.running.store(false, Ordering::SeqCst);
        result
    }

    /// Signals the live loop to stop after its current cycle completes.
    /// Takes effect on the next `should_run` poll inside [`Engine::start`].
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// True while the cycle loop is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Changes the bar timeframe. Rejected while the engine is running —
    /// the live loop reads its interval once at the top of [`Engine::start`].
    pub async fn change_timeframe(&self, timeframe: Timeframe) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::InvariantViolation {
                detail: "cannot change timeframe while the engine is running".to_string(),
            });
        }
        self.config.write().await.timeframe = timeframe;
        Ok(())
    }

    /// Full status snapshot: running state, performance, open positions,
    /// aggregate Greeks/risk, and the next scheduled check time.
    pub async fn get_status(&self) -> EngineStatus {
        let config = self.config.read().await;
        let portfolio = self.portfolio.read().await;
        let started_at = *self.started_at.read().await;
        let is_running = self.is_running();

        let uptime_seconds = started_at.map(|t| (Utc::now() - t).num_seconds()).unwrap_or(0);
        let unrealized_pnl: Decimal = portfolio.open_positions.iter().map(|p| p.current.pnl).sum();
        let realized_pnl: Decimal = portfolio.closed_trades.iter().map(|t| t.realized_pnl).sum();
        let total_notional: Decimal = portfolio
            .open_positions
            .iter()
            .map(|p| (p.entry.price * Decimal::from(p.qty) * Decimal::from(100)).abs())
            .sum();

        let mut enabled_features = Vec::new();
        if config.use_naked_options {
            enabled_features.push("naked_options".to_string());
        }

        let next_check_time = if is_running {
            started_at.map(|_| Utc::now() + chrono::Duration::seconds(config.timeframe.as_seconds() as i64))
        } else {
            None
        };

        EngineStatus {
            is_running,
            timeframe: config.timeframe,
            uptime_seconds,
            total_trades: portfolio.closed_trades.len(),
            win_rate: portfolio.win_rate(),
            total_pnl: realized_pnl + unrealized_pnl,
            unrealized_pnl,
            current_balance: portfolio.equity(),
            max_drawdown: portfolio.max_drawdown,
            sharpe_ratio: portfolio.sharpe_ratio(per_year_for(config.timeframe)),
            open_positions: portfolio.open_positions.clone(),
            portfolio_greeks: PortfolioGreeksSummary::from_snapshots(
                portfolio.open_positions.iter().map(|p| &p.current.greeks),
            ),
            portfolio_risk: PortfolioRiskSummary {
                total_notional,
                open_position_count: portfolio.open_positions.len(),
            },
            next_check_time,
            enabled_features,
        }
    }

    /// The aggregate Greeks/notional/concentration thresholds this engine
    /// was built with.
    pub fn risk_thresholds(&self) -> &RiskThresholds {
        &self.risk_thresholds
    }

    /// Clones the current `PortfolioState` out of the engine, for callers
    /// that want to persist it (e.g. to disk) and later resume from it via
    /// [`Engine::from_portfolio`].
    pub async fn portfolio_snapshot(&self) -> PortfolioState {
        self.portfolio.read().await.clone()
    }
}

fn per_year_for(timeframe: Timeframe) -> f64 {
    let seconds_per_year = 252.0 * 6.5 * 3600.0;
    seconds_per_year / timeframe.as_seconds().to_f64().unwrap_or(60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::broker::ReplayBrokerAdapter;
    use rust_decimal_macros::dec;

    fn empty_adapter() -> Arc<dyn BrokerAdapter> {
        Arc::new(ReplayBrokerAdapter::new(vec![], vec![], dec!(10000)))
    }

    #[tokio::test]
    async fn a_fresh_engine_is_not_running_and_has_one_equity_sample() {
        let engine = Engine::new(
            "SPY",
            empty_adapter(),
            StrategyConfig::default(),
            RiskThresholds::default(),
            dec!(10000),
        );
        assert!(!engine.is_running());
        let status = engine.get_status().await;
        assert!(!status.is_running);
        assert_eq!(status.current_balance, dec!(10000));
        assert_eq!(status.total_trades, 0);
    }

    #[tokio::test]
    async fn replay_with_no_timestamps_completes_immediately() {
        let engine = Engine::new(
            "SPY",
            empty_adapter(),
            StrategyConfig::default(),
            RiskThresholds::default(),
            dec!(10000),
        );
        engine.run_replay(&[]).await.unwrap();
        assert!(!engine.is_running());
    }

    #[tokio::test]
    async fn changing_timeframe_while_stopped_succeeds() {
        let engine = Engine::new(
            "SPY",
            empty_adapter(),
            StrategyConfig::default(),
            RiskThresholds::default(),
            dec!(10000),
        );
        engine.change_timeframe(Timeframe::FiveMinutes).await.unwrap();
        let status = engine.get_status().await;
        assert_eq!(status.timeframe, Timeframe::FiveMinutes);
    }

    #[tokio::test]
    async fn subscribers_receive_started_and_stopped_around_a_replay() {
        let engine = Engine::new(
            "SPY",
            empty_adapter(),
            StrategyConfig::default(),
            RiskThresholds::default(),
            dec!(10000),
        );
        let mut rx = engine.subscribe();
        engine.run_replay(&[]).await.unwrap();
        let first = rx.recv().await.unwrap();
        assert!(matches!(first, EngineEvent::Started { .. }));
        let second = rx.recv().await.unwrap();
        assert!(matches!(second, EngineEvent::Stopped { .. }));
    }
}
