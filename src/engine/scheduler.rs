/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Engine Scheduler
//!
//! Drives the five-step per-cycle algorithm (refresh data, monitor and exit,
//! admit new entries, update bookkeeping, emit events) and runs it either
//! against a historical replay or a live broker on a fixed tick. One
//! algorithm, two drivers: a replay driver that iterates a fixed timestamp
//! list, and a live driver that calls the same cycle on a
//! `tokio::time::interval`.

use crate::engine::bar::BarWindow;
use crate::engine::broker::{BarTimeframe, BrokerAdapter};
use crate::engine::chain::OptionsChain;
use crate::engine::config::StrategyConfig;
use crate::engine::costs::{self, MarketCondition};
use crate::engine::events::{EngineEvent, EngineEventBus};
use crate::engine::governor::{self, PortfolioAggregate, PositionNotional, RiskThresholds};
use crate::engine::greeks::{self, GreeksLeg};
use crate::engine::indicators;
use crate::engine::position::{self, ExitParams, ExitReason, SizingInputs};
use crate::engine::portfolio::PortfolioState;
use crate::engine::regime::{self, MarketRegime};
use crate::engine::selector::{self, GateOutcome, StrategyKind};
use crate::engine::spreads::{SpreadDescriptor, bear_call, bull_put, iron_condor, naked};
use crate::error::EngineError;
use crate::model::types::{Action, Side};
use chrono::{DateTime, Duration as ChronoDuration, Timelike, Utc};
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::time::Duration as StdDuration;
use tracing::{debug, error, info, warn};

/// Decomposes `spread` into per-leg Greeks inputs.
fn spread_legs(spread: &SpreadDescriptor) -> Vec<GreeksLeg> {
    let leg = |strike: Decimal, is_call: bool, side: Side, iv: f64, qty: u32| GreeksLeg {
        strike_price: strike.to_f64().unwrap_or(0.0),
        is_call,
        side,
        quantity: qty,
        iv,
    };
    match spread {
        SpreadDescriptor::NakedCall { contract, qty } => {
            vec![leg(contract.strike_price, true, Side::Short, contract.implied_volatility, *qty)]
        }
        SpreadDescriptor::NakedPut { contract, qty } => {
            vec![leg(contract.strike_price, false, Side::Short, contract.implied_volatility, *qty)]
        }
        SpreadDescriptor::BullPut { sell_put, buy_put, .. } => vec![
            leg(sell_put.strike_price, false, Side::Short, sell_put.implied_volatility, 1),
            leg(buy_put.strike_price, false, Side::Long, buy_put.implied_volatility, 1),
        ],
        SpreadDescriptor::BearCall { sell_call, buy_call, .. } => vec![
            leg(sell_call.strike_price, true, Side::Short, sell_call.implied_volatility, 1),
            leg(buy_call.strike_price, true, Side::Long, buy_call.implied_volatility, 1),
        ],
        SpreadDescriptor::IronCondor {
            sell_put,
            buy_put,
            sell_call,
            buy_call,
            ..
        } => vec![
            leg(sell_put.strike_price, false, Side::Short, sell_put.implied_volatility, 1),
            leg(buy_put.strike_price, false, Side::Long, buy_put.implied_volatility, 1),
            leg(sell_call.strike_price, true, Side::Short, sell_call.implied_volatility, 1),
            leg(buy_call.strike_price, true, Side::Long, buy_call.implied_volatility, 1),
        ],
    }
}

/// The short-leg strikes of `spread`, used by the price-breach exit rule.
fn short_strikes(spread: &SpreadDescriptor) -> Vec<Decimal> {
    match spread {
        SpreadDescriptor::NakedCall { contract, .. } | SpreadDescriptor::NakedPut { contract, .. } => {
            vec![contract.strike_price]
        }
        SpreadDescriptor::BullPut { sell_put, .. } => vec![sell_put.strike_price],
        SpreadDescriptor::BearCall { sell_call, .. } => vec![sell_call.strike_price],
        SpreadDescriptor::IronCondor { sell_put, sell_call, .. } => vec![sell_put.strike_price, sell_call.strike_price],
    }
}

/// Per-contract max loss used to size a new position. Defined-risk spreads
/// carry this in the descriptor; a naked leg's theoretical max loss is its
/// full notional (unbounded in principle, capped here at strike value).
fn max_loss_per_contract(spread: &SpreadDescriptor) -> Decimal {
    match spread {
        SpreadDescriptor::NakedCall { contract, .. } | SpreadDescriptor::NakedPut { contract, .. } => {
            contract.strike_price
        }
        SpreadDescriptor::BullPut { max_loss, .. }
        | SpreadDescriptor::BearCall { max_loss, .. }
        | SpreadDescriptor::IronCondor { max_loss, .. } => *max_loss,
    }
}

/// Re-prices `spread` at the current chain to get the actual fill-adjusted
/// net credit for `qty` contracts (total, not per-contract).
fn reprice_entry(spread: &SpreadDescriptor, qty: u32, rng: &mut StdRng) -> Result<Decimal, EngineError> {
    match spread {
        SpreadDescriptor::NakedCall { contract, .. } | SpreadDescriptor::NakedPut { contract, .. } => {
            let fill = costs::simulate_fill(Action::Sell, contract.bid, contract.ask, qty, MarketCondition::Normal, rng)?;
            Ok(fill.executed_price * Decimal::from(qty) * Decimal::from(100))
        }
        SpreadDescriptor::BullPut { net_credit, .. }
        | SpreadDescriptor::BearCall { net_credit, .. }
        | SpreadDescriptor::IronCondor { net_credit, .. } => Ok(*net_credit * Decimal::from(qty) * Decimal::from(100)),
    }
}

/// Mark-to-market closing debit for `spread` at the current chain, looked up
/// by strike/style from `chain`. Falls back to the entry price if a leg
/// can't be found (expired or delisted contract).
fn closing_debit(spread: &SpreadDescriptor, chain: &OptionsChain) -> Decimal {
    let mid_at = |strike: Decimal, style| {
        chain
            .at_strike(strike, style)
            .map(|c| c.mid)
            .unwrap_or(Decimal::ZERO)
    };
    use crate::model::types::OptionStyle;
    match spread {
        SpreadDescriptor::NakedCall { contract, .. } => mid_at(contract.strike_price, OptionStyle::Call),
        SpreadDescriptor::NakedPut { contract, .. } => mid_at(contract.strike_price, OptionStyle::Put),
        SpreadDescriptor::BullPut { sell_put, buy_put, .. } => {
            mid_at(sell_put.strike_price, OptionStyle::Put) - mid_at(buy_put.strike_price, OptionStyle::Put)
        }
        SpreadDescriptor::BearCall { sell_call, buy_call, .. } => {
            mid_at(sell_call.strike_price, OptionStyle::Call) - mid_at(buy_call.strike_price, OptionStyle::Call)
        }
        SpreadDescriptor::IronCondor {
            sell_put,
            buy_put,
            sell_call,
            buy_call,
            ..
        } => {
            (mid_at(sell_put.strike_price, OptionStyle::Put) - mid_at(buy_put.strike_price, OptionStyle::Put))
                + (mid_at(sell_call.strike_price, OptionStyle::Call) - mid_at(buy_call.strike_price, OptionStyle::Call))
        }
    }
}

/// Builds a candidate spread for `kind` from `chain`.
fn build_candidate(
    kind: StrategyKind,
    chain: &OptionsChain,
    regime: &MarketRegime,
    tte_years: f64,
    rfr: f64,
    config: &StrategyConfig,
) -> Option<SpreadDescriptor> {
    match kind {
        StrategyKind::BullPutSpread => bull_put::build(chain, regime, tte_years, rfr, config),
        StrategyKind::BearCallSpread => bear_call::build(chain, regime, tte_years, rfr, config),
        StrategyKind::IronCondor => iron_condor::build(chain, regime, tte_years, rfr, config),
        StrategyKind::NakedCall => naked::build_call(chain, config),
        StrategyKind::NakedPut => naked::build_put(chain, config),
    }
}

/// Shared context a single cycle reads and mutates. Owned by whichever
/// driver (replay or live) invokes [`run_cycle`].
pub struct CycleContext<'a> {
    /// The data/execution boundary.
    pub broker: &'a dyn BrokerAdapter,
    /// Strategy and risk configuration.
    pub config: &'a StrategyConfig,
    /// Running portfolio state, mutated in place.
    pub portfolio: &'a mut PortfolioState,
    /// Event bus cycle-level events are published on.
    pub events: &'a EngineEventBus,
    /// Aggregate Greeks/notional/concentration thresholds the governor checks
    /// new entries against.
    pub risk_thresholds: &'a RiskThresholds,
    /// Risk-free rate used by the Greeks/PoP kernels.
    pub rfr: f64,
    /// Current-session VIX, if available.
    pub vix: Option<f64>,
    /// Timestamp of the same-underlying position most recently closed, for
    /// the cooldown check.
    pub last_close: Option<DateTime<Utc>>,
    /// Fill/cost simulator RNG, seeded from `config.cost_model_seed` and
    /// advanced cycle over cycle so a replay is reproducible end to end.
    pub rng: StdRng,
    /// Rolling per-symbol bar history, capped at
    /// [`crate::engine::bar::DEFAULT_BAR_WINDOW`]. The broker is asked for a
    /// fixed trailing span every cycle; only bars newer than the window's
    /// last timestamp are appended, so indicators always read the capped
    /// history rather than the raw re-fetched span.
    pub bar_window: BarWindow,
}

/// Runs one full cycle: refresh data, monitor and exit, admit a new entry if
/// eligible, update equity bookkeeping, emit events. Data-fetch failures are
/// recoverable: the cycle degrades to monitoring only and does not error out.
pub async fn run_cycle(ctx: &mut CycleContext<'_>, symbol: &str, now: DateTime<Utc>) -> Result<(), EngineError> {
    let fetched = match ctx
        .broker
        .get_bars(symbol, now - ChronoDuration::days(5), now, BarTimeframe::FiveMinutes)
        .await
    {
        Ok(bars) => bars,
        Err(err) => {
            ctx.events.publish(EngineEvent::Error { message: err.to_string() });
            return Ok(());
        }
    };
    for bar in fetched {
        let is_new = ctx.bar_window.last().map(|last| bar.timestamp > last.timestamp).unwrap_or(true);
        if is_new {
            ctx.bar_window.push(bar)?;
        }
    }
    let bars = ctx.bar_window.as_slice();
    let chain = match ctx.broker.get_options_chain(symbol, Some(now)).await {
        Ok(chain) => chain,
        Err(err) => {
            ctx.events.publish(EngineEvent::Error { message: err.to_string() });
            return Ok(());
        }
    };
    if let Err(err) = chain.check_staleness(now, ctx.config.timeframe.as_seconds() as i64) {
        ctx.events.publish(EngineEvent::Error { message: err.to_string() });
        return Ok(());
    }

    // Step 2: monitor and exit.
    let exit_params = ExitParams {
        profit_target_fraction: ctx.config.profit_target_fraction,
        stop_loss_multiple: ctx.config.stop_loss_multiple,
        time_limit_days: ctx.config.time_limit_days,
    };
    let open_ids: Vec<_> = ctx.portfolio.open_positions.iter().map(|p| p.id).collect();
    for id in open_ids {
        let Some(index) = ctx.portfolio.open_positions.iter().position(|p| p.id == id) else {
            continue;
        };
        let tte_years = (ctx.portfolio.open_positions[index]
            .entry
            .greeks
            .time_to_expiration
            - (now - ctx.portfolio.open_positions[index].entry.timestamp).num_seconds() as f64 / (365.25 * 86400.0))
            .max(0.0);
        let legs = spread_legs(&ctx.portfolio.open_positions[index].spread);
        let greeks_now = greeks::portfolio(&legs, chain.underlying_price.to_f64().unwrap_or(0.0), tte_years, ctx.rfr, now);
        let debit = closing_debit(&ctx.portfolio.open_positions[index].spread, &chain);
        position::refresh(&mut ctx.portfolio.open_positions[index], debit, greeks_now, Decimal::ZERO, now);

        let strikes = short_strikes(&ctx.portfolio.open_positions[index].spread);
        let exit = position::adjudicate_exit(
            &ctx.portfolio.open_positions[index],
            chain.underlying_price,
            &strikes,
            now,
            ctx.portfolio.open_positions[index].entry.greeks.iv,
            greeks_now.iv,
            &exit_params,
        );
        if let Some(reason) = exit.filter(|r| exit_rule_enabled(*r, &ctx.config.exit_toggles)) {
            let position = ctx.portfolio.open_positions.remove(index);
            match position::close(position, reason, now, ctx.portfolio.cash_balance) {
                Ok((_, record)) => {
                    if let Err(err) = ctx.broker.close_position(&record.position_id.to_string()).await {
                        warn!(error = %err, "broker rejected close request; position already removed locally");
                    }
                    ctx.portfolio.track_close(record.position_id, record.clone());
                    ctx.last_close = Some(now);
                    ctx.events.publish(EngineEvent::PositionClosed {
                        record: Box::new(record),
                        reason,
                    });
                }
                Err(err) => {
                    error!(error = %err, "failed to close position");
                }
            }
        }
    }

    // Step 3: admit a new entry, if eligible.
    let cooldown_elapsed = ctx
        .last_close
        .map(|t| (now - t).num_seconds() >= ctx.config.cooldown_seconds)
        .unwrap_or(true);
    if ctx.portfolio.open_positions.len() < ctx.config.max_concurrent_positions && cooldown_elapsed {
        let indicator_params = &ctx.config.indicators;
        match indicators::compute(&bars, indicator_params) {
            Ok(_indicators) => {
                let regime = regime::classify(&bars, indicator_params);
                match selector::run_gates(&regime, &chain, ctx.vix, ctx.config) {
                    GateOutcome::Proceed { kind } => {
                        let expiration = chain.contracts.first().map(|c| c.expiration).unwrap_or(now);
                        let tte_years = ((expiration - now).num_seconds().max(0) as f64) / (365.25 * 86400.0);
                        if let Some(candidate) = build_candidate(kind, &chain, &regime, tte_years, ctx.rfr, ctx.config) {
                            admit_candidate(ctx, symbol, candidate, &chain, tte_years, now).await;
                        }
                    }
                    GateOutcome::NoTrade { reason } => {
                        info!(reason = %reason, "no trade this cycle");
                    }
                }
            }
            Err(err) => {
                debug!(error = %err, "skipping admission this cycle: insufficient indicator history");
            }
        }
    }

    // Step 4 & 5: bookkeeping and events.
    ctx.portfolio.sample_equity(now);
    ctx.events.publish(EngineEvent::PerformanceUpdate {
        balance: ctx.portfolio.equity(),
        drawdown: ctx.portfolio.max_drawdown,
    });
    ctx.events.publish(EngineEvent::CycleComplete { timestamp: now });
    Ok(())
}

fn exit_rule_enabled(reason: ExitReason, toggles: &crate::engine::config::ExitToggles) -> bool {
    match reason {
        ExitReason::ProfitTarget => toggles.profit_target,
        ExitReason::StopLoss => toggles.stop_loss,
        ExitReason::PriceBreach => toggles.price_breach,
        ExitReason::GreeksExit => toggles.greeks_exit,
        ExitReason::VolExpansion => toggles.vol_expansion,
        ExitReason::TimeLimit => toggles.time_limit,
        ExitReason::Expiration | ExitReason::EngineStopped => true,
    }
}

async fn admit_candidate(
    ctx: &mut CycleContext<'_>,
    symbol: &str,
    candidate: SpreadDescriptor,
    chain: &OptionsChain,
    tte_years: f64,
    now: DateTime<Utc>,
) {
    let max_loss = max_loss_per_contract(&candidate);
    let legs = spread_legs(&candidate);
    let one_lot_greeks = greeks::portfolio(&legs, chain.underlying_price.to_f64().unwrap_or(0.0), tte_years, ctx.rfr, now);

    let sizing = SizingInputs {
        balance: ctx.portfolio.cash_balance,
        max_risk_per_trade: ctx.config.max_risk_per_trade,
        max_loss,
        delta: one_lot_greeks.delta,
        theta: one_lot_greeks.theta,
        vega: one_lot_greeks.vega,
        time_to_expiration: tte_years,
    };
    let qty = position::size_position(&sizing);

    let notional = (max_loss * Decimal::from(qty) * Decimal::from(100)).abs();
    let existing_notional: Vec<PositionNotional> = ctx
        .portfolio
        .open_positions
        .iter()
        .map(|p| PositionNotional {
            notional: (p.max_loss * Decimal::from(p.qty) * Decimal::from(100)).abs(),
        })
        .collect();
    let mut projected_notional = existing_notional.clone();
    projected_notional.push(PositionNotional { notional });
    let total_notional: Decimal = projected_notional.iter().map(|p| p.notional).sum();

    let (existing_delta, existing_gamma, existing_theta, existing_vega) = ctx.portfolio.open_positions.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(d, g, t, v), p| {
            let n = p.qty as f64;
            (d + p.current.greeks.delta * n, g + p.current.greeks.gamma * n, t + p.current.greeks.theta * n, v + p.current.greeks.vega * n)
        },
    );
    let aggregate = PortfolioAggregate {
        delta: existing_delta + one_lot_greeks.delta * qty as f64,
        gamma: existing_gamma + one_lot_greeks.gamma * qty as f64,
        theta: existing_theta + one_lot_greeks.theta * qty as f64,
        vega: existing_vega + one_lot_greeks.vega * qty as f64,
        total_notional,
        balance: ctx.portfolio.cash_balance,
    };
    let outcome = governor::check(
        &aggregate,
        &projected_notional,
        ctx.portfolio.daily_realized_loss,
        ctx.config.daily_loss_limit,
        ctx.risk_thresholds,
    );
    if !outcome.admitted() {
        info!(reason = ?outcome.rejected, "governor rejected candidate");
        return;
    }

    let net_received = match reprice_entry(&candidate, qty, &mut ctx.rng) {
        Ok(amount) => amount,
        Err(err) => {
            ctx.events.publish(EngineEvent::Error { message: err.to_string() });
            return;
        }
    };

    match position::open(
        symbol.to_string(),
        candidate.clone(),
        qty,
        one_lot_greeks,
        net_received,
        ctx.config.min_net_credit_after_costs,
        now,
        max_loss,
    ) {
        Ok(position) => match submit_with_retries(ctx, &candidate, qty).await {
            Ok(_) => {
                ctx.portfolio.track_open(position.clone());
                ctx.events.publish(EngineEvent::TradeExecuted { position: Box::new(position) });
            }
            Err(err) => {
                ctx.events.publish(EngineEvent::Error { message: err.to_string() });
                error!(error = %err, "broker rejected entry order after retries; position not tracked");
            }
        },
        Err(err) => {
            info!(error = %err, "position open rejected");
        }
    }
}

/// Submits `candidate` to the broker, retrying up to
/// `ctx.config.max_order_retries` times on rejection before giving up with
/// `EngineError::OrderFailure`.
async fn submit_with_retries(
    ctx: &CycleContext<'_>,
    candidate: &SpreadDescriptor,
    qty: u32,
) -> Result<crate::engine::broker::OrderResult, EngineError> {
    let mut attempts = 0;
    loop {
        match ctx.broker.submit_spread_order(candidate, qty).await {
            Ok(result) => return Ok(result),
            Err(err) => {
                if attempts >= ctx.config.max_order_retries {
                    return Err(EngineError::OrderFailure {
                        reason: err.to_string(),
                        retries: attempts,
                    });
                }
                attempts += 1;
                warn!(attempt = attempts, error = %err, "broker rejected entry order, retrying");
            }
        }
    }
}

/// Replays `now`-stepped cycles over `timestamps` against `ctx`'s adapter,
/// which must already be a [`crate::engine::broker::ReplayBrokerAdapter`] or
/// equivalent. Stops early on the first fatal (`InvariantViolation`) error.
pub async fn run_replay(ctx: &mut CycleContext<'_>, symbol: &str, timestamps: &[DateTime<Utc>]) -> Result<(), EngineError> {
    ctx.events.publish(EngineEvent::Started { timestamp: Utc::now() });
    for &timestamp in timestamps {
        run_cycle(ctx, symbol, timestamp).await?;
    }
    ctx.events.publish(EngineEvent::Stopped { timestamp: Utc::now() });
    Ok(())
}

/// Drives cycles on a fixed wall-clock tick while `should_run` returns
/// `true`, skipping cycles outside `config.market_hours`.
pub async fn run_live(
    ctx: &mut CycleContext<'_>,
    symbol: &str,
    should_run: impl Fn() -> bool,
) -> Result<(), EngineError> {
    ctx.events.publish(EngineEvent::Started { timestamp: Utc::now() });
    let mut interval = tokio::time::interval(StdDuration::from_secs(ctx.config.timeframe.as_seconds()));
    while should_run() {
        interval.tick().await;
        let now = Utc::now();
        let minutes = now.hour() * 60 + now.minute();
        if minutes < ctx.config.market_hours.open_minutes || minutes >= ctx.config.market_hours.close_minutes {
            continue;
        }
        run_cycle(ctx, symbol, now).await?;
    }
    ctx.events.publish(EngineEvent::Stopped { timestamp: Utc::now() });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::broker::ReplayBrokerAdapter;
    use crate::engine::chain::OptionContract;
    use crate::engine::config::{StrategyConfig, StrategyConfigBuilder};
    use crate::model::types::OptionStyle;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    fn bar_at(ts: DateTime<Utc>, close: Decimal) -> crate::engine::bar::Bar {
        crate::engine::bar::Bar::new(ts, close, close + dec!(1), close - dec!(1), close, 1_000).unwrap()
    }

    fn sample_chain(now: DateTime<Utc>) -> OptionsChain {
        OptionsChain {
            underlying_symbol: "SPY".to_string(),
            underlying_price: dec!(450),
            as_of: now,
            contracts: vec![
                OptionContract {
                    underlying_symbol: "SPY".to_string(),
                    strike_price: dec!(440),
                    option_style: OptionStyle::Put,
                    expiration: now + ChronoDuration::hours(4),
                    bid: dec!(1.00),
                    ask: dec!(1.10),
                    mid: dec!(1.05),
                    implied_volatility: 0.20,
                    delta: -0.20,
                    open_interest: 500,
                    volume: 300,
                },
                OptionContract {
                    underlying_symbol: "SPY".to_string(),
                    strike_price: dec!(430),
                    option_style: OptionStyle::Put,
                    expiration: now + ChronoDuration::hours(4),
                    bid: dec!(0.40),
                    ask: dec!(0.50),
                    mid: dec!(0.45),
                    implied_volatility: 0.22,
                    delta: -0.10,
                    open_interest: 400,
                    volume: 250,
                },
            ],
        }
    }

    #[tokio::test]
    async fn a_cycle_with_no_history_skips_admission_without_erroring() {
        let now = Utc::now();
        let adapter = ReplayBrokerAdapter::new(vec![], vec![sample_chain(now)], dec!(10000));
        let config = StrategyConfig::default();
        let mut portfolio = PortfolioState::new(dec!(10000));
        let events = EngineEventBus::default();
        let thresholds = RiskThresholds::default();
        let mut ctx = CycleContext {
            broker: &adapter,
            config: &config,
            portfolio: &mut portfolio,
            events: &events,
            risk_thresholds: &thresholds,
            rfr: 0.05,
            vix: Some(15.0),
            last_close: None,
            rng: StdRng::seed_from_u64(config.cost_model_seed),
            bar_window: BarWindow::default(),
        };
        let result = run_cycle(&mut ctx, "SPY", now).await;
        assert!(result.is_ok());
        assert!(ctx.portfolio.open_positions.is_empty());
    }

    #[tokio::test]
    async fn replay_over_several_timestamps_completes() {
        let now = Utc::now();
        let bars: Vec<_> = (0..60).map(|i| bar_at(now - ChronoDuration::minutes(60 - i), dec!(450))).collect();
        let adapter = ReplayBrokerAdapter::new(bars, vec![sample_chain(now)], dec!(10000));
        let config = StrategyConfig::default();
        let mut portfolio = PortfolioState::new(dec!(10000));
        let events = EngineEventBus::default();
        let thresholds = RiskThresholds::default();
        let mut ctx = CycleContext {
            broker: &adapter,
            config: &config,
            portfolio: &mut portfolio,
            events: &events,
            risk_thresholds: &thresholds,
            rfr: 0.05,
            vix: Some(15.0),
            last_close: None,
            rng: StdRng::seed_from_u64(config.cost_model_seed),
            bar_window: BarWindow::default(),
        };
        let result = run_replay(&mut ctx, "SPY", &[now]).await;
        assert!(result.is_ok());
    }

    fn naked_call_candidate() -> SpreadDescriptor {
        SpreadDescriptor::NakedCall {
            contract: OptionContract {
                underlying_symbol: "SPY".to_string(),
                strike_price: dec!(460),
                option_style: OptionStyle::Call,
                expiration: Utc::now(),
                bid: dec!(1.00),
                ask: dec!(1.10),
                mid: dec!(1.05),
                implied_volatility: 0.20,
                delta: 0.20,
                open_interest: 500,
                volume: 300,
            },
            qty: 1,
        }
    }

    fn ctx_with_broker<'a>(
        broker: &'a dyn crate::engine::broker::BrokerAdapter,
        config: &'a StrategyConfig,
        portfolio: &'a mut PortfolioState,
        events: &'a EngineEventBus,
        thresholds: &'a RiskThresholds,
    ) -> CycleContext<'a> {
        CycleContext {
            broker,
            config,
            portfolio,
            events,
            risk_thresholds: thresholds,
            rfr: 0.05,
            vix: Some(15.0),
            last_close: None,
            rng: StdRng::seed_from_u64(config.cost_model_seed),
            bar_window: BarWindow::default(),
        }
    }

    #[tokio::test]
    async fn order_submission_retries_on_rejection_then_succeeds() {
        use crate::engine::broker::{MockBrokerAdapter, OrderResult};

        let mut mock = MockBrokerAdapter::new();
        let mut call_count = 0;
        mock.expect_submit_spread_order().times(3).returning(move |_, _| {
            call_count += 1;
            if call_count < 3 {
                Err(EngineError::DataUnavailable {
                    symbol: "SPY".to_string(),
                    reason: "broker momentarily unreachable".to_string(),
                })
            } else {
                Ok(OrderResult {
                    order_ids: vec!["order-1".to_string()],
                    status: "filled".to_string(),
                })
            }
        });

        let config = StrategyConfigBuilder::new().max_order_retries(2).build();
        let mut portfolio = PortfolioState::new(dec!(10000));
        let events = EngineEventBus::default();
        let thresholds = RiskThresholds::default();
        let ctx = ctx_with_broker(&mock, &config, &mut portfolio, &events, &thresholds);

        let result = submit_with_retries(&ctx, &naked_call_candidate(), 1).await;
        assert_eq!(result.unwrap().status, "filled");
    }

    #[tokio::test]
    async fn order_submission_exhausts_retry_budget_and_reports_order_failure() {
        use crate::engine::broker::MockBrokerAdapter;

        let mut mock = MockBrokerAdapter::new();
        mock.expect_submit_spread_order().times(2).returning(|_, _| {
            Err(EngineError::DataUnavailable {
                symbol: "SPY".to_string(),
                reason: "broker unreachable".to_string(),
            })
        });

        let config = StrategyConfigBuilder::new().max_order_retries(1).build();
        let mut portfolio = PortfolioState::new(dec!(10000));
        let events = EngineEventBus::default();
        let thresholds = RiskThresholds::default();
        let ctx = ctx_with_broker(&mock, &config, &mut portfolio, &events, &thresholds);

        let result = submit_with_retries(&ctx, &naked_call_candidate(), 1).await;
        match result {
            Err(EngineError::OrderFailure { retries, .. }) => assert_eq!(retries, 1),
            other => panic!("expected OrderFailure after exhausting retries, got {other:?}"),
        }
    }
}
