//! End-to-end scenario tests for the 0-DTE engine, covering the concrete
//! bull-put entry, IV-gate rejection, portfolio-Greeks rejection, and
//! expiration-settlement paths, plus a determinism check across two replay
//! runs over identical inputs.

use chrono::{Duration as ChronoDuration, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use zerodte_engine::engine::bar::Bar;
use zerodte_engine::engine::broker::ReplayBrokerAdapter;
use zerodte_engine::engine::chain::{OptionContract, OptionsChain};
use zerodte_engine::engine::config::StrategyConfig;
use zerodte_engine::engine::events::EngineEventBus;
use zerodte_engine::engine::governor::{self, PortfolioAggregate, PositionNotional, RiskThresholds};
use zerodte_engine::engine::portfolio::PortfolioState;
use zerodte_engine::engine::regime::{MarketRegime, Regime, RegimeSignals};
use zerodte_engine::engine::scheduler::{CycleContext, run_replay};
use zerodte_engine::engine::selector::{self, GateOutcome, StrategyKind};
use zerodte_engine::engine::spreads::{self, bull_put};
use zerodte_engine::model::types::OptionStyle;

fn spy_bull_put_chain(now: chrono::DateTime<Utc>) -> OptionsChain {
    OptionsChain {
        underlying_symbol: "SPY".to_string(),
        underlying_price: dec!(450),
        as_of: now,
        contracts: vec![
            OptionContract {
                underlying_symbol: "SPY".to_string(),
                strike_price: dec!(445),
                option_style: OptionStyle::Put,
                expiration: now + ChronoDuration::hours(4),
                bid: dec!(1.20),
                ask: dec!(1.25),
                mid: dec!(1.225),
                implied_volatility: 0.20,
                delta: -0.30,
                open_interest: 500,
                volume: 300,
            },
            OptionContract {
                underlying_symbol: "SPY".to_string(),
                strike_price: dec!(440),
                option_style: OptionStyle::Put,
                expiration: now + ChronoDuration::hours(4),
                bid: dec!(0.60),
                ask: dec!(0.65),
                mid: dec!(0.625),
                implied_volatility: 0.22,
                delta: -0.18,
                open_interest: 400,
                volume: 250,
            },
            // A few calls are also present so the chain isn't degenerately
            // one-sided; present in every scenario chain below too.
            OptionContract {
                underlying_symbol: "SPY".to_string(),
                strike_price: dec!(455),
                option_style: OptionStyle::Call,
                expiration: now + ChronoDuration::hours(4),
                bid: dec!(1.10),
                ask: dec!(1.20),
                mid: dec!(1.15),
                implied_volatility: 0.20,
                delta: 0.28,
                open_interest: 450,
                volume: 280,
            },
            OptionContract {
                underlying_symbol: "SPY".to_string(),
                strike_price: dec!(460),
                option_style: OptionStyle::Call,
                expiration: now + ChronoDuration::hours(4),
                bid: dec!(0.55),
                ask: dec!(0.60),
                mid: dec!(0.575),
                implied_volatility: 0.21,
                delta: 0.16,
                open_interest: 380,
                volume: 200,
            },
        ],
    }
}

fn bullish_regime() -> MarketRegime {
    MarketRegime {
        regime: Regime::Bullish,
        confidence: 75,
        signals: RegimeSignals {
            trend: dec!(65),
            volatility: dec!(0.20),
            momentum: dec!(0.01),
        },
        reasoning: vec!["RSI ramping 55->68, close above SMA20".to_string()],
    }
}

/// S1 — bull-put happy path: a bullish regime over a liquid chain selects
/// the 445/440 put credit spread with net credit around $0.55.
#[test]
fn s1_bullish_regime_selects_445_440_bull_put_with_expected_credit() {
    let now = Utc::now();
    let chain = spy_bull_put_chain(now);
    let regime = bullish_regime();
    let config = StrategyConfig::default();

    let outcome = selector::run_gates(&regime, &chain, Some(15.0), &config);
    assert_eq!(
        outcome,
        GateOutcome::Proceed {
            kind: StrategyKind::BullPutSpread
        }
    );

    let descriptor = bull_put::build(&chain, &regime, 4.0 / 24.0 / 365.0, 0.05, &config)
        .expect("a liquid 445/440 bull-put candidate must be found");
    match descriptor {
        spreads::SpreadDescriptor::BullPut {
            sell_put,
            buy_put,
            net_credit,
            ..
        } => {
            assert_eq!(sell_put.strike_price, dec!(445));
            assert_eq!(buy_put.strike_price, dec!(440));
            assert!(
                (net_credit - dec!(0.55)).abs() <= dec!(0.05),
                "expected net credit near $0.55, got {net_credit}"
            );
        }
        other => panic!("expected a BullPut descriptor, got {other:?}"),
    }
}

/// S3 — Iron Condor candidate in a NEUTRAL regime is rejected outright when
/// mean chain IV exceeds the volatility gate's ceiling; no error surfaces,
/// only a typed `NoTrade`.
#[test]
fn s3_high_mean_iv_fails_volatility_gate_with_no_trade() {
    let now = Utc::now();
    let mut chain = spy_bull_put_chain(now);
    for c in &mut chain.contracts {
        c.implied_volatility = 0.65;
    }
    let regime = MarketRegime {
        regime: Regime::Neutral,
        confidence: 60,
        signals: RegimeSignals {
            trend: dec!(50),
            volatility: dec!(0.65),
            momentum: dec!(0.0),
        },
        reasoning: vec![],
    };
    let config = StrategyConfig::default();

    let outcome = selector::run_gates(&regime, &chain, None, &config);
    match outcome {
        GateOutcome::NoTrade { reason } => {
            assert!(reason.contains("volatility gate"), "unexpected reason: {reason}");
        }
        GateOutcome::Proceed { .. } => panic!("a mean IV of 0.65 must fail the volatility gate"),
    }
}

/// S4 — a second candidate that would push net portfolio delta-dollars past
/// the configured cap is rejected by the governor; the existing position is
/// untouched (the governor only evaluates the hypothetical aggregate, it
/// does not mutate anything).
#[test]
fn s4_candidate_breaching_portfolio_delta_cap_is_rejected() {
    let thresholds = RiskThresholds {
        max_portfolio_delta_pct: dec!(0.02), // 2% of $25,000 = 500 delta-dollars.
        ..RiskThresholds::default()
    };
    let balance = dec!(25000);
    // One open position already contributes 450 delta-dollars; the candidate
    // would add another 120, breaching the 500 cap.
    let aggregate = PortfolioAggregate {
        delta: 450.0 + 120.0,
        gamma: 0.0,
        theta: 0.0,
        vega: 0.0,
        total_notional: dec!(10000),
        balance,
    };
    let positions = vec![PositionNotional { notional: dec!(4450) }];

    let outcome = governor::check(&aggregate, &positions, Decimal::ZERO, dec!(1250), &thresholds);
    assert!(!outcome.admitted());
    let reason = outcome.rejected.expect("rejection reason expected");
    assert!(reason.contains("delta"), "rejection should cite portfolio delta: {reason}");
}

/// S5 — expiration settlement when SPY closes between the short and long
/// strikes: realized P&L is the credit minus the distance the close fell
/// below the short strike.
#[test]
fn s5_expiration_between_strikes_settles_partial_loss() {
    let net_credit = dec!(0.55);
    let settlement_price = dec!(442); // between 440 and 445.
    let pnl_per_contract = bull_put::settle_at_expiration(dec!(445), dec!(440), net_credit, settlement_price);
    assert_eq!(pnl_per_contract, net_credit - (dec!(445) - settlement_price));

    let qty = 1u32;
    let costs = dec!(1.30); // commissions + regulatory fees, entry + exit.
    let realized = pnl_per_contract * Decimal::from(qty) * dec!(100) - costs;
    assert_eq!(realized, (net_credit - dec!(3)) * dec!(100) - costs);
}

/// S6 — determinism: replaying the same bars and chain sequence twice, with
/// no randomness involved in the gating/selection path itself, must leave
/// both portfolios in an identical state (here: both still flat, since a
/// single timestamp with no bar history never reaches the selector).
#[tokio::test]
async fn s6_identical_replay_inputs_produce_identical_portfolio_state() {
    let now = Utc::now();
    let chain = spy_bull_put_chain(now);
    let bars: Vec<Bar> = (0..10)
        .map(|i| Bar::new(now - ChronoDuration::minutes(10 - i), dec!(450), dec!(451), dec!(449), dec!(450), 1_000).unwrap())
        .collect();

    async fn run_once(bars: Vec<Bar>, chain: OptionsChain, now: chrono::DateTime<Utc>) -> PortfolioState {
        let adapter = ReplayBrokerAdapter::new(bars, vec![chain], dec!(25000));
        let config = StrategyConfig::default();
        let mut portfolio = PortfolioState::new(dec!(25000));
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
            bar_window: zerodte_engine::engine::bar::BarWindow::default(),
        };
        run_replay(&mut ctx, "SPY", &[now]).await.expect("replay must not error");
        portfolio
    }

    let first = run_once(bars.clone(), chain.clone(), now).await;
    let second = run_once(bars, chain, now).await;

    assert_eq!(first.open_positions.len(), second.open_positions.len());
    assert_eq!(first.closed_trades.len(), second.closed_trades.len());
    assert_eq!(first.cash_balance, second.cash_balance);
    assert_eq!(first.equity_curve.len(), second.equity_curve.len());
}
