//! Persistence round trip: serialize a running engine's `PortfolioState` to
//! disk and resume an engine from the deserialized copy via
//! `Engine::from_portfolio`, the path its own doc comment describes.

use super::common::{bullish_bars, spy_chain};
use chrono::Utc;
use rust_decimal_macros::dec;
use std::io::Write as _;
use std::sync::Arc;
use zerodte_engine::engine::broker::ReplayBrokerAdapter;
use zerodte_engine::engine::config::StrategyConfig;
use zerodte_engine::engine::governor::RiskThresholds;
use zerodte_engine::engine::portfolio::PortfolioState;
use zerodte_engine::engine::Engine;

#[tokio::test]
async fn persisted_portfolio_state_round_trips_through_disk() {
    let t0 = Utc::now();
    let bars = bullish_bars(t0);
    let chain = spy_chain(t0);

    let adapter = ReplayBrokerAdapter::new(bars, vec![chain], dec!(25000));
    let engine = Engine::new("SPY", Arc::new(adapter), StrategyConfig::default(), RiskThresholds::default(), dec!(25000));
    engine.run_replay(&[t0]).await.expect("replay must not error");

    let before = engine.portfolio_snapshot().await;
    assert_eq!(before.open_positions.len(), 1, "setup must open exactly one position");

    let json = serde_json::to_string_pretty(&before).expect("portfolio state must serialize");
    let mut file = tempfile::NamedTempFile::new().expect("must create temp file");
    file.write_all(json.as_bytes()).expect("must write serialized state");
    file.flush().expect("must flush to disk");

    let restored_json = std::fs::read_to_string(file.path()).expect("must read back serialized state");
    let restored: PortfolioState = serde_json::from_str(&restored_json).expect("portfolio state must deserialize");

    // A fresh broker/adapter: the restored engine never replays anything,
    // it only resumes the portfolio state handed to it.
    let resumed_adapter = ReplayBrokerAdapter::new(vec![], vec![], dec!(25000));
    let resumed = Engine::from_portfolio("SPY", Arc::new(resumed_adapter), StrategyConfig::default(), RiskThresholds::default(), restored);
    resumed.run_replay(&[]).await.expect("zero-cycle replay must not error");

    let after = resumed.portfolio_snapshot().await;
    assert_eq!(after.cash_balance, before.cash_balance);
    assert_eq!(after.max_drawdown, before.max_drawdown);
    assert_eq!(after.daily_realized_loss, before.daily_realized_loss);
    assert_eq!(after.closed_trades.len(), before.closed_trades.len());
    assert_eq!(after.open_positions.len(), before.open_positions.len());
    assert_eq!(after.open_positions[0].id, before.open_positions[0].id);
    assert_eq!(after.open_positions[0].symbol, before.open_positions[0].symbol);
    assert_eq!(after.open_positions[0].qty, before.open_positions[0].qty);
    assert_eq!(after.open_positions[0].entry.price, before.open_positions[0].entry.price);

    let before_status = engine.get_status().await;
    let after_status = resumed.get_status().await;
    assert_eq!(after_status.total_trades, before_status.total_trades);
    assert_eq!(after_status.win_rate, before_status.win_rate);
    assert_eq!(after_status.total_pnl, before_status.total_pnl);
    assert_eq!(after_status.unrealized_pnl, before_status.unrealized_pnl);
    assert_eq!(after_status.current_balance, before_status.current_balance);
    assert_eq!(after_status.max_drawdown, before_status.max_drawdown);
}
