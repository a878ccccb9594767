//! Shared fixtures for the Engine-driven scenario tests: a liquid SPY 0-DTE
//! chain and an 80-bar uptrend, the minimum history `regime::classify` needs
//! before it will call anything other than a low-confidence NEUTRAL.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rust_decimal_macros::dec;
use zerodte_engine::engine::bar::Bar;
use zerodte_engine::engine::chain::{OptionContract, OptionsChain};
use zerodte_engine::model::types::OptionStyle;

/// A liquid 445/440 put + 455/460 call SPY chain, the same shape
/// `bull_put::build` picks a 445/440 credit spread out of.
pub fn spy_chain(as_of: DateTime<Utc>) -> OptionsChain {
    OptionsChain {
        underlying_symbol: "SPY".to_string(),
        underlying_price: dec!(450),
        as_of,
        contracts: vec![
            OptionContract {
                underlying_symbol: "SPY".to_string(),
                strike_price: dec!(445),
                option_style: OptionStyle::Put,
                expiration: as_of + ChronoDuration::hours(4),
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
                expiration: as_of + ChronoDuration::hours(4),
                bid: dec!(0.60),
                ask: dec!(0.65),
                mid: dec!(0.625),
                implied_volatility: 0.22,
                delta: -0.18,
                open_interest: 400,
                volume: 250,
            },
            OptionContract {
                underlying_symbol: "SPY".to_string(),
                strike_price: dec!(455),
                option_style: OptionStyle::Call,
                expiration: as_of + ChronoDuration::hours(4),
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
                expiration: as_of + ChronoDuration::hours(4),
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

/// Eighty ascending 5-minute bars ending just before `end`, the same shape
/// `regime::classify`'s own tests use to force a confident BULLISH read.
pub fn bullish_bars(end: DateTime<Utc>) -> Vec<Bar> {
    (0..80)
        .map(|i| {
            let close = dec!(400) + rust_decimal::Decimal::from(i);
            Bar::new(
                end - ChronoDuration::minutes(5 * (80 - i)),
                close,
                close + dec!(1),
                close - dec!(1),
                close,
                1_000,
            )
            .unwrap()
        })
        .collect()
}

/// Eighty flat 5-minute bars ending just before `end`: no trend, no momentum,
/// classifies NEUTRAL(65) rather than the <50-bar NEUTRAL(30) floor.
pub fn flat_bars(end: DateTime<Utc>) -> Vec<Bar> {
    (0..80)
        .map(|i| {
            Bar::new(
                end - ChronoDuration::minutes(5 * (80 - i)),
                dec!(450),
                dec!(450.5),
                dec!(449.5),
                dec!(450),
                1_000,
            )
            .unwrap()
        })
        .collect()
}
