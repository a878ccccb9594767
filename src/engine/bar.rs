/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! OHLCV bars and the rolling window the indicator kernel reads from.

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use utoipa::ToSchema;

/// Default rolling window length kept per symbol, capping memory use.
pub const DEFAULT_BAR_WINDOW: usize = 1000;

/// A single OHLCV candle.
///
/// Invariants (checked in [`Bar::new`]): `low <= open, close <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bar {
    /// When this bar closed.
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: Decimal,
    /// Highest traded price over the bar.
    pub high: Decimal,
    /// Lowest traded price over the bar.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Volume traded over the bar.
    pub volume: u64,
}

impl Bar {
    /// Builds a `Bar`, rejecting OHLC values that violate `low <= open,close <= high`.
    pub fn new(
        timestamp: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> Result<Self, EngineError> {
        if low > open || low > close || high < open || high < close || low > high {
            return Err(EngineError::InvariantViolation {
                detail: format!(
                    "bar at {timestamp} violates low<=open,close<=high: \
                     open={open} high={high} low={low} close={close}"
                ),
            });
        }
        Ok(Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// A rolling, symbol-scoped history of [`Bar`]s, capped at a fixed capacity to
/// bound memory.
#[derive(Debug, Clone)]
pub struct BarWindow {
    capacity: usize,
    bars: VecDeque<Bar>,
}

impl BarWindow {
    /// Creates an empty window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        BarWindow {
            capacity: capacity.max(1),
            bars: VecDeque::with_capacity(capacity.min(4096)),
        }
    }

    /// Appends `bar`, evicting the oldest bar once `capacity` is exceeded.
    ///
    /// Rejects a bar whose timestamp does not strictly follow the last bar in
    /// the window.
    pub fn push(&mut self, bar: Bar) -> Result<(), EngineError> {
        if let Some(last) = self.bars.back() {
            if bar.timestamp <= last.timestamp {
                return Err(EngineError::InvariantViolation {
                    detail: format!(
                        "bar timestamp {} does not strictly follow {}",
                        bar.timestamp, last.timestamp
                    ),
                });
            }
        }
        if self.bars.len() == self.capacity {
            self.bars.pop_front();
        }
        self.bars.push_back(bar);
        Ok(())
    }

    /// All bars currently retained, oldest first.
    pub fn as_slice(&self) -> Vec<Bar> {
        self.bars.iter().copied().collect()
    }

    /// Number of bars currently retained.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True if no bars have been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recently pushed bar, if any.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.back()
    }

    /// Closing prices, oldest first — the series most indicators read.
    pub fn closes(&self) -> Vec<Decimal> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

impl Default for BarWindow {
    fn default() -> Self {
        BarWindow::new(DEFAULT_BAR_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bar_at(secs: i64, close: Decimal) -> Bar {
        Bar::new(
            DateTime::from_timestamp(secs, 0).unwrap(),
            close,
            close + dec!(1),
            close - dec!(1),
            close,
            1_000,
        )
        .unwrap()
    }

    #[test]
    fn rejects_inverted_high_low() {
        let err = Bar::new(
            DateTime::from_timestamp(0, 0).unwrap(),
            dec!(10),
            dec!(9),
            dec!(11),
            dec!(10),
            100,
        );
        assert!(err.is_err());
    }

    #[test]
    fn window_evicts_oldest_past_capacity() {
        let mut window = BarWindow::new(3);
        for i in 0..5 {
            window.push(bar_at(i, Decimal::from(100 + i))).unwrap();
        }
        assert_eq!(window.len(), 3);
        assert_eq!(window.as_slice()[0].close, Decimal::from(102));
    }

    #[test]
    fn window_rejects_non_increasing_timestamp() {
        let mut window = BarWindow::new(10);
        window.push(bar_at(10, dec!(100))).unwrap();
        let err = window.push(bar_at(10, dec!(101)));
        assert!(err.is_err());
        let err = window.push(bar_at(5, dec!(101)));
        assert!(err.is_err());
    }
}
