/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Indicator Error Module
//!
//! Error type for [`crate::engine::indicators::compute`]: distinguishes "not
//! enough bar history yet" from any other failure mode, so callers can tell a
//! cold-start condition apart from a genuine fault.

use thiserror::Error;

/// Errors raised by the indicator kernel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorError {
    /// Fewer bars were supplied than the longest lookback requires.
    #[error("insufficient bar history: need {need}, got {got}")]
    InsufficientHistory {
        /// Bars required by [`crate::engine::indicators::IndicatorParams::min_bars`].
        need: usize,
        /// Bars actually supplied.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_history_message_reports_both_counts() {
        let err = IndicatorError::InsufficientHistory { need: 36, got: 3 };
        assert_eq!(err.to_string(), "insufficient bar history: need 36, got 3");
    }
}
