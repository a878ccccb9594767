/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Engine Error Module
//!
//! Error taxonomy for the trading engine's scheduler, position manager, and
//! admission pipeline.
//!
//! Five categories, matching the engine's propagation policy:
//!
//! * `DataUnavailable` — bars/chain fetch failed or returned empty. The cycle
//!   skips new entries, keeps monitoring, and only becomes an `error` event after
//!   a run of consecutive failures.
//! * `AdmissionRejected` — a gate, Greeks check, portfolio check, or cost floor
//!   rejected a candidate trade. This is never raised as a `Result::Err` in the
//!   selector/governor hot path (admission rejection is a typed outcome, not a
//!   fault — see `crate::engine::selector::GateOutcome`); the variant exists here
//!   purely so the taxonomy is representable uniformly for callers that want to
//!   log or count rejections by category.
//! * `OrderFailure` — the broker adapter rejected a submission or close. The
//!   position stays `CLOSING` until a retry succeeds or the retry budget is
//!   exhausted.
//! * `InvariantViolation` — an impossible state (negative quantity, missing short
//!   leg). Not recoverable; the engine aborts.
//! * `TimeoutError` — an I/O call exceeded its deadline. Recovered the same way
//!   as `DataUnavailable`.

use thiserror::Error;

/// Errors raised by the engine's scheduler, position manager, and admission
/// pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bars or an options chain could not be fetched, or came back empty.
    #[error("data unavailable for {symbol}: {reason}")]
    DataUnavailable {
        /// Underlying symbol the fetch was for.
        symbol: String,
        /// Adapter-reported reason, or "empty response".
        reason: String,
    },

    /// A candidate trade was rejected by a gate, Greeks check, portfolio check,
    /// or cost floor. Not a fault — recorded for observability only.
    #[error("admission rejected: {reason}")]
    AdmissionRejected {
        /// Human-readable reason, e.g. "portfolio delta would exceed limit".
        reason: String,
    },

    /// The broker adapter rejected an order submission or close request.
    #[error("order failed after {retries} retr{plural}: {reason}", plural = if *retries == 1 { "y" } else { "ies" })]
    OrderFailure {
        /// Adapter-reported rejection reason.
        reason: String,
        /// Number of retry attempts made before giving up.
        retries: u32,
    },

    /// An impossible engine state was observed (negative quantity, a spread
    /// missing a required leg, a CLOSED position being mutated, ...).
    #[error("invariant violated: {detail}")]
    InvariantViolation {
        /// Description of the violated invariant.
        detail: String,
    },

    /// An I/O call exceeded its deadline.
    #[error("timeout after {elapsed_ms}ms during {operation}")]
    TimeoutError {
        /// The operation being attempted, e.g. "get_bars" or "get_options_chain".
        operation: String,
        /// How long the engine waited before giving up.
        elapsed_ms: u64,
    },
}

impl EngineError {
    /// True for errors the scheduler recovers from locally (skip new entries,
    /// keep monitoring) rather than aborting the engine.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::DataUnavailable { .. }
                | EngineError::TimeoutError { .. }
                | EngineError::AdmissionRejected { .. }
                | EngineError::OrderFailure { .. }
        )
    }

    /// True only for `InvariantViolation`, the sole fatal category.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::InvariantViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_unavailable_is_recoverable() {
        let err = EngineError::DataUnavailable {
            symbol: "SPY".to_string(),
            reason: "empty response".to_string(),
        };
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn invariant_violation_is_fatal_not_recoverable() {
        let err = EngineError::InvariantViolation {
            detail: "negative quantity".to_string(),
        };
        assert!(err.is_fatal());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn order_failure_message_pluralizes() {
        let one = EngineError::OrderFailure {
            reason: "rejected".to_string(),
            retries: 1,
        };
        assert_eq!(one.to_string(), "order failed after 1 retry: rejected");
        let many = EngineError::OrderFailure {
            reason: "rejected".to_string(),
            retries: 3,
        };
        assert_eq!(many.to_string(), "order failed after 3 retries: rejected");
    }
}
