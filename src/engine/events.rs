/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/12/24
******************************************************************************/

//! # Engine Events
//!
//! A broadcast bus the engine publishes semantic, transport-agnostic
//! cycle-level events on. Owned by the engine itself rather than referenced
//! back from [`crate::engine::position::Position`], avoiding a cyclic
//! ownership relationship between positions and the bus that reports on
//! them.

use crate::engine::position::{ExitReason, Position, TradeRecord};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::broadcast;

/// Default channel capacity for [`EngineEventBus::new`].
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 256;

/// A semantic engine event.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The engine finished starting up and began running cycles.
    Started {
        /// When the engine started.
        timestamp: DateTime<Utc>,
    },
    /// The engine stopped running cycles.
    Stopped {
        /// When the engine stopped.
        timestamp: DateTime<Utc>,
    },
    /// A new position was opened.
    TradeExecuted {
        /// The opened position.
        position: Box<Position>,
    },
    /// An open position was closed.
    PositionClosed {
        /// The closed position's terminal record.
        record: Box<TradeRecord>,
        /// Which rule closed it.
        reason: ExitReason,
    },
    /// Periodic performance/equity-curve update.
    PerformanceUpdate {
        /// Current account balance.
        balance: Decimal,
        /// Current peak-to-trough drawdown.
        drawdown: Decimal,
    },
    /// A full cycle (data refresh, monitor, admit, bookkeeping) finished.
    CycleComplete {
        /// Cycle timestamp.
        timestamp: DateTime<Utc>,
    },
    /// A recoverable error occurred during a cycle.
    Error {
        /// Human-readable description.
        message: String,
    },
}

/// A broadcast bus for [`EngineEvent`]s. Multiple subscribers may listen;
/// lagging subscribers drop the oldest events rather than blocking the
/// engine, whose cycle task is the bus's sole writer.
pub struct EngineEventBus {
    sender: broadcast::Sender<EngineEvent>,
}

impl EngineEventBus {
    /// Creates a bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity.max(1));
        EngineEventBus { sender }
    }

    /// Subscribes a new receiver to this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event. Returns the number of active subscribers that
    /// received it (`0` if none are listening — not an error).
    pub fn publish(&self, event: EngineEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EngineEventBus {
    fn default() -> Self {
        EngineEventBus::new(DEFAULT_EVENT_CHANNEL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_does_not_panic() {
        let bus = EngineEventBus::default();
        let delivered = bus.publish(EngineEvent::CycleComplete {
            timestamp: Utc::now(),
        });
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = EngineEventBus::default();
        let mut rx = bus.subscribe();
        bus.publish(EngineEvent::Started { timestamp: Utc::now() });
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, EngineEvent::Started { .. }));
    }
}
