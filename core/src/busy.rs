//! Shared "operation in flight" indicator.
//!
//! # Design
//! The indicator counts live `BusyGuard`s rather than storing a flag, so two
//! overlapping operations cannot clear each other: the UI stays busy until
//! the last guard drops. The count lives in a `tokio::sync::watch` channel,
//! which lets a loading overlay await changes instead of polling.

use std::sync::Arc;

use tokio::sync::watch;

/// Reference-counted busy indicator. Clones share the same counter.
#[derive(Debug, Clone)]
pub struct BusyIndicator {
    in_flight: Arc<watch::Sender<usize>>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            in_flight: Arc::new(tx),
        }
    }

    /// Mark one operation as started. The operation ends when the guard drops.
    pub fn track(&self) -> BusyGuard {
        self.in_flight.send_modify(|n| *n += 1);
        BusyGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        *self.in_flight.borrow()
    }

    /// Receiver that observes the in-flight count.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.in_flight.subscribe()
    }
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped token for one tracked operation.
#[derive(Debug)]
#[must_use = "the operation is only tracked while the guard is alive"]
pub struct BusyGuard {
    in_flight: Arc<watch::Sender<usize>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.send_modify(|n| *n = n.saturating_sub(1));
    }
}
