// SPDX-License-Identifier: MIT

//! A liveness-tracked peer: the controller's view of a switch
//! (`SwitchRecord`) and a switch's view of a neighbor (`NeighborRecord`)
//! are the same shape, so both roles build on this one type.

use parking_lot::Mutex;
use std::time::{Duration, Instant};

use crate::switch_id::SwitchId;

/// `{id, host, port, last_ping_ts}`, with the timestamp behind its own
/// lock per the locking discipline: callers take the role mutex first,
/// then touch a record's ping timestamp without holding the role lock
/// across the whole operation.
#[derive(Debug)]
pub struct PeerRecord {
    pub id: SwitchId,
    pub host: String,
    pub port: u16,
    last_ping: Mutex<Instant>,
}

impl PeerRecord {
    pub fn new(id: SwitchId, host: impl Into<String>, port: u16, now: Instant) -> Self {
        Self { id, host: host.into(), port, last_ping: Mutex::new(now) }
    }

    /// Refresh the liveness timestamp to `now`.
    pub fn touch(&self, now: Instant) {
        *self.last_ping.lock() = now;
    }

    pub fn last_ping(&self) -> Instant {
        *self.last_ping.lock()
    }

    /// True if a liveness signal has been seen within `timeout` of `now`.
    pub fn is_alive(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_ping()) < timeout
    }
}

#[cfg(test)]
#[path = "peer_tests.rs"]
mod tests;
