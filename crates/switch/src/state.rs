// SPDX-License-Identifier: MIT

//! Pure switch state: the neighbor table and the last routing table
//! received from the controller. No locking, no I/O — [`crate::switch`]
//! wraps this in a mutex and turns its return values into dispatches
//! and log entries.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sdn_core::{PeerRecord, RoutingRow, SwitchId};
use sdn_wire::NeighborEntry;

pub struct SwitchState {
    neighbors: BTreeMap<SwitchId, Arc<PeerRecord>>,
    routing_table: Vec<RoutingRow>,
    registered: bool,
    last_ping_broadcast: Option<Instant>,
}

impl SwitchState {
    pub fn new() -> Self {
        Self {
            neighbors: BTreeMap::new(),
            routing_table: Vec::new(),
            registered: false,
            last_ping_broadcast: None,
        }
    }

    /// `true` once `ping_time` has elapsed since the last broadcast (or
    /// none has happened yet).
    pub fn due_for_ping(&self, now: Instant, ping_time: Duration) -> bool {
        self.last_ping_broadcast.map_or(true, |last| now.saturating_duration_since(last) >= ping_time)
    }

    pub fn mark_pinged(&mut self, now: Instant) {
        self.last_ping_broadcast = Some(now);
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn routing_table(&self) -> &[RoutingRow] {
        &self.routing_table
    }

    pub fn set_routing_table(&mut self, rows: Vec<RoutingRow>) {
        self.routing_table = rows;
    }

    pub fn neighbor_ids(&self) -> Vec<SwitchId> {
        self.neighbors.keys().copied().collect()
    }

    pub fn neighbor(&self, id: SwitchId) -> Option<Arc<PeerRecord>> {
        self.neighbors.get(&id).cloned()
    }

    pub fn is_neighbor(&self, id: SwitchId) -> bool {
        self.neighbors.contains_key(&id)
    }

    /// First register_response: mark registered and replace the
    /// neighbor table wholesale from the controller's direct-neighbor
    /// list. Each new `NeighborRecord` is stamped with `now`, giving it
    /// the full `TIMEOUT` grace period before the detector can act.
    pub fn apply_register_response(&mut self, table: &[NeighborEntry], now: Instant) {
        self.registered = true;
        self.last_ping_broadcast = Some(now);
        self.neighbors = table
            .iter()
            .map(|NeighborEntry(id, host, port)| {
                (*id, Arc::new(PeerRecord::new(*id, host.clone(), *port, now)))
            })
            .collect();
    }

    /// `true` if this is a newly-learned neighbor (insert happened).
    pub fn insert_or_touch_neighbor(&mut self, id: SwitchId, host: String, port: u16, now: Instant) -> bool {
        if let Some(existing) = self.neighbors.get(&id) {
            existing.touch(now);
            false
        } else {
            self.neighbors.insert(id, Arc::new(PeerRecord::new(id, host, port, now)));
            true
        }
    }

    /// Remove every neighbor whose last ping exceeds `timeout`.
    /// Returns the removed ids, ascending.
    pub fn sweep_dead(&mut self, now: Instant, timeout: std::time::Duration) -> Vec<SwitchId> {
        let dead: Vec<SwitchId> = self
            .neighbors
            .iter()
            .filter(|(_, rec)| !rec.is_alive(now, timeout))
            .map(|(&id, _)| id)
            .collect();
        for id in &dead {
            self.neighbors.remove(id);
        }
        dead
    }
}

impl Default for SwitchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
