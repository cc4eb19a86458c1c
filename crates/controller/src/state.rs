// SPDX-License-Identifier: MIT

//! Pure controller state: the topology maps, switch registry, and the
//! last-computed routing table. No locking, no I/O — [`crate::handlers`]
//! wraps this in a mutex and turns its return values into dispatches and
//! log entries.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use sdn_core::{compute_routes, ConfiguredEdge, PeerRecord, RoutingTable, SwitchId, TopologyMap};

pub struct ControllerState {
    bootstrapped: TopologyMap,
    live: TopologyMap,
    registry: BTreeMap<SwitchId, Arc<PeerRecord>>,
    routing_table: RoutingTable,
}

impl ControllerState {
    /// `live` starts equal to `bootstrapped`: nothing has failed yet.
    pub fn new(edges: &[ConfiguredEdge]) -> Self {
        let bootstrapped = TopologyMap::from_edges(edges);
        let live = bootstrapped.clone();
        Self { bootstrapped, live, registry: BTreeMap::new(), routing_table: RoutingTable::new() }
    }

    pub fn registry_len(&self) -> usize {
        self.registry.len()
    }

    pub fn registered_ids(&self) -> Vec<SwitchId> {
        self.registry.keys().copied().collect()
    }

    pub fn is_registered(&self, sid: SwitchId) -> bool {
        self.registry.contains_key(&sid)
    }

    pub fn peer(&self, sid: SwitchId) -> Option<Arc<PeerRecord>> {
        self.registry.get(&sid).cloned()
    }

    pub fn insert_switch(&mut self, sid: SwitchId, host: String, port: u16, now: Instant) {
        self.registry.insert(sid, Arc::new(PeerRecord::new(sid, host, port, now)));
    }

    pub fn touch_all(&mut self, now: Instant) {
        for rec in self.registry.values() {
            rec.touch(now);
        }
    }

    pub fn recompute_routes(&mut self) {
        self.routing_table = compute_routes(&self.bootstrapped, &self.live);
    }

    pub fn routing_table(&self) -> &RoutingTable {
        &self.routing_table
    }

    /// Restore `sid`'s bootstrapped adjacency into the live map, but
    /// only to neighbors that are themselves currently registered —
    /// restoring an edge to a still-dead switch would make it reachable
    /// in Dijkstra before that switch exists.
    pub fn restore_live_node(&mut self, sid: SwitchId) {
        self.live.ensure_node(sid);
        let Some(neighbors) = self.bootstrapped.neighbors(sid) else { return };
        let restorable: Vec<(SwitchId, u32)> = neighbors
            .iter()
            .filter(|(nid, _)| self.registry.contains_key(nid))
            .map(|(&nid, &cost)| (nid, cost))
            .collect();
        for (nid, cost) in restorable {
            self.live.insert_edge(sid, nid, cost);
        }
    }

    /// Apply a `topology_update`: drop `sid`'s live edge to any
    /// neighbor it no longer reports. Returns the neighbor ids whose
    /// link just went dead, for logging.
    pub fn apply_topology_report(&mut self, sid: SwitchId, reported: &[SwitchId]) -> Vec<SwitchId> {
        let reported_set: BTreeSet<SwitchId> = reported.iter().copied().collect();
        let current: Vec<SwitchId> =
            self.live.neighbors(sid).map(|row| row.keys().copied().collect()).unwrap_or_default();
        let mut dead = Vec::new();
        for neighbor in current {
            if !reported_set.contains(&neighbor) {
                self.live.remove_directed_edge(sid, neighbor);
                dead.push(neighbor);
            }
        }
        dead
    }

    /// Remove every registered switch whose last ping is older than
    /// `timeout`. Returns the removed ids, ascending.
    pub fn sweep_dead(&mut self, now: Instant, timeout: Duration) -> Vec<SwitchId> {
        let dead: Vec<SwitchId> = self
            .registry
            .iter()
            .filter(|(_, rec)| !rec.is_alive(now, timeout))
            .map(|(&id, _)| id)
            .collect();
        for &id in &dead {
            self.registry.remove(&id);
            self.live.remove_node(id);
        }
        dead
    }

    /// The direct-neighbor table sent in a `register_response`: every
    /// neighbor of `sid` in the live map, with the host/port the
    /// controller has on file for it.
    pub fn direct_neighbors(&self, sid: SwitchId) -> Vec<(SwitchId, String, u16)> {
        let Some(neighbors) = self.live.neighbors(sid) else { return Vec::new() };
        neighbors
            .keys()
            .filter_map(|nid| self.registry.get(nid).map(|rec| (*nid, rec.host.clone(), rec.port)))
            .collect()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
