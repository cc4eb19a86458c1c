// SPDX-License-Identifier: MIT

//! The controller role: wraps [`ControllerState`] in a single mutex per
//! the locking discipline in §5, and turns each spec operation into
//! state mutation, log entries, and a batch of [`Dispatch`]es for the
//! sender queue to drain. The mutex is held across recomputation and
//! dispatch-building so that every switch sees a consistent snapshot of
//! the routing table (§9's "Dijkstra over a live-edited graph").

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use sdn_core::{
    controller_routing_update_lines, protolog::format_timestamp, Clock, ConfiguredEdge, ProtoLog,
    SwitchId,
};
use sdn_wire::{Dispatch, Message, NeighborEntry, RegisterResponseData, WireRow};

use crate::state::ControllerState;

pub struct Controller<C: Clock> {
    clock: C,
    log: ProtoLog,
    num_switches: u32,
    timeout: Duration,
    booted: AtomicBool,
    state: Mutex<ControllerState>,
}

impl<C: Clock> Controller<C> {
    pub fn new(
        clock: C,
        log: ProtoLog,
        num_switches: u32,
        edges: &[ConfiguredEdge],
        timeout: Duration,
    ) -> Self {
        Self {
            clock,
            log,
            num_switches,
            timeout,
            booted: AtomicBool::new(false),
            state: Mutex::new(ControllerState::new(edges)),
        }
    }

    /// Read without the lock: `is_booted` is single-writer, flipped
    /// exactly once inside [`Self::handle_register_request`].
    pub fn is_booted(&self) -> bool {
        self.booted.load(Ordering::Acquire)
    }

    fn log_line(&self, line: String) {
        self.log.append(&format_timestamp(), &[line]);
    }

    fn log_routing_update(&self, state: &ControllerState) {
        self.log.append(&format_timestamp(), &controller_routing_update_lines(state.routing_table()));
    }

    fn register_response_dispatch(&self, state: &ControllerState, sid: SwitchId) -> Option<Dispatch> {
        let peer = state.peer(sid)?;
        let table = state
            .direct_neighbors(sid)
            .into_iter()
            .map(|(nid, host, port)| NeighborEntry(nid, host, port))
            .collect();
        Some(Dispatch::new(
            peer.host.clone(),
            peer.port,
            Message::RegisterResponse(RegisterResponseData { id: sid, table }),
        ))
    }

    fn routing_update_dispatch(&self, state: &ControllerState, sid: SwitchId) -> Option<Dispatch> {
        let peer = state.peer(sid)?;
        let rows = state.routing_table().get(&sid)?;
        let wire_rows: Vec<WireRow> = rows.iter().map(WireRow::from).collect();
        Some(Dispatch::new(peer.host.clone(), peer.port, Message::RoutingUpdate(wire_rows)))
    }

    fn broadcast_register_responses(&self, state: &ControllerState, targets: &[SwitchId]) -> Vec<Dispatch> {
        let mut dispatches = Vec::new();
        for &sid in targets {
            if let Some(d) = self.register_response_dispatch(state, sid) {
                dispatches.push(d);
            }
            self.log_line(format!("Register Response {sid}"));
        }
        dispatches
    }

    fn broadcast_routing_updates(&self, state: &ControllerState, targets: &[SwitchId]) -> Vec<Dispatch> {
        let dispatches =
            targets.iter().filter_map(|&sid| self.routing_update_dispatch(state, sid)).collect();
        self.log_routing_update(state);
        dispatches
    }

    /// `register_request`: first contact from a switch, or a re-contact
    /// after the controller declared it dead.
    pub fn handle_register_request(&self, sid: SwitchId, host: String, port: u16) -> Vec<Dispatch> {
        let now = self.clock.now();
        let mut state = self.state.lock();
        state.insert_switch(sid, host, port, now);
        self.log_line(format!("Register Request {sid}"));

        let mut dispatches = Vec::new();
        let already_booted = self.is_booted();
        let just_booted = !already_booted && state.registry_len() as u32 == self.num_switches;

        if just_booted {
            state.touch_all(now);
            self.booted.store(true, Ordering::Release);
            state.recompute_routes();
            let all = state.registered_ids();
            dispatches.extend(self.broadcast_register_responses(&state, &all));
            dispatches.extend(self.broadcast_routing_updates(&state, &all));
        } else if already_booted {
            state.restore_live_node(sid);
            self.log_line(format!("Switch Alive {sid}"));
            state.recompute_routes();
            dispatches.extend(self.broadcast_register_responses(&state, &[sid]));
            let all = state.registered_ids();
            dispatches.extend(self.broadcast_routing_updates(&state, &all));
        }

        dispatches
    }

    /// `topology_update`: a switch's current live-adjacency report.
    pub fn handle_topology_update(&self, sid: SwitchId, neighbors: Vec<SwitchId>) -> Vec<Dispatch> {
        let now = self.clock.now();
        let mut state = self.state.lock();
        let Some(peer) = state.peer(sid) else {
            tracing::warn!(%sid, "topology_update from unregistered switch, ignoring");
            return Vec::new();
        };
        peer.touch(now);

        let dead_links = state.apply_topology_report(sid, &neighbors);
        for dead in &dead_links {
            self.log_line(format!("Link Dead {sid},{dead}"));
        }

        if dead_links.is_empty() {
            return Vec::new();
        }
        state.recompute_routes();
        let all = state.registered_ids();
        self.broadcast_routing_updates(&state, &all)
    }

    /// Run on every main-loop iteration once booted: declare dead any
    /// switch the controller hasn't heard from within `TIMEOUT`.
    pub fn detect_switch_dead(&self) -> Vec<Dispatch> {
        let now = self.clock.now();
        let mut state = self.state.lock();
        let dead = state.sweep_dead(now, self.timeout);
        for sid in &dead {
            self.log_line(format!("Switch Dead {sid}"));
        }
        if dead.is_empty() {
            return Vec::new();
        }
        state.recompute_routes();
        let all = state.registered_ids();
        self.broadcast_routing_updates(&state, &all)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
