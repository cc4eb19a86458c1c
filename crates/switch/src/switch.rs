// SPDX-License-Identifier: MIT

//! The switch role: wraps [`SwitchState`] in a single mutex per the
//! locking discipline in §5. Handlers mutate state, emit log entries,
//! and return [`Dispatch`]es for the sender queue.

use std::time::Duration;

use parking_lot::Mutex;

use sdn_core::{protolog::format_timestamp, switch_routing_update_lines, Clock, ProtoLog, SwitchId};
use sdn_wire::{Dispatch, Message, RegisterResponseData, WireRow};

use crate::state::SwitchState;

pub struct Switch<C: Clock> {
    clock: C,
    log: ProtoLog,
    id: SwitchId,
    controller_host: String,
    controller_port: u16,
    /// Test hook (`-f <neighbor_id>`): pretend this neighbor doesn't
    /// exist. No pings sent to it, none accepted from it.
    failure_id: Option<SwitchId>,
    state: Mutex<SwitchState>,
}

impl<C: Clock> Switch<C> {
    pub fn new(
        clock: C,
        log: ProtoLog,
        id: SwitchId,
        controller_host: String,
        controller_port: u16,
        failure_id: Option<SwitchId>,
    ) -> Self {
        Self {
            clock,
            log,
            id,
            controller_host,
            controller_port,
            failure_id,
            state: Mutex::new(SwitchState::new()),
        }
    }

    pub fn id(&self) -> SwitchId {
        self.id
    }

    pub fn is_registered(&self) -> bool {
        self.state.lock().is_registered()
    }

    fn log_line(&self, line: String) {
        self.log.append(&format_timestamp(), &[line]);
    }

    /// Enqueue one `register_request` to the controller. Sent before
    /// `is_registered` becomes true.
    pub fn register(&self) -> Dispatch {
        Dispatch::new(self.controller_host.clone(), self.controller_port, Message::RegisterRequest(self.id))
    }

    /// `register_response`: the controller's direct-neighbor table.
    pub fn handle_register_response(&self, data: RegisterResponseData) {
        let now = self.clock.now();
        let mut state = self.state.lock();
        state.apply_register_response(&data.table, now);
        self.log_line("Register Response received".to_string());
    }

    /// `keep_alive` from a neighbor switch.
    pub fn handle_keep_alive(&self, sender: SwitchId, host: String, port: u16) {
        if Some(sender) == self.failure_id {
            return;
        }
        let now = self.clock.now();
        let mut state = self.state.lock();
        if state.insert_or_touch_neighbor(sender, host, port, now) {
            self.log_line(format!("Neighbor Alive {sender}"));
        }
    }

    /// `routing_update`: the controller's computed table for this switch.
    pub fn handle_routing_update(&self, rows: Vec<WireRow>) {
        let rows: Vec<_> = rows.into_iter().map(WireRow::to_routing_row).collect();
        let stored = {
            let mut state = self.state.lock();
            state.set_routing_table(rows);
            state.routing_table().to_vec()
        };
        self.log.append(&format_timestamp(), &switch_routing_update_lines(self.id, &stored));
    }

    /// Broadcast a `keep_alive` to every current neighbor (skipping
    /// `failure_id`), enqueued at the head of the sender queue.
    pub fn do_alive_ping(&self) -> Vec<Dispatch> {
        let now = self.clock.now();
        let mut state = self.state.lock();
        state.mark_pinged(now);
        state
            .neighbor_ids()
            .into_iter()
            .filter(|&id| Some(id) != self.failure_id)
            .filter_map(|id| {
                let peer = state.neighbor(id)?;
                Some(Dispatch::urgent(peer.host.clone(), peer.port, Message::KeepAlive(self.id)))
            })
            .collect()
    }

    /// Is a ping broadcast due? Checked every main-loop iteration once
    /// registered.
    pub fn ping_due(&self, ping_time: Duration) -> bool {
        let now = self.clock.now();
        self.state.lock().due_for_ping(now, ping_time)
    }

    /// Send this switch's current neighbor list to the controller.
    pub fn do_topology_update(&self) -> Dispatch {
        let neighbors = self.state.lock().neighbor_ids();
        Dispatch::new(
            self.controller_host.clone(),
            self.controller_port,
            Message::TopologyUpdate(sdn_wire::TopologyReport::new(self.id, neighbors)),
        )
    }

    /// Remove neighbors whose `keep_alive` hasn't arrived within
    /// `TIMEOUT`.
    pub fn detect_neighbor_dead(&self, timeout: Duration) -> Vec<SwitchId> {
        let now = self.clock.now();
        let dead = self.state.lock().sweep_dead(now, timeout);
        for id in &dead {
            self.log_line(format!("Neighbor Dead {id}"));
        }
        dead
    }
}

#[cfg(test)]
#[path = "switch_tests.rs"]
mod tests;
