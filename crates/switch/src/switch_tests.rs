// SPDX-License-Identifier: MIT

use super::*;
use std::path::Path;
use std::time::Duration;

use sdn_core::FakeClock;
use sdn_wire::NeighborEntry;

fn sid(n: u32) -> SwitchId {
    SwitchId::new(n)
}

const TIMEOUT: Duration = Duration::from_millis(600);
const PING_TIME: Duration = Duration::from_millis(200);

fn entries(path: &Path) -> Vec<Vec<String>> {
    let text = std::fs::read_to_string(path).unwrap();
    text.trim_start_matches('\n')
        .split("\n\n")
        .filter(|block| !block.is_empty())
        .map(|block| {
            let mut lines: Vec<String> = block.lines().map(str::to_string).collect();
            if !lines.is_empty() {
                lines.remove(0);
            }
            lines
        })
        .collect()
}

fn new_switch(
    id: u32,
    failure_id: Option<u32>,
) -> (Switch<FakeClock>, FakeClock, tempfile::NamedTempFile) {
    let clock = FakeClock::new();
    let log_file = tempfile::NamedTempFile::new().unwrap();
    let log = ProtoLog::new(log_file.path());
    let switch = Switch::new(
        clock.clone(),
        log,
        sid(id),
        "10.0.0.100".to_string(),
        9000,
        failure_id.map(sid),
    );
    (switch, clock, log_file)
}

#[test]
fn register_targets_the_controller() {
    let (switch, _clock, _log) = new_switch(0, None);
    let dispatch = switch.register();
    assert_eq!(dispatch.host, "10.0.0.100");
    assert_eq!(dispatch.port, 9000);
    assert_eq!(dispatch.message, Message::RegisterRequest(sid(0)));
}

#[test]
fn register_response_marks_registered_and_logs() {
    let (switch, _clock, log_file) = new_switch(1, None);
    assert!(!switch.is_registered());

    switch.handle_register_response(RegisterResponseData {
        id: sid(1),
        table: vec![NeighborEntry(sid(0), "10.0.0.0".to_string(), 9000)],
    });

    assert!(switch.is_registered());
    let log = entries(log_file.path());
    assert!(log.iter().any(|e| e[0] == "Register Response received"));
}

#[test]
fn keep_alive_from_unknown_sender_adds_neighbor_alive() {
    let (switch, _clock, log_file) = new_switch(1, None);
    switch.handle_keep_alive(sid(2), "10.0.0.2".to_string(), 9002);

    let log = entries(log_file.path());
    assert!(log.iter().any(|e| e[0] == "Neighbor Alive 2"));
}

#[test]
fn keep_alive_from_failure_id_is_ignored() {
    let (switch, _clock, log_file) = new_switch(0, Some(1));
    switch.handle_keep_alive(sid(1), "10.0.0.1".to_string(), 9001);
    assert!(entries(log_file.path()).is_empty());
}

#[test]
fn do_alive_ping_skips_failure_id_and_uses_front_queue() {
    let (switch, _clock, _log) = new_switch(0, Some(2));
    switch.handle_register_response(RegisterResponseData {
        id: sid(0),
        table: vec![
            NeighborEntry(sid(1), "10.0.0.1".to_string(), 9001),
            NeighborEntry(sid(2), "10.0.0.2".to_string(), 9002),
        ],
    });

    let dispatches = switch.do_alive_ping();
    assert_eq!(dispatches.len(), 1);
    assert_eq!(dispatches[0].host, "10.0.0.1");
    assert!(dispatches[0].front);
    assert_eq!(dispatches[0].message, Message::KeepAlive(sid(0)));
}

#[test]
fn do_topology_update_carries_current_neighbor_ids() {
    let (switch, _clock, _log) = new_switch(0, None);
    switch.handle_register_response(RegisterResponseData {
        id: sid(0),
        table: vec![NeighborEntry(sid(1), "10.0.0.1".to_string(), 9001)],
    });
    let dispatch = switch.do_topology_update();
    assert_eq!(
        dispatch.message,
        Message::TopologyUpdate(sdn_wire::TopologyReport::new(sid(0), vec![sid(1)]))
    );
}

#[test]
fn detect_neighbor_dead_after_timeout() {
    let (switch, clock, log_file) = new_switch(0, None);
    switch.handle_register_response(RegisterResponseData {
        id: sid(0),
        table: vec![NeighborEntry(sid(1), "10.0.0.1".to_string(), 9001)],
    });

    clock.advance(TIMEOUT + Duration::from_millis(50));
    let dead = switch.detect_neighbor_dead(TIMEOUT);
    assert_eq!(dead, vec![sid(1)]);
    let log = entries(log_file.path());
    assert!(log.iter().any(|e| e[0] == "Neighbor Dead 1"));
}

#[test]
fn handle_routing_update_logs_without_cost_column() {
    let (switch, _clock, log_file) = new_switch(1, None);
    let rows = vec![WireRow(1, 1, 0), WireRow(0, 0, 10), WireRow(2, -1, 9999)];
    switch.handle_routing_update(rows);

    let log = entries(log_file.path());
    let block = log.iter().find(|e| e[0] == "Routing Update").unwrap();
    assert_eq!(
        block.as_slice(),
        &["Routing Update", "1,1:1", "1,0:0", "1,2:-1", "Routing Complete"]
    );
}

#[test]
fn ping_due_honors_cadence() {
    let (switch, clock, _log) = new_switch(0, None);
    switch.handle_register_response(RegisterResponseData { id: sid(0), table: vec![] });
    assert!(!switch.ping_due(PING_TIME));
    clock.advance(PING_TIME);
    assert!(switch.ping_due(PING_TIME));
}
