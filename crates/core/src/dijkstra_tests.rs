// SPDX-License-Identifier: MIT

use super::*;

fn sid(n: u32) -> SwitchId {
    SwitchId::new(n)
}

fn row(table: &RoutingTable, source: u32, dest: u32) -> RoutingRow {
    table[&sid(source)].iter().find(|r| r.dest == sid(dest)).copied().unwrap()
}

/// Scenario 1 from the spec: 3 switches, edges 0-1:10, 1-2:20, 0-2:50.
#[test]
fn scenario_bootstrap_three_switches() {
    let edges = vec![
        ConfiguredEdge::new(sid(0), sid(1), 10),
        ConfiguredEdge::new(sid(1), sid(2), 20),
        ConfiguredEdge::new(sid(0), sid(2), 50),
    ];
    let bootstrapped = TopologyMap::from_edges(&edges);
    let table = compute_routes(&bootstrapped, &bootstrapped);

    let expected = [
        (0, 0, 0, 0),
        (0, 1, 1, 10),
        (0, 2, 1, 30),
        (1, 0, 0, 10),
        (1, 1, 1, 0),
        (1, 2, 2, 20),
        (2, 0, 1, 30),
        (2, 1, 1, 20),
        (2, 2, 2, 0),
    ];
    for (src, dest, hop, cost) in expected {
        let r = row(&table, src, dest);
        assert_eq!(r.next_hop, Some(sid(hop)), "src={src} dest={dest}");
        assert_eq!(r.cost, cost, "src={src} dest={dest}");
    }
}

/// Scenario 2: a 2-hop path beats a direct but more expensive edge.
#[test]
fn scenario_reroute_via_better_next_hop() {
    let edges = vec![
        ConfiguredEdge::new(sid(0), sid(1), 1),
        ConfiguredEdge::new(sid(1), sid(2), 1),
        ConfiguredEdge::new(sid(0), sid(2), 5),
    ];
    let bootstrapped = TopologyMap::from_edges(&edges);
    let table = compute_routes(&bootstrapped, &bootstrapped);

    let r = row(&table, 0, 2);
    assert_eq!(r.next_hop, Some(sid(1)));
    assert_eq!(r.cost, 2);
}

/// Scenario 3: switch 1 dies; its rows vanish, and 0<->2 re-route over
/// their remaining direct edge.
#[test]
fn scenario_switch_death_removes_source_and_reroutes() {
    let edges = vec![
        ConfiguredEdge::new(sid(0), sid(1), 10),
        ConfiguredEdge::new(sid(1), sid(2), 20),
        ConfiguredEdge::new(sid(0), sid(2), 50),
    ];
    let bootstrapped = TopologyMap::from_edges(&edges);
    let mut live = bootstrapped.clone();
    live.remove_node(sid(1));

    let table = compute_routes(&bootstrapped, &live);
    assert!(!table.contains_key(&sid(1)), "dead source must be omitted, not zeroed out");

    let r02 = row(&table, 0, 2);
    assert_eq!(r02.next_hop, Some(sid(2)));
    assert_eq!(r02.cost, 50);

    let r20 = row(&table, 2, 0);
    assert_eq!(r20.next_hop, Some(sid(0)));
    assert_eq!(r20.cost, 50);
}

/// Scenario 6: two disjoint islands never see a path between them.
#[test]
fn scenario_unreachable_partition() {
    let edges = vec![
        ConfiguredEdge::new(sid(0), sid(1), 1),
        ConfiguredEdge::new(sid(2), sid(3), 1),
    ];
    let bootstrapped = TopologyMap::from_edges(&edges);
    let table = compute_routes(&bootstrapped, &bootstrapped);

    for (a, b) in [(0, 2), (0, 3), (1, 2), (1, 3)] {
        let r = row(&table, a, b);
        assert!(r.is_unreachable(), "{a}->{b} should be unreachable");
        assert_eq!(r.cost, UNREACHABLE_COST);
        let back = row(&table, b, a);
        assert!(back.is_unreachable());
    }
}

#[test]
fn every_source_has_a_self_route() {
    let edges = vec![ConfiguredEdge::new(sid(0), sid(1), 7)];
    let bootstrapped = TopologyMap::from_edges(&edges);
    let table = compute_routes(&bootstrapped, &bootstrapped);
    for (&source, rows) in &table {
        let self_row = rows.iter().find(|r| r.dest == source).unwrap();
        assert_eq!(self_row.next_hop, Some(source));
        assert_eq!(self_row.cost, 0);
    }
}

#[test]
fn routing_completeness_one_row_per_bootstrapped_destination() {
    let edges = vec![
        ConfiguredEdge::new(sid(0), sid(1), 1),
        ConfiguredEdge::new(sid(1), sid(2), 1),
        ConfiguredEdge::new(sid(3), sid(4), 1),
    ];
    let bootstrapped = TopologyMap::from_edges(&edges);
    let table = compute_routes(&bootstrapped, &bootstrapped);
    let dest_count = bootstrapped.node_count();
    for rows in table.values() {
        assert_eq!(rows.len(), dest_count);
    }
}
