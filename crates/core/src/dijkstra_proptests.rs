// SPDX-License-Identifier: MIT

//! Randomized checks for the routing-completeness and self-route
//! invariants (spec section 8), instead of a mechanical encode/decode
//! grid.

use super::*;
use proptest::prelude::*;

/// Build a random connected weighted graph over `0..n` by first laying
/// down a random spanning chain (guaranteeing connectivity) and then
/// scattering a handful of extra edges on top.
fn connected_graph(n: u32, extra_edges: &[(u32, u32, u32)]) -> TopologyMap {
    let mut map = TopologyMap::new();
    for i in 1..n {
        map.insert_edge(sid(i - 1), sid(i), 1 + (i % 7));
    }
    for &(a, b, cost) in extra_edges {
        if a % n != b % n {
            map.insert_edge(sid(a % n), sid(b % n), 1 + (cost % 20));
        }
    }
    map
}

proptest! {
    #[test]
    fn connected_graphs_are_fully_reachable(
        n in 2u32..12,
        extras in proptest::collection::vec((0u32..20, 0u32..20, 1u32..20), 0..10),
    ) {
        let graph = connected_graph(n, &extras);
        let table = compute_routes(&graph, &graph);

        for (&source, rows) in &table {
            prop_assert_eq!(rows.len(), graph.node_count());
            let self_row = rows.iter().find(|r| r.dest == source).unwrap();
            prop_assert_eq!(self_row.next_hop, Some(source));
            prop_assert_eq!(self_row.cost, 0);
            for r in rows {
                prop_assert!(!r.is_unreachable(), "graph is connected, every dest must be reachable");
            }
        }
    }
}
