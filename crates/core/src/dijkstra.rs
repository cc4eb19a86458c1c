// SPDX-License-Identifier: MIT

//! Shortest-path routing table computation.
//!
//! Ported from the source protocol's `calc_routing_table_djk`: Dijkstra
//! is run once per switch that currently has an entry in the live map,
//! over the live map's edges. Destinations are drawn from the
//! *bootstrapped* map, so a switch that's gone fully unreachable (but
//! was configured) still gets a `(-1, 9999)` row rather than being
//! silently dropped. A switch with no live-map entry at all has no
//! table emitted for it as a source.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::routing::{RoutingRow, RoutingTable};
use crate::switch_id::SwitchId;
use crate::topology::TopologyMap;

/// Compute the full routing table for every source present in `live`.
///
/// Destinations are every node known to `bootstrapped`. Neighbor
/// iteration order is ascending switch id (guaranteed by `TopologyMap`'s
/// `BTreeMap` backing), so relaxation order — and therefore which path
/// wins on a cost tie — is deterministic.
pub fn compute_routes(bootstrapped: &TopologyMap, live: &TopologyMap) -> RoutingTable {
    let mut table = RoutingTable::new();
    for source in live.nodes() {
        let rows = single_source_routes(bootstrapped, live, source);
        table.insert(source, rows);
    }
    table
}

fn single_source_routes(
    bootstrapped: &TopologyMap,
    live: &TopologyMap,
    source: SwitchId,
) -> Vec<RoutingRow> {
    let mut distances: BTreeMap<SwitchId, u32> = BTreeMap::new();
    let mut first_hop: BTreeMap<SwitchId, SwitchId> = BTreeMap::new();
    let mut visited: BTreeMap<SwitchId, bool> = BTreeMap::new();

    distances.insert(source, 0);
    first_hop.insert(source, source);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0u32, source)));

    while let Some(Reverse((dist, node))) = heap.pop() {
        if visited.get(&node).copied().unwrap_or(false) {
            continue;
        }
        visited.insert(node, true);

        let Some(neighbors) = live.neighbors(node) else {
            continue;
        };
        for (&adjacent, &weight) in neighbors {
            let candidate = dist + weight;
            let improves = distances.get(&adjacent).map_or(true, |&best| candidate < best);
            if improves {
                distances.insert(adjacent, candidate);
                let hop = if node == source { adjacent } else { first_hop[&node] };
                first_hop.insert(adjacent, hop);
                heap.push(Reverse((candidate, adjacent)));
            }
        }
    }

    bootstrapped
        .nodes()
        .map(|dest| {
            if dest == source {
                RoutingRow::self_route(source)
            } else if let Some(&cost) = distances.get(&dest) {
                RoutingRow::reachable(dest, first_hop[&dest], cost)
            } else {
                RoutingRow::unreachable(dest)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "dijkstra_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "dijkstra_proptests.rs"]
mod proptests;
