// SPDX-License-Identifier: MIT

//! The controller's weighted adjacency view of the network.
//!
//! `TopologyMap` backs both the bootstrapped map (frozen once at the end
//! of bootstrap) and the live map (mutated as links and switches come
//! and go). A `BTreeMap` of `BTreeMap`s is used rather than hash maps so
//! that neighbor iteration — and therefore Dijkstra's relaxation order —
//! is deterministic across runs, independent of hasher seeding.

use std::collections::BTreeMap;

use crate::switch_id::SwitchId;

/// An undirected, weighted edge between two switches, as declared in the
/// controller's config file. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfiguredEdge {
    pub a: SwitchId,
    pub b: SwitchId,
    pub cost: u32,
}

impl ConfiguredEdge {
    pub fn new(a: impl Into<SwitchId>, b: impl Into<SwitchId>, cost: u32) -> Self {
        Self { a: a.into(), b: b.into(), cost }
    }
}

/// A symmetric weighted adjacency mapping: `switch_id -> (neighbor_id -> cost)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyMap {
    adj: BTreeMap<SwitchId, BTreeMap<SwitchId, u32>>,
}

impl TopologyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a topology from a list of configured edges, inserting both
    /// directions of each edge.
    pub fn from_edges(edges: &[ConfiguredEdge]) -> Self {
        let mut map = Self::new();
        for edge in edges {
            map.insert_edge(edge.a, edge.b, edge.cost);
        }
        map
    }

    /// Insert an edge symmetrically: `a -> b` and `b -> a`, same cost.
    pub fn insert_edge(&mut self, a: SwitchId, b: SwitchId, cost: u32) {
        self.adj.entry(a).or_default().insert(b, cost);
        self.adj.entry(b).or_default().insert(a, cost);
    }

    /// Remove the single direction `from -> to`, leaving `to -> from`
    /// (if present) untouched. Matches the controller's one-sided link
    /// teardown: each side's own topology_update clears its own row.
    pub fn remove_directed_edge(&mut self, from: SwitchId, to: SwitchId) {
        if let Some(row) = self.adj.get_mut(&from) {
            row.remove(&to);
        }
    }

    /// Remove a node entirely: its row and every reference to it in
    /// other rows (switch death).
    pub fn remove_node(&mut self, id: SwitchId) {
        self.adj.remove(&id);
        for row in self.adj.values_mut() {
            row.remove(&id);
        }
    }

    /// Ensure a node exists, with an empty neighbor set if new.
    pub fn ensure_node(&mut self, id: SwitchId) {
        self.adj.entry(id).or_default();
    }

    pub fn contains_node(&self, id: SwitchId) -> bool {
        self.adj.contains_key(&id)
    }

    pub fn neighbors(&self, id: SwitchId) -> Option<&BTreeMap<SwitchId, u32>> {
        self.adj.get(&id)
    }

    pub fn cost(&self, a: SwitchId, b: SwitchId) -> Option<u32> {
        self.adj.get(&a)?.get(&b).copied()
    }

    /// Node ids present in this map, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = SwitchId> + '_ {
        self.adj.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// True if every edge in `self` is present in `other` with the same
    /// cost. Used to check the live-is-subgraph-of-bootstrapped
    /// invariant in tests.
    pub fn is_subgraph_of(&self, other: &TopologyMap) -> bool {
        self.adj.iter().all(|(node, row)| {
            row.iter().all(|(neighbor, cost)| other.cost(*node, *neighbor) == Some(*cost))
        })
    }

    /// True if every present edge is symmetric: `a->b` implies `b->a`
    /// with the same cost.
    pub fn is_symmetric(&self) -> bool {
        self.adj.iter().all(|(node, row)| {
            row.iter().all(|(neighbor, cost)| self.cost(*neighbor, *node) == Some(*cost))
        })
    }
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod tests;
