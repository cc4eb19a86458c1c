// SPDX-License-Identifier: MIT

//! Textual formatting for the `Routing Update` log block (§6), shared
//! by the controller (full table, every source) and the switch (its
//! own single table, cost column omitted).

use crate::routing::{RoutingRow, RoutingTable};
use crate::switch_id::SwitchId;

fn next_hop_field(row: &RoutingRow) -> String {
    match row.next_hop {
        Some(hop) => hop.to_string(),
        None => "-1".to_string(),
    }
}

/// `Routing Update` / `Routing Complete` block for every source in
/// `table`, ascending by source then by destination.
pub fn controller_routing_update_lines(table: &RoutingTable) -> Vec<String> {
    let mut lines = vec!["Routing Update".to_string()];
    for (source, rows) in table.iter() {
        for row in rows {
            lines.push(format!("{},{}:{},{}", source, row.dest, next_hop_field(row), row.cost));
        }
    }
    lines.push("Routing Complete".to_string());
    lines
}

/// `Routing Update` / `Routing Complete` block for a single switch's
/// own table. The cost column is omitted, matching the source
/// protocol's switch-side log.
pub fn switch_routing_update_lines(source: SwitchId, rows: &[RoutingRow]) -> Vec<String> {
    let mut lines = vec!["Routing Update".to_string()];
    for row in rows {
        lines.push(format!("{},{}:{}", source, row.dest, next_hop_field(row)));
    }
    lines.push("Routing Complete".to_string());
    lines
}

#[cfg(test)]
#[path = "logfmt_tests.rs"]
mod tests;
