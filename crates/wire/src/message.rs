// SPDX-License-Identifier: MIT

//! The five message shapes exchanged over UDP, each its own datagram:
//! `{"action": <str>, "data": <value>}`.

use serde::{Deserialize, Serialize};

use sdn_core::{RoutingRow, SwitchId};

use crate::error::ProtocolError;
use crate::topology_report::TopologyReport;

/// A single entry in a register_response's direct-neighbor table:
/// `(neighbor_id, host, port)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborEntry(pub SwitchId, pub String, pub u16);

/// register_response's payload: the receiving switch's own id (so it
/// can detect a misdelivered response) plus its direct-neighbor table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponseData {
    pub id: SwitchId,
    pub table: Vec<NeighborEntry>,
}

/// One routing_update row on the wire: `(dest_id, next_hop, cost)`,
/// with `next_hop = -1` meaning unreachable. Kept as raw integers here
/// (rather than `RoutingRow`) since `-1` has no `SwitchId` representation;
/// `sdn_controller`/`sdn_switch` convert at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRow(pub u32, pub i64, pub u32);

impl From<&RoutingRow> for WireRow {
    fn from(row: &RoutingRow) -> Self {
        let next_hop = row.next_hop.map(u32::from).map_or(-1, i64::from);
        WireRow(u32::from(row.dest), next_hop, row.cost)
    }
}

impl WireRow {
    /// Recover a `RoutingRow` from the wire's `(dest, next_hop, cost)`
    /// triple, mapping the `-1` sentinel back to `None`.
    pub fn to_routing_row(self) -> RoutingRow {
        let WireRow(dest, next_hop, cost) = self;
        let next_hop =
            if next_hop < 0 { None } else { Some(SwitchId::new(next_hop as u32)) };
        RoutingRow { dest: SwitchId::new(dest), next_hop, cost }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "snake_case")]
pub enum Message {
    RegisterRequest(SwitchId),
    RegisterResponse(RegisterResponseData),
    RoutingUpdate(Vec<WireRow>),
    TopologyUpdate(TopologyReport),
    KeepAlive(SwitchId),
}

/// Encode a message as the raw JSON bytes for a single UDP datagram.
pub fn encode(message: &Message) -> Result<Vec<u8>, ProtocolError> {
    Ok(serde_json::to_vec(message)?)
}

/// Decode a single UDP datagram's payload into a message.
pub fn decode(bytes: &[u8]) -> Result<Message, ProtocolError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
