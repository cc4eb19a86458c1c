// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sdn-core: shared data model and algorithms for the SDN control plane.
//!
//! Holds the pieces that are identical on both sides of the wire: the
//! switch id type, the weighted topology map, the Dijkstra engine, the
//! routing table row shape, the timing constants from the protocol, a
//! testable clock abstraction, and the append-only protocol log writer.

pub mod clock;
pub mod dijkstra;
pub mod error;
pub mod logfmt;
pub mod peer;
pub mod protolog;
pub mod routing;
pub mod switch_id;
pub mod timing;
pub mod topology;

pub use clock::{Clock, FakeClock, SystemClock};
pub use dijkstra::compute_routes;
pub use error::CoreError;
pub use logfmt::{controller_routing_update_lines, switch_routing_update_lines};
pub use peer::PeerRecord;
pub use protolog::ProtoLog;
pub use routing::{RoutingRow, RoutingTable, UNREACHABLE_COST};
pub use switch_id::SwitchId;
pub use timing::{PING_TIME, TIMEOUT};
pub use topology::{ConfiguredEdge, TopologyMap};
