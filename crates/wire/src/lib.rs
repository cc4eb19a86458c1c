// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sdn-wire: the `{"action", "data"}` JSON message protocol exchanged
//! between controller and switch, one message per UDP datagram.

mod dispatch;
mod error;
mod message;
mod topology_report;

pub use dispatch::Dispatch;
pub use error::ProtocolError;
pub use message::{decode, encode, Message, NeighborEntry, RegisterResponseData, WireRow};
pub use topology_report::TopologyReport;
