// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sdn-transport: UDP socket plumbing shared by the controller and
//! switch binaries. A [`Listener`] fills an inbound queue off a
//! background read loop; a [`Sender`] drains an outbound queue onto
//! the wire. Neither ever touches protocol semantics — that's
//! `sdn-wire` and the binaries' own handler code.

mod error;
mod inbound;
mod outbound;
mod socket;

pub use error::TransportError;
pub use inbound::{InboundEvent, Listener, MAX_DATAGRAM_SIZE};
pub use outbound::{OutboundEvent, Sender};
pub use socket::bind;
