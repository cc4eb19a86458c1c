// SPDX-License-Identifier: MIT

//! Outbound intent: a message plus where to send it, produced by a
//! role's handlers and consumed by the role's main loop, which resolves
//! the address and hands the encoded bytes to the sender queue.

use crate::message::Message;

/// One outbound datagram a handler wants sent. `front` mirrors the
/// sender queue's head-of-line option (§4.1): urgent traffic like a
/// switch's `keep_alive` sets it to jump ahead of bulk updates already
/// queued.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub host: String,
    pub port: u16,
    pub message: Message,
    pub front: bool,
}

impl Dispatch {
    pub fn new(host: impl Into<String>, port: u16, message: Message) -> Self {
        Self { host: host.into(), port, message, front: false }
    }

    pub fn urgent(host: impl Into<String>, port: u16, message: Message) -> Self {
        Self { host: host.into(), port, message, front: true }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
