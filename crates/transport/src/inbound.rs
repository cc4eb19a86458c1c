// SPDX-License-Identifier: MIT

//! The Listener: a spawned read loop that fills an inbound queue from
//! the OS socket, decoupling I/O from decision-making in the main loop.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Datagrams this small a protocol never needs to exceed.
pub const MAX_DATAGRAM_SIZE: usize = 1024;

/// Bound on the blocking `recv_from` call; on expiry the listener
/// re-checks its stay-alive flag before reading again.
const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// A raw datagram as it came off the wire: sender address and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub peer: SocketAddr,
    pub payload: Vec<u8>,
}

/// Reads datagrams off a UDP socket into a thread-safe inbound queue.
pub struct Listener {
    socket: Arc<UdpSocket>,
    queue: Arc<Mutex<VecDeque<InboundEvent>>>,
    cancel: CancellationToken,
    started: AtomicBool,
}

impl Listener {
    pub fn new(socket: Arc<UdpSocket>) -> Self {
        Self {
            socket,
            queue: Arc::new(Mutex::new(VecDeque::new())),
            cancel: CancellationToken::new(),
            started: AtomicBool::new(false),
        }
    }

    /// Spawn the read loop. Idempotent: a second call is a no-op and
    /// returns `None`.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if self.started.swap(true, Ordering::SeqCst) {
            return None;
        }
        let socket = self.socket.clone();
        let queue = self.queue.clone();
        let cancel = self.cancel.clone();
        Some(tokio::spawn(async move { Self::run(socket, queue, cancel).await }))
    }

    async fn run(
        socket: Arc<UdpSocket>,
        queue: Arc<Mutex<VecDeque<InboundEvent>>>,
        cancel: CancellationToken,
    ) {
        let mut buf = [0u8; MAX_DATAGRAM_SIZE];
        tracing::info!(local_addr = ?socket.local_addr().ok(), "listener starting");
        while !cancel.is_cancelled() {
            match tokio::time::timeout(READ_TIMEOUT, socket.recv_from(&mut buf)).await {
                Ok(Ok((n, peer))) => {
                    queue.lock().push_back(InboundEvent { peer, payload: buf[..n].to_vec() });
                }
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "udp recv failed");
                }
                Err(_elapsed) => {
                    // Read timed out; loop back around to recheck stay-alive.
                }
            }
        }
        tracing::info!("listener stopped");
    }

    /// Clear the stay-alive flag; the loop exits before its next read.
    pub fn kill(&self) {
        self.cancel.cancel();
    }

    pub fn queue_pop(&self) -> Option<InboundEvent> {
        self.queue.lock().pop_front()
    }

    pub fn queue_size(&self) -> usize {
        self.queue.lock().len()
    }
}

#[cfg(test)]
#[path = "inbound_tests.rs"]
mod tests;
