// SPDX-License-Identifier: MIT

//! The Sender: drains an outbound queue onto the UDP socket, woken by
//! a `Notify` rather than busy-polling.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::net::UdpSocket;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A datagram queued for delivery: payload and destination address.
pub type OutboundEvent = (Vec<u8>, SocketAddr);

/// Drains queued datagrams onto a UDP socket in a background task.
pub struct Sender {
    socket: Arc<UdpSocket>,
    queue: Arc<Mutex<VecDeque<OutboundEvent>>>,
    cancel: CancellationToken,
    notify: Arc<Notify>,
    started: AtomicBool,
}

impl Sender {
    pub fn new(socket: Arc<UdpSocket>) -> Self {
        Self {
            socket,
            queue: Arc::new(Mutex::new(VecDeque::new())),
            cancel: CancellationToken::new(),
            notify: Arc::new(Notify::new()),
            started: AtomicBool::new(false),
        }
    }

    /// Spawn the drain loop. Idempotent: a second call is a no-op and
    /// returns `None`.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if self.started.swap(true, Ordering::SeqCst) {
            return None;
        }
        let socket = self.socket.clone();
        let queue = self.queue.clone();
        let cancel = self.cancel.clone();
        let notify = self.notify.clone();
        Some(tokio::spawn(async move { Self::run(socket, queue, cancel, notify).await }))
    }

    async fn run(
        socket: Arc<UdpSocket>,
        queue: Arc<Mutex<VecDeque<OutboundEvent>>>,
        cancel: CancellationToken,
        notify: Arc<Notify>,
    ) {
        tracing::info!("sender starting");
        loop {
            let next = queue.lock().pop_front();
            match next {
                Some((payload, addr)) => {
                    if let Err(e) = socket.send_to(&payload, addr).await {
                        tracing::error!(error = %e, peer = %addr, "udp send failed");
                    }
                }
                None => {
                    if cancel.is_cancelled() {
                        break;
                    }
                    tokio::select! {
                        _ = notify.notified() => {}
                        _ = cancel.cancelled() => break,
                    }
                }
            }
        }
        tracing::info!("sender stopped");
    }

    /// Queue a datagram for delivery. `front` jumps the queue, used for
    /// time-sensitive keep-alive pings that shouldn't wait behind a
    /// backlog of routing updates.
    pub fn append(&self, event: OutboundEvent, front: bool) {
        let mut queue = self.queue.lock();
        if front {
            queue.push_front(event);
        } else {
            queue.push_back(event);
        }
        drop(queue);
        self.notify.notify_one();
    }

    pub fn queue_size(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn kill(&self) {
        self.cancel.cancel();
        self.notify.notify_one();
    }
}

#[cfg(test)]
#[path = "outbound_tests.rs"]
mod tests;
