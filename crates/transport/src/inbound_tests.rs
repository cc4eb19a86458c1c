// SPDX-License-Identifier: MIT

use super::*;
use std::net::SocketAddr;

async fn bind_loopback() -> Arc<UdpSocket> {
    Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap())
}

#[tokio::test]
async fn queue_starts_empty() {
    let socket = bind_loopback().await;
    let listener = Listener::new(socket);
    assert_eq!(listener.queue_size(), 0);
    assert!(listener.queue_pop().is_none());
}

#[tokio::test]
async fn receives_datagram_into_queue() {
    let socket = bind_loopback().await;
    let local_addr = socket.local_addr().unwrap();
    let listener = Listener::new(socket);
    listener.start();

    let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    sender.send_to(b"hello", local_addr).await.unwrap();

    let mut event = None;
    for _ in 0..100 {
        if let Some(e) = listener.queue_pop() {
            event = Some(e);
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let event = event.expect("expected a datagram to arrive");
    assert_eq!(event.payload, b"hello");
    listener.kill();
}

#[tokio::test]
async fn start_is_idempotent() {
    let socket = bind_loopback().await;
    let listener = Listener::new(socket);
    assert!(listener.start().is_some());
    assert!(listener.start().is_none());
    listener.kill();
}

#[tokio::test]
async fn kill_stops_accepting_new_reads() {
    let socket = bind_loopback().await;
    let local_addr: SocketAddr = socket.local_addr().unwrap();
    let listener = Listener::new(socket);
    let handle = listener.start().unwrap();
    listener.kill();
    handle.await.unwrap();

    let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    sender.send_to(b"late", local_addr).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(listener.queue_size(), 0);
}
