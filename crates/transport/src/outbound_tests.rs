// SPDX-License-Identifier: MIT

use super::*;
use std::time::Duration;

async fn bind_loopback() -> Arc<UdpSocket> {
    Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap())
}

#[tokio::test]
async fn delivers_queued_datagram() {
    let socket = bind_loopback().await;
    let recipient = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let recipient_addr = recipient.local_addr().unwrap();

    let sender = Sender::new(socket);
    sender.start();
    sender.append((b"ping".to_vec(), recipient_addr), false);

    let mut buf = [0u8; 64];
    let (n, _) = tokio::time::timeout(Duration::from_secs(1), recipient.recv_from(&mut buf))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(&buf[..n], b"ping");
    sender.kill();
}

#[tokio::test]
async fn front_insertion_jumps_the_queue() {
    let socket = bind_loopback().await;
    let recipient = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let recipient_addr = recipient.local_addr().unwrap();

    let sender = Sender::new(socket);
    // Queue without starting the drain loop yet, so ordering is deterministic.
    sender.append((b"routing_update".to_vec(), recipient_addr), false);
    sender.append((b"keep_alive".to_vec(), recipient_addr), true);

    sender.start();

    let mut buf = [0u8; 64];
    let (n, _) = tokio::time::timeout(Duration::from_secs(1), recipient.recv_from(&mut buf))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(&buf[..n], b"keep_alive");
    sender.kill();
}

#[tokio::test]
async fn start_is_idempotent() {
    let socket = bind_loopback().await;
    let sender = Sender::new(socket);
    assert!(sender.start().is_some());
    assert!(sender.start().is_none());
    sender.kill();
}

#[tokio::test]
async fn kill_allows_drain_loop_to_exit() {
    let socket = bind_loopback().await;
    let sender = Sender::new(socket);
    let handle = sender.start().unwrap();
    sender.kill();
    tokio::time::timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
}
