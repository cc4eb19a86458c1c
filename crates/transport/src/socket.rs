// SPDX-License-Identifier: MIT

use std::sync::Arc;

use tokio::net::UdpSocket;

use crate::error::TransportError;

/// Bind a UDP socket on `0.0.0.0:<port>`, wrapped for sharing between
/// the listener and sender halves.
pub async fn bind(port: u16) -> Result<Arc<UdpSocket>, TransportError> {
    let addr = format!("0.0.0.0:{port}");
    let socket = UdpSocket::bind(&addr)
        .await
        .map_err(|source| TransportError::Bind { addr, source })?;
    Ok(Arc::new(socket))
}

#[cfg(test)]
#[path = "socket_tests.rs"]
mod tests;
