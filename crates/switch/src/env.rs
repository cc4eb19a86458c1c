// SPDX-License-Identifier: MIT

//! Environment variable overrides, mirroring `sdn_controller::env`.

use std::time::Duration;

pub fn ping_time() -> Duration {
    std::env::var("SDN_PING_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(sdn_core::PING_TIME)
}

pub fn timeout() -> Duration {
    std::env::var("SDN_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(sdn_core::TIMEOUT)
}

pub fn log_dir() -> std::path::PathBuf {
    std::env::var("SDN_LOG_DIR").map(std::path::PathBuf::from).unwrap_or_else(|_| ".".into())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
