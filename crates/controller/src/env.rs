// SPDX-License-Identifier: MIT

//! Environment variable overrides. Centralized here rather than read
//! ad-hoc so tests can see the full set at a glance.

use std::time::Duration;

/// Override `PING_TIME` for faster test runs. Falls back to
/// [`sdn_core::PING_TIME`] when unset or unparsable.
pub fn ping_time() -> Duration {
    std::env::var("SDN_PING_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(sdn_core::PING_TIME)
}

/// Override `TIMEOUT`. Falls back to [`sdn_core::TIMEOUT`] when unset
/// or unparsable.
pub fn timeout() -> Duration {
    std::env::var("SDN_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(sdn_core::TIMEOUT)
}

/// Directory the protocol audit log and the operational log are written
/// to. Defaults to the current directory, matching the source's
/// `Controller.log` / `switch<i>.log` placement next to the binary.
pub fn log_dir() -> std::path::PathBuf {
    std::env::var("SDN_LOG_DIR").map(std::path::PathBuf::from).unwrap_or_else(|_| ".".into())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
