// SPDX-License-Identifier: MIT

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn ping_time_defaults_to_core_constant() {
    std::env::remove_var("SDN_PING_MS");
    assert_eq!(ping_time(), sdn_core::PING_TIME);
}

#[test]
#[serial]
fn timeout_honors_override() {
    std::env::set_var("SDN_TIMEOUT_MS", "150");
    assert_eq!(timeout(), Duration::from_millis(150));
    std::env::remove_var("SDN_TIMEOUT_MS");
}

#[test]
#[serial]
fn log_dir_defaults_to_cwd() {
    std::env::remove_var("SDN_LOG_DIR");
    assert_eq!(log_dir(), std::path::PathBuf::from("."));
}
