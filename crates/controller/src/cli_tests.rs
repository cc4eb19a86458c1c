// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn parses_port_and_config_path() {
    let cli = Cli::parse_from(["controller", "9000", "topo.conf"]);
    assert_eq!(cli.port, 9000);
    assert_eq!(cli.config_path, PathBuf::from("topo.conf"));
}

#[test]
fn rejects_missing_config_path() {
    assert!(Cli::try_parse_from(["controller", "9000"]).is_err());
}
