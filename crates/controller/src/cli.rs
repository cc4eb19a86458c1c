// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;

/// SDN controller: holds the authoritative topology and pushes routing
/// tables to registered switches.
#[derive(Debug, Parser)]
#[command(name = "controller", version)]
pub struct Cli {
    /// UDP port to listen on.
    pub port: u16,

    /// Path to the config file: line 1 is the switch count, each
    /// following line is `a b cost`.
    pub config_path: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
