// SPDX-License-Identifier: MIT

use clap::Parser;

use sdn_core::SwitchId;

/// SDN switch: forwards keep_alives, reports topology, and applies
/// routing tables pushed by the controller.
#[derive(Debug, Parser)]
#[command(name = "switch", version)]
pub struct Cli {
    /// This switch's id.
    pub id: SwitchId,

    /// Controller host to register with.
    pub controller_host: String,

    /// Controller UDP port.
    pub controller_port: u16,

    /// Test hook: pretend this neighbor id doesn't exist.
    #[arg(short = 'f', long = "fail")]
    pub failure_id: Option<SwitchId>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
