// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sdn-switch: the switch role's state machine and handlers. The
//! binary entry point lives in `main.rs`; this library is what the
//! handler-level tests exercise directly, without any real sockets.

pub mod cli;
pub mod env;
pub mod error;
pub mod state;
pub mod switch;

pub use cli::Cli;
pub use error::SwitchError;
pub use sdn_wire::Dispatch;
pub use switch::Switch;
