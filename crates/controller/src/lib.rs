// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sdn-controller: the controller role's state machine, handlers, and
//! config-file loading. The binary entry point lives in `main.rs`; this
//! library is what the handler-level tests exercise directly, without
//! any real sockets.

pub mod cli;
pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod state;

pub use cli::Cli;
pub use config::ControllerConfig;
pub use controller::Controller;
pub use error::{ConfigError, ControllerError};
pub use sdn_wire::Dispatch;
