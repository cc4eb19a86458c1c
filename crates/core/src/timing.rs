// SPDX-License-Identifier: MIT

//! Timing constants governing both liveness detectors.

use std::time::Duration;

/// Interval at which a switch broadcasts a keep-alive ping to its
/// neighbors and reports its topology to the controller.
pub const PING_TIME: Duration = Duration::from_secs(2);

/// A peer is declared dead if no liveness signal has been seen for this
/// long. Three ping periods, per the source protocol.
pub const TIMEOUT: Duration = Duration::from_secs(3 * PING_TIME.as_secs());
