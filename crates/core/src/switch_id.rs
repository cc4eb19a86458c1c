// SPDX-License-Identifier: MIT

//! Switch identifier: a small non-negative integer used as a map key
//! throughout the controller and switch roles.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A switch's numeric id, as carried on the wire and in routing rows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SwitchId(pub u32);

impl SwitchId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SwitchId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u32> for SwitchId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<SwitchId> for u32 {
    fn from(id: SwitchId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[path = "switch_id_tests.rs"]
mod tests;
