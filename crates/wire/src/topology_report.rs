// SPDX-License-Identifier: MIT

//! `topology_update`'s data shape is an object with exactly one key:
//! the reporting switch's id (as a string, because JSON object keys are
//! always strings) mapped to its current neighbor id list. Serde's
//! derive can't express "one key, whose name is data" directly, so this
//! type hand-rolls `Serialize`/`Deserialize`.

use std::collections::HashMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use sdn_core::SwitchId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyReport {
    pub sender: SwitchId,
    pub neighbors: Vec<SwitchId>,
}

impl TopologyReport {
    pub fn new(sender: SwitchId, neighbors: Vec<SwitchId>) -> Self {
        Self { sender, neighbors }
    }
}

impl Serialize for TopologyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.sender.to_string(), &self.neighbors)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for TopologyReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map: HashMap<String, Vec<SwitchId>> = HashMap::deserialize(deserializer)?;
        let mut entries = map.into_iter();
        let (key, neighbors) = entries.next().ok_or_else(|| {
            D::Error::custom("topology_update data must have exactly one key")
        })?;
        if entries.next().is_some() {
            return Err(D::Error::custom("topology_update data must have exactly one key"));
        }
        let sender = key
            .parse::<u32>()
            .map(SwitchId::new)
            .map_err(|_| D::Error::custom(format!("invalid switch id key: {key}")))?;
        Ok(Self { sender, neighbors })
    }
}

#[cfg(test)]
#[path = "topology_report_tests.rs"]
mod tests;
