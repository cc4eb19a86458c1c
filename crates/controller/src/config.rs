// SPDX-License-Identifier: MIT

//! Parses the controller config file: line 1 is the switch count, each
//! following line is a whitespace-separated `a b cost` edge.

use std::path::Path;

use sdn_core::{ConfiguredEdge, SwitchId};

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub num_switches: u32,
    pub edges: Vec<ConfiguredEdge>,
}

impl ControllerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut lines = text.lines();
        let count_line = lines.next().ok_or(ConfigError::Empty)?;
        let num_switches: u32 = count_line
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidCount(count_line.to_string()))?;

        let mut edges = Vec::new();
        for (offset, line) in lines.enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let line_no = offset + 2;
            let mut parts = line.split_whitespace();
            let a = parts.next().ok_or_else(|| ConfigError::MalformedEdge {
                line: line_no,
                text: line.to_string(),
            })?;
            let b = parts.next().ok_or_else(|| ConfigError::MalformedEdge {
                line: line_no,
                text: line.to_string(),
            })?;
            let cost = parts.next().ok_or_else(|| ConfigError::MalformedEdge {
                line: line_no,
                text: line.to_string(),
            })?;
            if parts.next().is_some() {
                return Err(ConfigError::MalformedEdge { line: line_no, text: line.to_string() });
            }

            let a: u32 = a
                .parse()
                .map_err(|_| ConfigError::InvalidEndpoint { line: line_no, text: line.to_string() })?;
            let b: u32 = b
                .parse()
                .map_err(|_| ConfigError::InvalidEndpoint { line: line_no, text: line.to_string() })?;
            let cost: u32 = cost
                .parse()
                .map_err(|_| ConfigError::InvalidCost { line: line_no, text: line.to_string() })?;

            edges.push(ConfiguredEdge::new(SwitchId::new(a), SwitchId::new(b), cost));
        }

        Ok(Self { num_switches, edges })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
