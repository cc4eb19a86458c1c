// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: String, #[source] source: std::io::Error },

    #[error("config file is empty")]
    Empty,

    #[error("invalid switch count on line 1: {0:?}")]
    InvalidCount(String),

    #[error("malformed edge on line {line}: {text:?}")]
    MalformedEdge { line: usize, text: String },

    #[error("invalid edge endpoint on line {line}: {text:?}")]
    InvalidEndpoint { line: usize, text: String },

    #[error("invalid edge cost on line {line}: {text:?}")]
    InvalidCost { line: usize, text: String },
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] sdn_transport::TransportError),

    #[error("logging setup failed: {0}")]
    Logging(#[from] std::io::Error),
}
