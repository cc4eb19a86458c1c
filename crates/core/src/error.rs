// SPDX-License-Identifier: MIT

//! Crate-local error type for `sdn-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to write protocol log {path}: {source}")]
    ProtoLogWrite { path: String, #[source] source: std::io::Error },
}
