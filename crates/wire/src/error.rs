// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Wire-level failures: malformed JSON or an unrecognized `action`.
/// Both are protocol errors per spec section 7 — logged and discarded,
/// never fatal to the role processing them.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}
