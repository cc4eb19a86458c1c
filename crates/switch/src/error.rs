// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwitchError {
    #[error(transparent)]
    Transport(#[from] sdn_transport::TransportError),

    #[error("logging setup failed: {0}")]
    Logging(#[from] std::io::Error),
}
