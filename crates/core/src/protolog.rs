// SPDX-License-Identifier: MIT

//! Append-only writer for the protocol audit log (`Controller.log`,
//! `switch<i>.log`).
//!
//! Each entry is a timestamp line followed by one or more content
//! lines, with a blank line separating it from the previous entry.
//! Writes open, append, and close the file each time — matching the log
//! write volume of a handful of events per `PING_TIME` window — and are
//! serialized by a single lock per the spec's "per-role log lock".
//! Failures are reported via `tracing::warn!` and otherwise swallowed:
//! logging must never interrupt the control loop.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::CoreError;

/// Append-only protocol log writer.
pub struct ProtoLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ProtoLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one log entry: a timestamp line followed by `lines`,
    /// preceded by a blank line.
    pub fn append(&self, timestamp: &str, lines: &[String]) {
        let _guard = self.lock.lock();
        if let Err(e) = self.write_entry(timestamp, lines) {
            tracing::warn!(error = %e, "failed to write protocol log");
        }
    }

    fn write_entry(&self, timestamp: &str, lines: &[String]) -> Result<(), CoreError> {
        let write = || -> std::io::Result<()> {
            let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            writeln!(file)?;
            writeln!(file, "{timestamp}")?;
            for line in lines {
                writeln!(file, "{line}")?;
            }
            Ok(())
        };
        write().map_err(|source| CoreError::ProtoLogWrite {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Current local time formatted as `HH:MM:SS[.ffffff]`, matching the
/// source protocol's `str(datetime.time(datetime.now()))`: the
/// fractional part is omitted entirely when the microsecond component
/// is exactly zero, not printed as `.000000`.
pub fn format_timestamp() -> String {
    let now = chrono::Local::now();
    let micros = now.timestamp_subsec_micros();
    if micros == 0 {
        now.format("%H:%M:%S").to_string()
    } else {
        format!("{}.{micros:06}", now.format("%H:%M:%S"))
    }
}

#[cfg(test)]
#[path = "protolog_tests.rs"]
mod tests;
