//! Error handlers
//!
//! Logging helpers for filesystem errors.

use crate::error::types::{ErrorKind, FsError};
use log::{Level, log};

/// Level a filesystem error is logged at
pub fn log_level(err: &FsError) -> Level {
    match err.kind() {
        ErrorKind::Host(_) => Level::Error,
        _ => Level::Warn,
    }
}

/// Log a filesystem error at a level matching its kind
pub fn log_error(err: &FsError) {
    log!(log_level(err), "Filesystem error: {}", err);
}

/// Log `err` and hand it back, for use in `map_err` chains
pub fn report(err: FsError) -> FsError {
    log_error(&err);
    err
}
