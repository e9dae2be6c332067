//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Initialize `env_logger` from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_logging() {
    let _ = env_logger::try_init();
}
