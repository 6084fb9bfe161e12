//! Logging utilities.
//!
//! The library only emits through the `log` facade. Binaries and tests that want output
//! call [`init_logging`] once; the backend is `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig, LOG_ENV};
