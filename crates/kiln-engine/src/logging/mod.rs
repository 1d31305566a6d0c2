//! Logger setup.
//!
//! Library code only ever talks to the `log` facade; `env_logger` is wired up here,
//! once, by the binary.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
