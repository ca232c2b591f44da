//! Logging utilities.
//!
//! Centralizes logger initialization. Only the standard `log` facade is
//! imposed on the rest of the codebase.

mod init;

pub use init::{init_logging, LoggingConfig};
