//! Casefn command-line front end.
//!
//! The `casefn` binary checks and runs rule files. The library half exists so
//! the commands can be tested without spawning a process.

pub mod builtins;
pub mod commands;
mod logging;

pub use logging::{init_tracing, LOG_ENV, LOG_TREE_ENV};
