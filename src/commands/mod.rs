//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI invocation.

pub mod echo;

pub use echo::run_echo;
