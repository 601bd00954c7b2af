//! CLI argument parsing and output formatting
//!
//! Uses clap for the argument definitions.

pub mod args;
pub mod output;

pub use args::{parse_args, Cli};
