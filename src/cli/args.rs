//! CLI argument definitions using clap derive
//!
//! molbc takes exactly one positional argument and no flags.

use crate::error::UsageError;
use clap::Parser;
use std::ffi::OsString;

/// Compiler for .molb source files
#[derive(Parser, Debug)]
#[command(name = "molbc")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Path to the .molb source file (not opened)
    #[arg(value_name = "input.molb", value_parser = clap::value_parser!(OsString))]
    pub input: OsString,
}

/// Parse a full argument vector, program name first.
///
/// Every argument after the program name is positional data, including
/// strings that look like flags or `--`. Any arity mismatch collapses into
/// [`UsageError`]; clap's own diagnostic is only logged.
pub fn parse_args<I, T>(args: I) -> Result<Cli, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("molbc"));

    // An explicit escape makes clap treat everything after it as values.
    let escaped = std::iter::once(bin)
        .chain(std::iter::once(OsString::from("--")))
        .chain(args);

    Cli::try_parse_from(escaped).map_err(|e| {
        log::debug!("argument parsing failed ({:?}): {}", e.kind(), e);
        UsageError
    })
}
