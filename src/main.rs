//! molbc - compiler for .molb source files
//!
//! Usage: `molbc {input.molb}`

use molbc::cli::output::print_error;
use molbc::cli::parse_args;
use molbc::commands::run_echo;
use molbc::error::AppError;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("exiting with error: {:?}", e);
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run<I: IntoIterator<Item = OsString>>(args: I) -> Result<(), AppError> {
    let cli = parse_args(args)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_echo(&cli.input, &mut handle)
}
