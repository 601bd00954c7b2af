//! Echo command implementation
//!
//! Writes the validated input path back out. The file itself is never opened.

use crate::error::Result;
use std::ffi::OsStr;
use std::io::Write;

/// Execute the echo command
///
/// The path is written byte-for-byte with no trailing newline.
pub fn run_echo<W: Write>(input: &OsStr, out: &mut W) -> Result<()> {
    log::debug!("echoing input path {:?}", input);

    out.write_all(input.as_encoded_bytes())?;
    out.flush()?;

    Ok(())
}
