//! Output formatting utilities
//!
//! Diagnostics written to stderr by the binary.

use crate::error::AppError;
use std::io::{self, Write};

/// Write an error report for the user
///
/// Usage errors are written verbatim as the two-line usage text. Everything
/// else is prefixed with `Error:`.
pub fn write_error<W: Write>(out: &mut W, err: &AppError) -> io::Result<()> {
    match err {
        AppError::Usage(usage) => writeln!(out, "{}", usage)?,
        other => writeln!(out, "Error: {}", other)?,
    }
    out.flush()
}

/// Print an error report to stderr
pub fn print_error(err: &AppError) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();

    // Nowhere left to report a failing stderr.
    let _ = write_error(&mut handle, err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodegenError, UsageError};

    #[test]
    fn test_usage_text_verbatim() {
        let mut buf = Vec::new();
        write_error(&mut buf, &UsageError.into()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Incorrect usage. Correct usage:\nmolbc {input.molb}\n"
        );
    }

    #[test]
    fn test_other_errors_prefixed() {
        let mut buf = Vec::new();
        let err: AppError = CodegenError::UnsupportedStatement("break").into();
        write_error(&mut buf, &err).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Error: Codegen error: unsupported statement: break\n"
        );
    }
}
