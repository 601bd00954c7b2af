//! Unified error types for molbc
//!
//! This module defines all error types used throughout the compiler.
//! Uses thiserror for ergonomic error definitions.

use crate::ast::Operator;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrong number of command-line arguments
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Error from assembly generation
    #[error("Codegen error: {0}")]
    Codegen(#[from] CodegenError),

    /// IO error (stream writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wrong number of command-line arguments
///
/// Displays as the fixed two-line usage text, without a trailing newline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Incorrect usage. Correct usage:\nmolbc {{input.molb}}")]
pub struct UsageError;

/// Errors from the lexer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot continue the current token
    #[error("unexpected character '{character}' at {line}:{column}")]
    UnexpectedChar {
        character: char,
        line: usize,
        column: usize,
    },

    /// A character that starts no known token
    #[error("unknown token '{character}' at {line}:{column}")]
    UnknownToken {
        character: char,
        line: usize,
        column: usize,
    },

    /// No input left
    #[error("end of input")]
    EndOfInput,
}

/// Errors from assembly generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Statement kind with no lowering yet
    #[error("unsupported statement: {0}")]
    UnsupportedStatement(&'static str),

    /// Operator that has no unary form
    #[error("operator '{0}' cannot be used as a unary operator")]
    UnsupportedUnaryOperator(Operator),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
