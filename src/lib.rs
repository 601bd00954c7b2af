//! molbc - compiler for .molb source files
//!
//! This library provides the command-line entry contract and the
//! front-end pieces of the compiler.
//!
//! # Modules
//!
//! - [`ast`]: Syntax tree consumed by the code generator
//! - [`cli`]: Command-line interface definitions
//! - [`codegen`]: x86-64 assembly generation
//! - [`commands`]: Command handlers
//! - [`error`]: Error types
//! - [`lexer`]: Tokenizer for .molb source text

pub mod ast;
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod error;
pub mod lexer;

pub use error::{AppError, Result};
