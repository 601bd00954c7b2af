//! Syntax tree for .molb programs
//!
//! The shapes the code generator lowers. Nothing builds these from source
//! text yet.

use std::fmt;

/// An item at the top of a program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevel {
    Function(Function),
    Statement(Statement),
}

/// A named function and its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub body: Vec<Statement>,
}

impl Function {
    pub fn new(name: impl Into<String>, body: Vec<Statement>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(Expression),
    Break,
    Continue,
}

impl Statement {
    /// Keyword that introduces this statement
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Return(_) => "return",
            Self::Break => "break",
            Self::Continue => "continue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    IntLiteral(i64),
    UnaryOp(Operator, Box<Expression>),
    BinaryOp(Box<Expression>, Operator, Box<Expression>),
}

impl Expression {
    pub fn unary(op: Operator, inner: Expression) -> Self {
        Self::UnaryOp(op, Box::new(inner))
    }

    pub fn binary(lhs: Expression, op: Operator, rhs: Expression) -> Self {
        Self::BinaryOp(Box::new(lhs), op, Box::new(rhs))
    }
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        };
        f.write_str(symbol)
    }
}
