//! x86-64 assembly generation
//!
//! Lowers a program to NASM-style text. Expressions are evaluated into
//! `rax`, using the stack for the left operand of binary operators. The
//! `_start` stub calls `entry` and exits with its return value.

use crate::ast::{Expression, Operator, Statement, TopLevel};
use crate::error::{CodegenError, Result};

/// Entry stub emitted at the top of every program
pub const PROLOGUE: &str = "global _start\n\
                            _start:\n\
                            \tcall entry\n\
                            \tmov rdi, rax\n\
                            \tmov rax, 60\n\
                            \tsyscall\n\n";

/// Generate assembly for a whole program
///
/// # Errors
/// Returns `AppError::Codegen` for statements or operators with no lowering.
pub fn generate(program: &[TopLevel]) -> Result<String> {
    let mut out = String::from(PROLOGUE);

    for item in program {
        match item {
            TopLevel::Function(function) => {
                log::debug!("generating function {}", function.name);
                out.push_str(&function.name);
                out.push_str(":\n");

                for stmt in &function.body {
                    statement(&mut out, stmt)?;
                }
            }
            TopLevel::Statement(stmt) => statement(&mut out, stmt)?,
        }
    }

    Ok(out)
}

fn statement(out: &mut String, stmt: &Statement) -> std::result::Result<(), CodegenError> {
    match stmt {
        Statement::Return(value) => {
            expression(out, value)?;
            out.push_str("    ret\n");
            Ok(())
        }
        other => Err(CodegenError::UnsupportedStatement(other.keyword())),
    }
}

fn expression(out: &mut String, expr: &Expression) -> std::result::Result<(), CodegenError> {
    match expr {
        Expression::IntLiteral(value) => {
            out.push_str(&format!("    mov rax, {}\n", value));
        }
        Expression::UnaryOp(op, inner) => {
            expression(out, inner)?;
            match op {
                Operator::Add => {}
                Operator::Subtract => out.push_str("    neg rax\n"),
                other => return Err(CodegenError::UnsupportedUnaryOperator(*other)),
            }
        }
        Expression::BinaryOp(lhs, op, rhs) => {
            expression(out, lhs)?;
            out.push_str("    push rax\n");
            expression(out, rhs)?;
            out.push_str("    pop rbx\n");

            // rbx = lhs, rax = rhs
            let tail = match op {
                Operator::Add => "    add rbx, rax\n    mov rax, rbx\n",
                Operator::Subtract => "    sub rbx, rax\n    mov rax, rbx\n",
                Operator::Multiply => "    imul rbx, rax\n    mov rax, rbx\n",
                Operator::Divide => "    xchg rax, rbx\n    xor rdx, rdx\n    idiv rbx\n",
            };
            out.push_str(tail);
        }
    }

    Ok(())
}
