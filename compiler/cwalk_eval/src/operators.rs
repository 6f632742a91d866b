//! Binary operator implementations for the evaluator.
//!
//! Operands arrive as raw cells; pointer scaling has already been applied
//! by the caller, so everything here is plain 64-bit integer arithmetic.
//! Arithmetic wraps on overflow the way the host's `int64_t` does.

use cwalk_ir::BinaryOp;

use crate::errors::{division_by_zero, unsupported_operator, EvalResult};

/// Whether the interpreter implements `op` at all. Checked before operands
/// are evaluated so an unsupported operator fails without side effects.
pub fn is_supported_binary(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::Assign
            | BinaryOp::Add
            | BinaryOp::Sub
            | BinaryOp::Mul
            | BinaryOp::Div
            | BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::LtEq
            | BinaryOp::GtEq
            | BinaryOp::Eq
            | BinaryOp::NotEq
    )
}

/// Evaluate a non-assignment binary operation on two cells.
///
/// Comparisons produce 0 or 1.
pub fn evaluate_binary(op: BinaryOp, a: i64, b: i64) -> EvalResult<i64> {
    match op {
        BinaryOp::Add => Ok(a.wrapping_add(b)),
        BinaryOp::Sub => Ok(a.wrapping_sub(b)),
        BinaryOp::Mul => Ok(a.wrapping_mul(b)),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                Ok(a.wrapping_div(b))
            }
        }
        BinaryOp::Lt => Ok(i64::from(a < b)),
        BinaryOp::Gt => Ok(i64::from(a > b)),
        BinaryOp::LtEq => Ok(i64::from(a <= b)),
        BinaryOp::GtEq => Ok(i64::from(a >= b)),
        BinaryOp::Eq => Ok(i64::from(a == b)),
        BinaryOp::NotEq => Ok(i64::from(a != b)),
        BinaryOp::Assign
        | BinaryOp::Rem
        | BinaryOp::BitAnd
        | BinaryOp::BitOr
        | BinaryOp::LogicalAnd
        | BinaryOp::LogicalOr => Err(unsupported_operator(op.as_symbol())),
    }
}
