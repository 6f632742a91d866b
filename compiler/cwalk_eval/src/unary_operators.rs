//! Unary operator implementations for the evaluator.
//!
//! Dereference needs the heap and is handled by the interpreter; this
//! module covers the operators that only look at the operand's cell.

use cwalk_ir::UnaryOp;

use crate::errors::{unsupported_operator, EvalResult};

/// Evaluate a value-only unary operation on a cell.
pub fn evaluate_unary(op: UnaryOp, operand: i64) -> EvalResult<i64> {
    match op {
        UnaryOp::Neg => Ok(operand.wrapping_neg()),
        UnaryOp::Plus => Ok(operand),
        UnaryOp::BitNot => Ok(!operand),
        UnaryOp::Not => Ok(i64::from(operand == 0)),
        UnaryOp::Deref | UnaryOp::AddrOf => Err(unsupported_operator(op.as_symbol())),
    }
}
