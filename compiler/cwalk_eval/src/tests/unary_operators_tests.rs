//! Tests for unary operator implementations.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use cwalk_ir::UnaryOp;
use pretty_assertions::assert_eq;

use crate::errors::EvalErrorKind;
use crate::unary_operators::evaluate_unary;

#[test]
fn test_negation_and_plus() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, 5).unwrap(), -5);
    assert_eq!(evaluate_unary(UnaryOp::Neg, i64::MIN).unwrap(), i64::MIN);
    assert_eq!(evaluate_unary(UnaryOp::Plus, -9).unwrap(), -9);
}

#[test]
fn test_bitwise_and_logical_not() {
    assert_eq!(evaluate_unary(UnaryOp::BitNot, 0).unwrap(), -1);
    assert_eq!(evaluate_unary(UnaryOp::Not, 0).unwrap(), 1);
    assert_eq!(evaluate_unary(UnaryOp::Not, -3).unwrap(), 0);
}

#[test]
fn test_address_operators_are_not_value_operators() {
    assert_eq!(
        evaluate_unary(UnaryOp::AddrOf, 0).unwrap_err().kind,
        EvalErrorKind::UnsupportedOperator { op: "&" }
    );
    assert!(evaluate_unary(UnaryOp::Deref, 0).is_err());
}
