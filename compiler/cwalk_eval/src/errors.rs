//! Error types and centralized error constructors for the evaluator.
//!
//! Every error the interpreter can raise is fatal to the run: there is no
//! recovery path visible to the interpreted program. Constructors live
//! here so call sites read as `Err(division_by_zero())`.
//!
//! # Usage
//!
//! ```ignore
//! use cwalk_eval::errors::{division_by_zero, unbound_variable};
//! ```

use std::fmt;

use cwalk_ir::ExprId;

/// Result of evaluation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Typed error category.
///
/// Each variant carries the data needed to render its diagnostic; callers
/// match on the kind rather than parsing messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,

    // Bindings
    UnboundVariable {
        name: String,
    },
    UnevaluatedExpression {
        expr: ExprId,
    },

    // Unsupported constructs
    UnsupportedExpression {
        kind: &'static str,
    },
    UnsupportedStatement {
        kind: &'static str,
    },
    UnsupportedOperator {
        op: &'static str,
    },
    UnsupportedAssignmentTarget {
        kind: &'static str,
    },
    MissingForCondition,

    // Functions
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    MissingEntryPoint {
        name: &'static str,
    },
    MissingFunctionBody {
        name: String,
    },
    StackOverflow {
        depth: usize,
    },

    // Memory
    InvalidAddress {
        address: u64,
    },
    InvalidAllocation {
        size: i64,
    },

    /// Popping the file-scope frame. Indicates an interpreter bug.
    CallStackUnderflow,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),

            Self::UnboundVariable { name } => {
                write!(f, "variable `{name}` is not bound in the active frame")
            }
            Self::UnevaluatedExpression { expr } => {
                write!(f, "{expr:?} has not been evaluated in the active frame")
            }

            Self::UnsupportedExpression { kind } => {
                write!(f, "unsupported expression: {kind}")
            }
            Self::UnsupportedStatement { kind } => write!(f, "unsupported statement: {kind}"),
            Self::UnsupportedOperator { op } => write!(f, "unsupported operator `{op}`"),
            Self::UnsupportedAssignmentTarget { kind } => {
                write!(f, "cannot assign to {kind}")
            }
            Self::MissingForCondition => write!(f, "`for` statement without a condition"),

            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::MissingEntryPoint { name } => write!(f, "no `{name}` function to run"),
            Self::MissingFunctionBody { name } => {
                write!(f, "function `{name}` is declared but never defined")
            }
            Self::StackOverflow { depth } => {
                write!(f, "call depth limit exceeded ({depth} frames)")
            }

            Self::InvalidAddress { address } => {
                write!(f, "access to unallocated address 0x{address:x}")
            }
            Self::InvalidAllocation { size } => write!(f, "cannot allocate {size} bytes"),

            Self::CallStackUnderflow => write!(f, "attempted to pop the file-scope frame"),
        }
    }
}

/// Fatal evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

// Binding Errors

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn unevaluated_expression(expr: ExprId) -> EvalError {
    EvalErrorKind::UnevaluatedExpression { expr }.into()
}

// Unsupported Construct Errors

#[cold]
pub fn unsupported_expression(kind: &'static str) -> EvalError {
    EvalErrorKind::UnsupportedExpression { kind }.into()
}

#[cold]
pub fn unsupported_statement(kind: &'static str) -> EvalError {
    EvalErrorKind::UnsupportedStatement { kind }.into()
}

#[cold]
pub fn unsupported_operator(op: &'static str) -> EvalError {
    EvalErrorKind::UnsupportedOperator { op }.into()
}

#[cold]
pub fn unsupported_assignment_target(kind: &'static str) -> EvalError {
    EvalErrorKind::UnsupportedAssignmentTarget { kind }.into()
}

#[cold]
pub fn missing_for_condition() -> EvalError {
    EvalErrorKind::MissingForCondition.into()
}

// Function Errors

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    }
    .into()
}

#[cold]
pub fn missing_entry_point(name: &'static str) -> EvalError {
    EvalErrorKind::MissingEntryPoint { name }.into()
}

#[cold]
pub fn missing_function_body(name: &str) -> EvalError {
    EvalErrorKind::MissingFunctionBody {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalErrorKind::StackOverflow { depth }.into()
}

// Memory Errors

#[cold]
pub fn invalid_address(address: u64) -> EvalError {
    EvalErrorKind::InvalidAddress { address }.into()
}

#[cold]
pub fn invalid_allocation(size: i64) -> EvalError {
    EvalErrorKind::InvalidAllocation { size }.into()
}

#[cold]
pub fn call_stack_underflow() -> EvalError {
    EvalErrorKind::CallStackUnderflow.into()
}
