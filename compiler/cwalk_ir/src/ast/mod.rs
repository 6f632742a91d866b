//! Tree node definitions.
//!
//! Nodes refer to each other through arena ids, never through boxes, and
//! every identifier reference already points at the declaration it denotes.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

use crate::{ExprId, FuncId, Name, StmtId, TypeId, VarId};

/// Expression node. `ty` is the static type resolved by the front end.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: TypeId,
}

/// Whether a cast was written in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CastKind {
    Implicit,
    Explicit,
}

/// Operand of `sizeof`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SizeOfArg {
    Type(TypeId),
    Expr(ExprId),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Reference to a variable or parameter.
    Ident(VarId),
    IntLit(i64),
    CharLit(u8),
    StrLit(Name),
    Paren(ExprId),
    SizeOf(SizeOfArg),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `base[index]`
    Index {
        base: ExprId,
        index: ExprId,
    },
    Call {
        callee: FuncId,
        args: Vec<ExprId>,
    },
    Cast {
        kind: CastKind,
        operand: ExprId,
    },
}

impl ExprKind {
    /// Short human-readable name of the node kind, for diagnostics.
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Ident(_) => "identifier",
            Self::IntLit(_) => "integer literal",
            Self::CharLit(_) => "character literal",
            Self::StrLit(_) => "string literal",
            Self::Paren(_) => "parenthesized expression",
            Self::SizeOf(_) => "sizeof",
            Self::Unary { .. } => "unary operator",
            Self::Binary { .. } => "binary operator",
            Self::Index { .. } => "array subscript",
            Self::Call { .. } => "call",
            Self::Cast { .. } => "cast",
        }
    }
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `int a = 1, b[4];`
    Decl(Vec<VarId>),
    Expr(ExprId),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    For {
        init: Option<StmtId>,
        cond: Option<ExprId>,
        step: Option<ExprId>,
        body: StmtId,
    },
    Return(Option<ExprId>),
    Compound(Vec<StmtId>),
    Break,
    Continue,
}

impl StmtKind {
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Decl(_) => "declaration",
            Self::Expr(_) => "expression statement",
            Self::If { .. } => "if",
            Self::While { .. } => "while",
            Self::For { .. } => "for",
            Self::Return(_) => "return",
            Self::Compound(_) => "compound statement",
            Self::Break => "break",
            Self::Continue => "continue",
        }
    }
}

/// Variable or parameter declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub name: Name,
    pub ty: TypeId,
    pub init: Option<ExprId>,
}

/// Function declaration. `body` is `None` for prototypes, which is how the
/// runtime primitives are declared.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FuncDecl {
    pub name: Name,
    pub params: Vec<VarId>,
    pub ret: TypeId,
    pub body: Option<StmtId>,
}

/// Top-level declaration of the translation unit, in source order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Item {
    Function(FuncId),
    Variable(VarId),
}
