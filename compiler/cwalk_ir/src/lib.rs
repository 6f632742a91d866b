//! cwalk IR - the resolved syntax tree of a C translation unit.
//!
//! This crate holds the data the interpreter consumes:
//! - Interned names (`Name`) and static types (`TypeId`, `TypePool`)
//! - Arena ids for expressions, statements, variables and functions
//! - AST nodes (`Expr`, `Stmt`, `VarDecl`, `FuncDecl`)
//! - `Program`, the immutable unit, and `ProgramBuilder` to assemble one
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Expr>`, nodes refer to each other by id
//! - **Resolve Up Front**: identifier references carry the `VarId` they
//!   denote and every expression carries its static type, so the
//!   interpreter never performs name resolution or type inference

pub mod ast;
mod builder;
mod ids;
mod name;
mod program;
mod types;

pub use ast::{
    BinaryOp, CastKind, Expr, ExprKind, FuncDecl, Item, SizeOfArg, Stmt, StmtKind, UnaryOp,
    VarDecl,
};
pub use builder::ProgramBuilder;
pub use ids::{ExprId, FuncId, StmtId, VarId};
pub use name::{Name, StringInterner};
pub use program::Program;
pub use types::{TypeId, TypeKind, TypePool, CELL_WIDTH};
