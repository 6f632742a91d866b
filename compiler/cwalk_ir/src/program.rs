//! The translation unit handed to the interpreter.

use std::ops::Index;

use crate::ast::{Expr, FuncDecl, Item, Stmt, VarDecl};
use crate::{ExprId, FuncId, Name, StmtId, StringInterner, TypePool, VarId};

/// A fully resolved translation unit.
///
/// Immutable once built: the interpreter only reads from it. Node storage
/// is flat, one arena per node category, indexed by the matching id type.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub interner: StringInterner,
    pub types: TypePool,
    pub(crate) exprs: Vec<Expr>,
    pub(crate) stmts: Vec<Stmt>,
    pub(crate) vars: Vec<VarDecl>,
    pub(crate) funcs: Vec<FuncDecl>,
    pub(crate) items: Vec<Item>,
}

impl Program {
    /// Top-level declarations in source order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn name(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    pub fn func_name(&self, func: FuncId) -> &str {
        self.interner.lookup(self[func].name)
    }

    pub fn var_name(&self, var: VarId) -> &str {
        self.interner.lookup(self[var].name)
    }
}

impl Index<ExprId> for Program {
    type Output = Expr;

    fn index(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }
}

impl Index<StmtId> for Program {
    type Output = Stmt;

    fn index(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }
}

impl Index<VarId> for Program {
    type Output = VarDecl;

    fn index(&self, id: VarId) -> &VarDecl {
        &self.vars[id.index()]
    }
}

impl Index<FuncId> for Program {
    type Output = FuncDecl;

    fn index(&self, id: FuncId) -> &FuncDecl {
        &self.funcs[id.index()]
    }
}
