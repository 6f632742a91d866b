//! Programmatic construction of a [`Program`].
//!
//! Stands in for a C front end: it allocates arena ids, interns names and
//! types, and assigns every expression the static type a type checker
//! would give it. Tests and embedders use it to hand the interpreter a
//! tree without going through source text.

use crate::ast::{
    BinaryOp, CastKind, Expr, ExprKind, FuncDecl, Item, SizeOfArg, Stmt, StmtKind, UnaryOp,
    VarDecl,
};
use crate::ids::next_index;
use crate::{ExprId, FuncId, Program, StmtId, TypeId, TypeKind, VarId};

/// Integer promotion: `char` operands compute as `int`.
fn promoted(ty: TypeId) -> TypeId {
    if ty == TypeId::CHAR {
        TypeId::INT
    } else {
        ty
    }
}

/// Incremental builder for a translation unit.
#[derive(Default)]
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        ProgramBuilder {
            program: Program::default(),
        }
    }

    /// Finish building and hand out the immutable program.
    pub fn finish(self) -> Program {
        self.program
    }

    /// Read access to the partially built program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    // Types

    pub fn pointer_to(&mut self, pointee: TypeId) -> TypeId {
        self.program.types.pointer_to(pointee)
    }

    pub fn array_of(&mut self, elem: TypeId, len: u64) -> TypeId {
        self.program.types.array_of(elem, len)
    }

    // Declarations

    /// Declare a function and append it to the top-level item list.
    ///
    /// Parameters are added with [`param`](Self::param) and the body with
    /// [`set_body`](Self::set_body), so recursive calls can refer to the
    /// returned id before the body exists.
    pub fn function(&mut self, name: &str, ret: TypeId) -> FuncId {
        let name = self.program.interner.intern(name);
        let id = FuncId::new(next_index(self.program.funcs.len()));
        self.program.funcs.push(FuncDecl {
            name,
            params: Vec::new(),
            ret,
            body: None,
        });
        self.program.items.push(Item::Function(id));
        id
    }

    /// Declare a bodiless function with anonymous parameters of the given
    /// types. This is how the runtime primitives appear in a unit.
    pub fn prototype(&mut self, name: &str, params: &[TypeId], ret: TypeId) -> FuncId {
        let func = self.function(name, ret);
        for (i, &ty) in params.iter().enumerate() {
            self.param(func, &format!("arg{i}"), ty);
        }
        func
    }

    /// Append a parameter to `func`.
    pub fn param(&mut self, func: FuncId, name: &str, ty: TypeId) -> VarId {
        let var = self.var(name, ty, None);
        self.program.funcs[func.index()].params.push(var);
        var
    }

    pub fn set_body(&mut self, func: FuncId, body: StmtId) {
        self.program.funcs[func.index()].body = Some(body);
    }

    /// Declare a variable. It becomes live when a declaration statement
    /// naming it executes.
    pub fn var(&mut self, name: &str, ty: TypeId, init: Option<ExprId>) -> VarId {
        let name = self.program.interner.intern(name);
        let id = VarId::new(next_index(self.program.vars.len()));
        self.program.vars.push(VarDecl { name, ty, init });
        id
    }

    /// Declare a file-scope variable and append it to the item list.
    pub fn global(&mut self, name: &str, ty: TypeId, init: Option<ExprId>) -> VarId {
        let var = self.var(name, ty, init);
        self.program.items.push(Item::Variable(var));
        var
    }

    // Expressions

    fn expr(&mut self, kind: ExprKind, ty: TypeId) -> ExprId {
        let id = ExprId::new(next_index(self.program.exprs.len()));
        self.program.exprs.push(Expr { kind, ty });
        id
    }

    fn ty(&self, expr: ExprId) -> TypeId {
        self.program[expr].ty
    }

    /// Pointer type an operand decays to, if it is a pointer or an array.
    fn decayed_pointer(&mut self, ty: TypeId) -> Option<TypeId> {
        match self.program.types.kind(ty) {
            TypeKind::Pointer(_) => Some(ty),
            TypeKind::Array { elem, .. } => Some(self.pointer_to(elem)),
            _ => None,
        }
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.expr(ExprKind::IntLit(value), TypeId::INT)
    }

    pub fn char_lit(&mut self, value: u8) -> ExprId {
        self.expr(ExprKind::CharLit(value), TypeId::CHAR)
    }

    pub fn string(&mut self, value: &str) -> ExprId {
        let name = self.program.interner.intern(value);
        let ty = self.pointer_to(TypeId::CHAR);
        self.expr(ExprKind::StrLit(name), ty)
    }

    pub fn ident(&mut self, var: VarId) -> ExprId {
        let ty = self.program[var].ty;
        self.expr(ExprKind::Ident(var), ty)
    }

    pub fn paren(&mut self, inner: ExprId) -> ExprId {
        let ty = self.ty(inner);
        self.expr(ExprKind::Paren(inner), ty)
    }

    pub fn sizeof_type(&mut self, ty: TypeId) -> ExprId {
        self.expr(ExprKind::SizeOf(SizeOfArg::Type(ty)), TypeId::INT)
    }

    pub fn sizeof_expr(&mut self, operand: ExprId) -> ExprId {
        self.expr(ExprKind::SizeOf(SizeOfArg::Expr(operand)), TypeId::INT)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        let operand_ty = self.ty(operand);
        let ty = match op {
            UnaryOp::Deref => self
                .program
                .types
                .element_of(operand_ty)
                .unwrap_or(TypeId::INT),
            UnaryOp::AddrOf => self.pointer_to(operand_ty),
            UnaryOp::Not => TypeId::INT,
            UnaryOp::Neg | UnaryOp::Plus | UnaryOp::BitNot => promoted(operand_ty),
        };
        self.expr(ExprKind::Unary { op, operand }, ty)
    }

    pub fn deref(&mut self, operand: ExprId) -> ExprId {
        self.unary(UnaryOp::Deref, operand)
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let left_ty = self.ty(left);
        let right_ty = self.ty(right);
        let ty = match op {
            BinaryOp::Assign => left_ty,
            BinaryOp::Add | BinaryOp::Sub => match self.decayed_pointer(left_ty) {
                Some(ptr) => ptr,
                None if op == BinaryOp::Add => {
                    self.decayed_pointer(right_ty).unwrap_or(promoted(left_ty))
                }
                None => promoted(left_ty),
            },
            _ if op.is_comparison() => TypeId::INT,
            BinaryOp::LogicalAnd | BinaryOp::LogicalOr => TypeId::INT,
            _ => promoted(left_ty),
        };
        self.expr(ExprKind::Binary { op, left, right }, ty)
    }

    pub fn assign(&mut self, target: ExprId, value: ExprId) -> ExprId {
        self.binary(BinaryOp::Assign, target, value)
    }

    pub fn add(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Add, left, right)
    }

    pub fn sub(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Sub, left, right)
    }

    pub fn mul(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Mul, left, right)
    }

    pub fn div(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Div, left, right)
    }

    pub fn lt(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Lt, left, right)
    }

    pub fn gt(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Gt, left, right)
    }

    pub fn eq(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Eq, left, right)
    }

    /// `base[index]`; typed as the element of the array or pointee of the
    /// pointer on the left.
    pub fn index(&mut self, base: ExprId, index: ExprId) -> ExprId {
        let base_ty = self.ty(base);
        let ty = self
            .program
            .types
            .element_of(base_ty)
            .unwrap_or(TypeId::INT);
        self.expr(ExprKind::Index { base, index }, ty)
    }

    pub fn call(&mut self, callee: FuncId, args: Vec<ExprId>) -> ExprId {
        let ty = self.program[callee].ret;
        self.expr(ExprKind::Call { callee, args }, ty)
    }

    /// Explicit `(ty) operand`.
    pub fn cast(&mut self, ty: TypeId, operand: ExprId) -> ExprId {
        self.expr(
            ExprKind::Cast {
                kind: CastKind::Explicit,
                operand,
            },
            ty,
        )
    }

    /// Implicit conversion inserted by a front end, e.g. array decay.
    pub fn implicit_cast(&mut self, ty: TypeId, operand: ExprId) -> ExprId {
        self.expr(
            ExprKind::Cast {
                kind: CastKind::Implicit,
                operand,
            },
            ty,
        )
    }

    // Statements

    fn stmt(&mut self, kind: StmtKind) -> StmtId {
        let id = StmtId::new(next_index(self.program.stmts.len()));
        self.program.stmts.push(Stmt { kind });
        id
    }

    pub fn decl(&mut self, vars: &[VarId]) -> StmtId {
        self.stmt(StmtKind::Decl(vars.to_vec()))
    }

    pub fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        self.stmt(StmtKind::Expr(expr))
    }

    pub fn if_stmt(&mut self, cond: ExprId, then_branch: StmtId, else_branch: Option<StmtId>) -> StmtId {
        self.stmt(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn while_stmt(&mut self, cond: ExprId, body: StmtId) -> StmtId {
        self.stmt(StmtKind::While { cond, body })
    }

    pub fn for_stmt(
        &mut self,
        init: Option<StmtId>,
        cond: Option<ExprId>,
        step: Option<ExprId>,
        body: StmtId,
    ) -> StmtId {
        self.stmt(StmtKind::For {
            init,
            cond,
            step,
            body,
        })
    }

    pub fn ret(&mut self, value: Option<ExprId>) -> StmtId {
        self.stmt(StmtKind::Return(value))
    }

    pub fn block(&mut self, stmts: Vec<StmtId>) -> StmtId {
        self.stmt(StmtKind::Compound(stmts))
    }

    pub fn break_stmt(&mut self) -> StmtId {
        self.stmt(StmtKind::Break)
    }

    pub fn continue_stmt(&mut self) -> StmtId {
        self.stmt(StmtKind::Continue)
    }
}
