//! Expression evaluation.

use cwalk_ir::{BinaryOp, ExprId, ExprKind, TypeId, UnaryOp, VarId, CELL_WIDTH};
use cwalk_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    unbound_variable, unsupported_assignment_target, unsupported_expression,
    unsupported_operator, EvalResult,
};
use crate::operators::{evaluate_binary, is_supported_binary};
use crate::unary_operators::evaluate_unary;
use crate::value::width_cell;
use crate::{Address, Value};

impl Interpreter<'_> {
    /// Evaluate `id` in the active frame and cache the result there.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| {
            let value = self.eval_inner(id)?;
            self.stack.top_mut().bind_expr(id, value);
            Ok(value)
        })
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let program = self.program;
        let expr = &program[id];
        match &expr.kind {
            ExprKind::Ident(var) => self.read_var(*var),
            ExprKind::IntLit(n) => Ok(Value::Int(*n)),
            ExprKind::CharLit(c) => Ok(Value::Char(i8::from_le_bytes([*c]))),
            ExprKind::Paren(inner) => self.eval(*inner),
            // Every scalar occupies one cell; the operand is not evaluated.
            ExprKind::SizeOf(_) => Ok(Value::Int(width_cell(CELL_WIDTH))),
            ExprKind::Unary { op, operand } => self.eval_unary(*op, *operand, expr.ty),
            ExprKind::Binary { op, left, right } => {
                self.eval_binary(*op, *left, *right, expr.ty)
            }
            ExprKind::Index { base, index } => {
                let address = self.element_address(*base, *index)?;
                self.load(address, expr.ty)
            }
            ExprKind::Call { callee, args } => self.eval_call(*callee, args, expr.ty),
            ExprKind::Cast { operand, .. } => self.eval(*operand),
            ExprKind::StrLit(_) => Err(unsupported_expression(expr.kind.describe())),
        }
    }

    fn eval_unary(&mut self, op: UnaryOp, operand: ExprId, ty: TypeId) -> EvalResult {
        match op {
            UnaryOp::AddrOf => Err(unsupported_operator(op.as_symbol())),
            UnaryOp::Deref => {
                let pointer = self.eval(operand)?;
                self.load(pointer.as_address(), ty)
            }
            UnaryOp::Neg | UnaryOp::Plus | UnaryOp::BitNot | UnaryOp::Not => {
                let value = self.eval(operand)?;
                let cell = evaluate_unary(op, value.cell())?;
                Ok(Value::reinterpret(cell, ty, &self.program.types))
            }
        }
    }

    fn eval_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, ty: TypeId) -> EvalResult {
        if !is_supported_binary(op) {
            return Err(unsupported_operator(op.as_symbol()));
        }
        if op.is_assignment() {
            return self.eval_assign(left, right);
        }

        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        let (mut a, mut b) = (lhs.cell(), rhs.cell());

        if matches!(op, BinaryOp::Add | BinaryOp::Sub) {
            let types = &self.program.types;
            let left_elem = types.element_of(self.program[left].ty);
            let right_elem = types.element_of(self.program[right].ty);
            match (left_elem, right_elem) {
                (Some(elem), None) => b = b.wrapping_mul(width_cell(types.width_of(elem))),
                (None, Some(elem)) if op == BinaryOp::Add => {
                    a = a.wrapping_mul(width_cell(types.width_of(elem)));
                }
                _ => {}
            }
        }

        let cell = evaluate_binary(op, a, b)?;
        Ok(Value::reinterpret(cell, ty, &self.program.types))
    }

    /// `target = value`. The right-hand side is evaluated first; the result
    /// is the stored value as seen through the target's type.
    fn eval_assign(&mut self, target: ExprId, value: ExprId) -> EvalResult {
        let value = self.eval(value)?;
        let program = self.program;

        let mut target = target;
        while let ExprKind::Paren(inner) = program[target].kind {
            target = inner;
        }
        let target_ty = program[target].ty;
        let stored = Value::reinterpret(value.cell(), target_ty, &program.types);

        match &program[target].kind {
            ExprKind::Ident(var) => self.write_var(*var, stored),
            ExprKind::Index { base, index } => {
                let address = self.element_address(*base, *index)?;
                self.store(address, target_ty, stored)?;
            }
            ExprKind::Unary {
                op: UnaryOp::Deref,
                operand,
            } => {
                let pointer = self.eval(*operand)?;
                self.store(pointer.as_address(), target_ty, stored)?;
            }
            other => return Err(unsupported_assignment_target(other.describe())),
        }
        self.stack.top_mut().bind_expr(target, stored);
        Ok(stored)
    }

    /// Address of `base[index]`: the base's cell plus `index` elements.
    fn element_address(&mut self, base: ExprId, index: ExprId) -> EvalResult<Address> {
        let base_value = self.eval(base)?;
        let index_value = self.eval(index)?;
        let types = &self.program.types;
        let elem = types
            .element_of(self.program[base].ty)
            .unwrap_or(TypeId::INT);
        let stride = width_cell(types.width_of(elem));
        Ok(base_value
            .as_address()
            .offset(index_value.cell().wrapping_mul(stride)))
    }

    /// Read a value of type `ty` stored at `address`. An array-typed
    /// location is not loaded; it denotes its own base address.
    fn load(&self, address: Address, ty: TypeId) -> EvalResult {
        let types = &self.program.types;
        if types.is_array(ty) {
            return Ok(Value::ArrayBase(address));
        }
        let cell = self.heap.load(address, types.width_of(ty))?;
        Ok(Value::reinterpret(cell, ty, types))
    }

    fn store(&mut self, address: Address, ty: TypeId, value: Value) -> EvalResult<()> {
        let width = self.program.types.width_of(ty);
        self.heap.store(address, width, value.cell())
    }

    /// Binding of `var` in the active frame, falling back to file scope for
    /// file-scope variables the active frame does not shadow.
    pub(super) fn read_var(&self, var: VarId) -> EvalResult {
        let frame = self.stack.top();
        frame
            .lookup(var)
            .or_else(|| {
                if self.setup.is_global(var) {
                    self.stack.global().lookup(var)
                } else {
                    None
                }
            })
            .ok_or_else(|| unbound_variable(self.program.var_name(var)))
    }

    pub(super) fn write_var(&mut self, var: VarId, value: Value) {
        if self.setup.is_global(var) && !self.stack.top().has_decl(var) {
            self.stack.global_mut().bind_decl(var, value);
        } else {
            self.stack.top_mut().bind_decl(var, value);
        }
    }
}
