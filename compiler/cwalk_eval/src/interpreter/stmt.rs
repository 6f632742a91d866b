//! Statement execution and control flow.

use cwalk_ir::{StmtId, StmtKind, TypeKind, VarId};
use cwalk_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{missing_for_condition, unsupported_statement, EvalResult};
use crate::heap::BlockOrigin;
use crate::value::width_cell;
use crate::Value;

/// How a statement finished.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ExecOutcome {
    /// Fell off the end; continue with the next statement.
    Completed,
    /// A `return` ran. The value is already in the frame's return slot.
    Returned(Value),
}

impl Interpreter<'_> {
    /// Execute `id` in the active frame.
    pub fn exec(&mut self, id: StmtId) -> EvalResult<ExecOutcome> {
        ensure_sufficient_stack(|| self.exec_inner(id))
    }

    fn exec_inner(&mut self, id: StmtId) -> EvalResult<ExecOutcome> {
        let program = self.program;
        let kind = &program[id].kind;
        tracing::trace!(?id, kind = kind.describe(), "exec");

        match kind {
            StmtKind::Decl(vars) => {
                for &var in vars {
                    self.declare(var)?;
                }
            }
            StmtKind::Expr(expr) => {
                self.eval(*expr)?;
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(*cond)?.is_truthy() {
                    return self.exec(*then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.exec(*else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                while self.eval(*cond)?.is_truthy() {
                    if let returned @ ExecOutcome::Returned(_) = self.exec(*body)? {
                        return Ok(returned);
                    }
                }
            }
            StmtKind::For {
                init,
                cond,
                step,
                body,
            } => {
                if let Some(init) = init {
                    if let returned @ ExecOutcome::Returned(_) = self.exec(*init)? {
                        return Ok(returned);
                    }
                }
                let cond = cond.ok_or_else(missing_for_condition)?;
                while self.eval(cond)?.is_truthy() {
                    if let returned @ ExecOutcome::Returned(_) = self.exec(*body)? {
                        return Ok(returned);
                    }
                    if let Some(step) = step {
                        self.eval(*step)?;
                    }
                }
            }
            StmtKind::Return(value) => {
                let value = if let Some(expr) = value {
                    self.eval(*expr)?
                } else {
                    Value::ZERO
                };
                self.stack.top_mut().set_return(value);
                return Ok(ExecOutcome::Returned(value));
            }
            StmtKind::Compound(stmts) => {
                for &stmt in stmts {
                    if let returned @ ExecOutcome::Returned(_) = self.exec(stmt)? {
                        return Ok(returned);
                    }
                }
            }
            StmtKind::Break | StmtKind::Continue => {
                return Err(unsupported_statement(kind.describe()));
            }
        }
        Ok(ExecOutcome::Completed)
    }

    /// Bring `var` into existence in the active frame.
    ///
    /// Arrays get a fresh zeroed block owned by the frame; scalars take
    /// their initializer converted to the declared type, or zero.
    pub(super) fn declare(&mut self, var: VarId) -> EvalResult<()> {
        let program = self.program;
        let decl = &program[var];
        let types = &program.types;

        let value = if let TypeKind::Array { .. } = types.kind(decl.ty) {
            let size = width_cell(types.width_of(decl.ty));
            let base = self.heap.allocate(size, BlockOrigin::Array)?;
            self.stack.top_mut().own_array(base);
            Value::ArrayBase(base)
        } else {
            let cell = if let Some(init) = decl.init {
                self.eval(init)?.cell()
            } else {
                0
            };
            Value::reinterpret(cell, decl.ty, types)
        };

        tracing::trace!(
            name = program.var_name(var),
            ty = %types.display(decl.ty),
            %value,
            "declare"
        );
        self.stack.top_mut().bind_decl(var, value);
        Ok(())
    }
}
