//! Function calls: runtime primitives and user-defined functions.

use cwalk_ir::{ExprId, FuncId, TypeId};
use smallvec::SmallVec;

use super::Interpreter;
use crate::errors::{arity_mismatch, missing_function_body, stack_overflow, EvalResult};
use crate::heap::BlockOrigin;
use crate::setup::Builtin;
use crate::Value;

/// Line printed before every `GET` read.
pub const INPUT_PROMPT: &str = "Please Input an Integer Value : ";

type Args = SmallVec<[Value; 4]>;

impl Interpreter<'_> {
    /// Evaluate a call expression. Arguments are evaluated left to right in
    /// the caller's frame before the callee is dispatched.
    #[tracing::instrument(
        level = "debug",
        skip(self, args, ty),
        fields(name = self.program.func_name(callee))
    )]
    pub(super) fn eval_call(&mut self, callee: FuncId, args: &[ExprId], ty: TypeId) -> EvalResult {
        let mut values = Args::with_capacity(args.len());
        for &arg in args {
            values.push(self.eval(arg)?);
        }

        if let Some(builtin) = self.setup.builtins.classify(callee) {
            self.call_builtin(builtin, &values, ty)
        } else {
            self.call_function(callee, &values, ty)
        }
    }

    fn call_builtin(&mut self, builtin: Builtin, args: &[Value], ty: TypeId) -> EvalResult {
        if args.len() != builtin.arity() {
            return Err(arity_mismatch(builtin.name(), builtin.arity(), args.len()));
        }
        let program = self.program;
        let types = &program.types;

        match builtin {
            Builtin::Input => {
                if self.prompt {
                    self.print_handler.println(INPUT_PROMPT);
                }
                let n = self.input.read_int().unwrap_or_else(|| {
                    tracing::warn!("input unavailable, reading 0");
                    0
                });
                Ok(Value::reinterpret(n, ty, types))
            }
            Builtin::Output => {
                self.print_handler.println(&args[0].cell().to_string());
                Ok(Value::ZERO)
            }
            Builtin::Allocate => {
                let base = self.heap.allocate(args[0].cell(), BlockOrigin::Explicit)?;
                Ok(Value::reinterpret(base.to_cell(), ty, types))
            }
            Builtin::Free => {
                self.heap.release(args[0].as_address());
                Ok(Value::ZERO)
            }
        }
    }

    /// Call a user-defined function with already evaluated arguments and
    /// read its return slot as `ty`.
    pub(super) fn call_function(&mut self, callee: FuncId, args: &[Value], ty: TypeId) -> EvalResult {
        let program = self.program;
        let func = self.setup.definition_of(program, callee);
        let decl = &program[func];
        let name = program.func_name(func);

        let body = decl.body.ok_or_else(|| missing_function_body(name))?;
        if decl.params.len() != args.len() {
            return Err(arity_mismatch(name, decl.params.len(), args.len()));
        }
        if let Some(limit) = self.max_call_depth {
            // The file-scope frame does not count as a call.
            if self.stack.depth() > limit {
                return Err(stack_overflow(limit));
            }
        }

        self.stack.push_frame();
        for (&param, &arg) in decl.params.iter().zip(args) {
            let value = Value::reinterpret(arg.cell(), program[param].ty, &program.types);
            self.stack.top_mut().bind_decl(param, value);
        }

        let outcome = self.exec(body);
        let ret = self.stack.pop_frame(&mut self.heap)?;
        outcome?;
        Ok(Value::reinterpret(ret.cell(), ty, &program.types))
    }
}
