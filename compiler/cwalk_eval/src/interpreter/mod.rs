//! Tree-walking interpreter for the C subset.
//!
//! # Architecture
//!
//! Evaluation is a plain recursive descent over the resolved tree:
//!
//! - `expr` - expression evaluation, assignment targets, element addresses
//! - `stmt` - statement execution and the `return` unwind signal
//! - `call` - user calls and the runtime primitives
//!
//! All mutable state lives in the [`CallStack`] (bindings and the
//! per-activation expression cache) and the [`Heap`] (arrays and explicit
//! allocations). The [`ProgramSetup`] computed before the run is read-only.
//!
//! # Returning
//!
//! `return` stores into the active frame's return slot and then unwinds
//! with [`ExecOutcome::Returned`]. Every statement that executes children
//! propagates that outcome, so exactly one activation is unwound.

mod builder;
mod call;
mod expr;
mod stmt;

pub use builder::InterpreterBuilder;
pub use call::INPUT_PROMPT;
pub use stmt::ExecOutcome;

use cwalk_ir::{Program, VarId};

use crate::errors::EvalResult;
use crate::frame::CallStack;
use crate::heap::Heap;
use crate::input_handler::InputHandler;
use crate::print_handler::SharedPrintHandler;
use crate::setup::ProgramSetup;
use crate::Value;

/// Interpreter state for one run of a [`Program`].
pub struct Interpreter<'a> {
    program: &'a Program,
    setup: ProgramSetup,
    stack: CallStack,
    heap: Heap,
    print_handler: SharedPrintHandler,
    input: InputHandler,
    /// Maximum number of simultaneously active calls. `None` is unlimited.
    max_call_depth: Option<usize>,
    /// Emit the prompt line before each `GET`.
    prompt: bool,
    /// File-scope variables have been initialized.
    initialized: bool,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default handlers (stdout, stdin).
    pub fn new(program: &'a Program) -> EvalResult<Self> {
        InterpreterBuilder::new(program).build()
    }

    /// Run the program: initialize file-scope variables, then call the
    /// entry function and return its value.
    ///
    /// Nothing supplies the entry function's arguments, so any parameters
    /// it declares (`int main(int argc, char **argv)`) start out as zero.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> EvalResult<Value> {
        self.initialize_globals()?;
        let program = self.program;
        let entry = self.setup.entry;
        let decl = &program[entry];
        let args = vec![Value::ZERO; decl.params.len()];
        let value = self.call_function(entry, &args, decl.ret)?;
        tracing::debug!(%value, "entry returned");
        Ok(value)
    }

    /// Initialize file-scope variables in declaration order, once.
    fn initialize_globals(&mut self) -> EvalResult<()> {
        if self.initialized {
            return Ok(());
        }
        let globals = self.setup.globals.clone();
        for var in globals {
            self.declare(var)?;
        }
        self.initialized = true;
        Ok(())
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.stack
    }

    /// Current value of a file-scope variable.
    pub fn global_value(&self, var: VarId) -> Option<Value> {
        self.stack.global().lookup(var)
    }
}
