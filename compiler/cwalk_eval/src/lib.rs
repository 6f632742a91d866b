//! cwalk Eval - tree-walking interpreter for a small C subset.
//!
//! The interpreter consumes a resolved [`cwalk_ir::Program`] and executes
//! it directly, with no compilation step.
//!
//! # Architecture
//!
//! - `ProgramSetup`: one pass over top-level declarations that finds the
//!   runtime primitives, the entry point and the file-scope variables
//! - `CallStack` / `StackFrame`: per-activation bindings and expression cache
//! - `Heap`: addressable blocks backing arrays and `MALLOC`
//! - `Interpreter`: the recursive walk itself
//! - `evaluate_binary` / `evaluate_unary`: cell arithmetic
//! - `PrintHandlerImpl` / `InputHandler`: configurable program I/O
//!
//! Every error is fatal to the run and is returned from
//! [`Interpreter::run`]; [`run_or_exit`] turns it into a process exit.

pub mod errors;
mod frame;
mod heap;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod setup;
mod tracing_setup;
mod unary_operators;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use frame::{CallStack, StackFrame};
pub use heap::{BlockOrigin, Heap, HEAP_ADDRESS_START, MAX_BLOCK_BYTES};
pub use input_handler::{InputHandler, TokenQueue};
pub use interpreter::{ExecOutcome, Interpreter, InterpreterBuilder, INPUT_PROMPT};
pub use operators::{evaluate_binary, is_supported_binary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use setup::{
    Builtin, Builtins, ProgramSetup, ALLOCATE_NAME, ENTRY_NAME, FREE_NAME, INPUT_NAME,
    OUTPUT_NAME,
};
pub use tracing_setup::init_tracing;
pub use unary_operators::evaluate_unary;
pub use value::{Address, Value};

use cwalk_ir::Program;

/// Run `program` against stdout and stdin, returning the entry function's
/// value.
pub fn run_program(program: &Program) -> EvalResult {
    Interpreter::new(program)?.run()
}

/// Run `program` as a command-line tool would: on a fatal error print
/// `error: <message>` to stderr and exit the process with status 1.
pub fn run_or_exit(program: &Program) -> Value {
    init_tracing();
    match run_program(program) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(%err, "run aborted");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
