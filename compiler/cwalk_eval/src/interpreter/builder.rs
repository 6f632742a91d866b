//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use cwalk_ir::Program;

use super::Interpreter;
use crate::errors::EvalResult;
use crate::frame::CallStack;
use crate::heap::Heap;
use crate::input_handler::InputHandler;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::setup::ProgramSetup;

/// Builder for creating Interpreter instances.
///
/// Defaults match a command-line run: output to stdout, input from stdin,
/// no call-depth limit, prompt printed before every read.
pub struct InterpreterBuilder<'a> {
    program: &'a Program,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<InputHandler>,
    max_call_depth: Option<usize>,
    prompt: bool,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            print_handler: None,
            input_handler: None,
            max_call_depth: None,
            prompt: true,
        }
    }

    /// Set where `PRINT` output and input prompts go.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where `GET` reads from.
    #[must_use]
    pub fn input_handler(mut self, handler: InputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Limit the number of simultaneously active calls. Exceeding the
    /// limit fails the run with `StackOverflow` instead of exhausting
    /// memory.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Whether `GET` prints its prompt line first.
    #[must_use]
    pub fn prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Run program setup and build the interpreter.
    pub fn build(self) -> EvalResult<Interpreter<'a>> {
        let setup = ProgramSetup::scan(self.program)?;
        Ok(Interpreter {
            program: self.program,
            setup,
            stack: CallStack::new(),
            heap: Heap::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input_handler.unwrap_or_default(),
            max_call_depth: self.max_call_depth,
            prompt: self.prompt,
            initialized: false,
        })
    }
}
