//! End-to-end and operator tests.
//!
//! Programs are assembled with `ProgramBuilder` in place of C source; the
//! comment above each test shows the C it stands for.

mod unary_operators_tests;

use cwalk_ir::{ExprId, FuncId, Program, ProgramBuilder, StmtId, TypeId};

use crate::{buffer_handler, EvalResult, InputHandler, InterpreterBuilder, Value};

/// Declarations of the four runtime primitives.
pub(crate) struct Primitives {
    pub get: FuncId,
    pub print: FuncId,
    pub malloc: FuncId,
    pub free: FuncId,
}

pub(crate) fn declare_primitives(b: &mut ProgramBuilder) -> Primitives {
    let int_ptr = b.pointer_to(TypeId::INT);
    Primitives {
        get: b.prototype("GET", &[], TypeId::INT),
        print: b.prototype("PRINT", &[TypeId::INT], TypeId::VOID),
        malloc: b.prototype("MALLOC", &[TypeId::INT], int_ptr),
        free: b.prototype("FREE", &[int_ptr], TypeId::VOID),
    }
}

/// `PRINT(value);`
pub(crate) fn print_stmt(b: &mut ProgramBuilder, prims: &Primitives, value: ExprId) -> StmtId {
    let call = b.call(prims.print, vec![value]);
    b.expr_stmt(call)
}

/// `int main() { stmts }`
pub(crate) fn define_main(b: &mut ProgramBuilder, stmts: Vec<StmtId>) -> FuncId {
    let main = b.function("main", TypeId::INT);
    let body = b.block(stmts);
    b.set_body(main, body);
    main
}

/// `name = value;`
pub(crate) fn assign_stmt(b: &mut ProgramBuilder, target: ExprId, value: ExprId) -> StmtId {
    let assign = b.assign(target, value);
    b.expr_stmt(assign)
}

/// Run `program` with scripted input and no prompt, capturing output.
pub(crate) fn run_captured(program: &Program, input: InputHandler) -> (EvalResult<Value>, String) {
    let output = buffer_handler();
    let result = InterpreterBuilder::new(program)
        .print_handler(output.clone())
        .input_handler(input)
        .prompt(false)
        .build()
        .and_then(|mut interpreter| interpreter.run());
    (result, output.get_output())
}

/// Run `program` with no input, capturing output.
pub(crate) fn run(program: &Program) -> (EvalResult<Value>, String) {
    run_captured(program, InputHandler::buffer([]))
}
