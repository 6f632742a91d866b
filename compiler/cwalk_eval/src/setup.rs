//! Program setup: the one pass over top-level declarations that runs before
//! any code does.
//!
//! It recognizes the runtime primitives and the entry point by name and
//! records which variables live at file scope. The result is immutable and
//! handed to the interpreter explicitly.

use cwalk_ir::{FuncId, Item, Name, Program, VarId};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{missing_entry_point, EvalResult};

/// Name of the integer input primitive.
pub const INPUT_NAME: &str = "GET";
/// Name of the integer output primitive.
pub const OUTPUT_NAME: &str = "PRINT";
/// Name of the allocation primitive.
pub const ALLOCATE_NAME: &str = "MALLOC";
/// Name of the release primitive.
pub const FREE_NAME: &str = "FREE";
/// Name of the function a run starts from.
pub const ENTRY_NAME: &str = "main";

/// Runtime primitives the interpreter implements itself.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Builtin {
    Input,
    Output,
    Allocate,
    Free,
}

impl Builtin {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            INPUT_NAME => Some(Builtin::Input),
            OUTPUT_NAME => Some(Builtin::Output),
            ALLOCATE_NAME => Some(Builtin::Allocate),
            FREE_NAME => Some(Builtin::Free),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Input => INPUT_NAME,
            Builtin::Output => OUTPUT_NAME,
            Builtin::Allocate => ALLOCATE_NAME,
            Builtin::Free => FREE_NAME,
        }
    }

    /// Number of arguments a call must pass.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Input => 0,
            Builtin::Output | Builtin::Allocate | Builtin::Free => 1,
        }
    }
}

/// Every declaration of a primitive name maps to its primitive, so calls
/// through a prototype and calls through a redeclaration agree.
#[derive(Clone, Debug, Default)]
pub struct Builtins {
    by_func: FxHashMap<FuncId, Builtin>,
}

impl Builtins {
    pub fn classify(&self, func: FuncId) -> Option<Builtin> {
        self.by_func.get(&func).copied()
    }
}

/// Immutable facts gathered from the top-level declarations.
#[derive(Clone, Debug)]
pub struct ProgramSetup {
    pub builtins: Builtins,
    pub entry: FuncId,
    /// File-scope variables in declaration order.
    pub globals: Vec<VarId>,
    global_set: FxHashSet<VarId>,
    /// Defining declaration for each function name that has a body.
    definitions: FxHashMap<Name, FuncId>,
}

impl ProgramSetup {
    /// Scan `program`'s top-level items.
    ///
    /// When a name is declared more than once the last declaration wins,
    /// except that a definition of the entry point is preferred over a
    /// later prototype of it.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn scan(program: &Program) -> EvalResult<Self> {
        let mut builtins = Builtins::default();
        let mut entry = None;
        let mut globals = Vec::new();
        let mut global_set = FxHashSet::default();
        let mut definitions = FxHashMap::default();

        for item in program.items() {
            match *item {
                Item::Function(func) => {
                    let decl = &program[func];
                    let name = program.name(decl.name);
                    if let Some(builtin) = Builtin::from_name(name) {
                        builtins.by_func.insert(func, builtin);
                    }
                    if decl.body.is_some() {
                        definitions.insert(decl.name, func);
                    }
                    if name == ENTRY_NAME {
                        entry = Some(func);
                    }
                }
                Item::Variable(var) => {
                    if global_set.insert(var) {
                        globals.push(var);
                    }
                }
            }
        }

        let entry = entry.ok_or_else(|| missing_entry_point(ENTRY_NAME))?;
        let entry = definitions
            .get(&program[entry].name)
            .copied()
            .unwrap_or(entry);

        tracing::debug!(
            builtins = builtins.by_func.len(),
            globals = globals.len(),
            ?entry,
            "program setup"
        );
        Ok(ProgramSetup {
            builtins,
            entry,
            globals,
            global_set,
            definitions,
        })
    }

    #[inline]
    pub fn is_global(&self, var: VarId) -> bool {
        self.global_set.contains(&var)
    }

    /// The declaration whose body runs when `func` is called: `func` itself
    /// if it has a body, otherwise the definition sharing its name.
    pub fn definition_of(&self, program: &Program, func: FuncId) -> FuncId {
        if program[func].body.is_some() {
            return func;
        }
        self.definitions
            .get(&program[func].name)
            .copied()
            .unwrap_or(func)
    }
}
