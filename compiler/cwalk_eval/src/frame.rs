//! Activation records and the call stack.
//!
//! A [`StackFrame`] is created for every function call (and one for file
//! scope). It maps declarations to values and caches the value of every
//! expression evaluated during the activation. Frames are per call, not
//! per block: a nested compound statement shares its function's frame.

use cwalk_ir::{ExprId, VarId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::errors::{call_stack_underflow, unbound_variable, unevaluated_expression, EvalResult};
use crate::heap::Heap;
use crate::{Address, Value};

/// One activation record.
#[derive(Clone, Debug, Default)]
pub struct StackFrame {
    vars: FxHashMap<VarId, Value>,
    exprs: FxHashMap<ExprId, Value>,
    ret: Value,
    /// Array blocks allocated by declarations executed in this frame.
    arrays: SmallVec<[Address; 4]>,
}

impl StackFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind or rebind `var` in this frame.
    #[inline]
    pub fn bind_decl(&mut self, var: VarId, value: Value) {
        self.vars.insert(var, value);
    }

    /// Value bound to `var` in this frame. Bindings never migrate between
    /// frames, so a variable bound by a caller is unbound here.
    pub fn get_decl(&self, var: VarId) -> EvalResult<Value> {
        self.lookup(var)
            .ok_or_else(|| unbound_variable(&format!("{var:?}")))
    }

    #[inline]
    pub fn lookup(&self, var: VarId) -> Option<Value> {
        self.vars.get(&var).copied()
    }

    #[inline]
    pub fn has_decl(&self, var: VarId) -> bool {
        self.vars.contains_key(&var)
    }

    /// Cache the value computed for `expr` during this activation.
    #[inline]
    pub fn bind_expr(&mut self, expr: ExprId, value: Value) {
        self.exprs.insert(expr, value);
    }

    pub fn get_expr(&self, expr: ExprId) -> EvalResult<Value> {
        self.exprs
            .get(&expr)
            .copied()
            .ok_or_else(|| unevaluated_expression(expr))
    }

    #[inline]
    pub fn set_return(&mut self, value: Value) {
        self.ret = value;
    }

    /// Return slot; zero unless a `return` stored something.
    #[inline]
    pub fn get_return(&self) -> Value {
        self.ret
    }

    /// Record that this frame owns the array block at `base`.
    pub fn own_array(&mut self, base: Address) {
        self.arrays.push(base);
    }

    pub fn owned_arrays(&self) -> &[Address] {
        &self.arrays
    }
}

/// Ordered stack of frames. The bottom frame holds file-scope variables
/// and lives for the whole run.
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    root: StackFrame,
    frames: Vec<StackFrame>,
}

impl CallStack {
    /// A stack holding only the file-scope frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an empty frame for a new activation.
    pub fn push_frame(&mut self) {
        self.frames.push(StackFrame::new());
        tracing::debug!(depth = self.depth(), "push frame");
    }

    /// Pop the top frame, release the arrays it declared and hand back its
    /// return slot. The file-scope frame cannot be popped.
    pub fn pop_frame(&mut self, heap: &mut Heap) -> EvalResult<Value> {
        let frame = self.frames.pop().ok_or_else(call_stack_underflow)?;
        for &base in frame.owned_arrays() {
            heap.release(base);
        }
        let ret = frame.get_return();
        tracing::debug!(depth = self.depth(), %ret, "pop frame");
        Ok(ret)
    }

    /// The currently executing activation.
    pub fn top(&self) -> &StackFrame {
        self.frames.last().unwrap_or(&self.root)
    }

    pub fn top_mut(&mut self) -> &mut StackFrame {
        self.frames.last_mut().unwrap_or(&mut self.root)
    }

    /// The file-scope frame.
    pub fn global(&self) -> &StackFrame {
        &self.root
    }

    pub fn global_mut(&mut self) -> &mut StackFrame {
        &mut self.root
    }

    /// Number of frames, counting the file-scope frame.
    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }
}
