//! Stack growth guard for the interpreter's recursive descent.
//!
//! Statement execution, expression evaluation and user function calls all
//! recurse on the host stack. A C program that recurses a few thousand
//! levels deep would overflow a default 8MB thread stack long before it
//! exhausts heap memory, so every recursive entry point in `cwalk_eval`
//! goes through [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (128KB red zone).
///
/// One interpreted call nests `exec` -> `eval` -> `call` -> `exec`, each with
/// a handful of locals, so the margin is sized for a full round trip.
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// # Example
///
/// ```text
/// fn exec(&mut self, stmt: StmtId) -> EvalResult<ExecOutcome> {
///     ensure_sufficient_stack(|| self.exec_inner(stmt))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
