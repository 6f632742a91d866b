//! Arena indices for tree nodes.
//!
//! Every declaration, statement and expression is addressed by a `u32`
//! index assigned when the tree is built. The interpreter keys all of its
//! per-activation state by these indices, so two textually identical
//! declarations in different scopes never share a binding.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an id from a raw arena index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_id!(
    /// Index into the expression arena.
    ExprId
);
define_id!(
    /// Index into the statement arena.
    StmtId
);
define_id!(
    /// Index into the variable arena. Parameters are variables too.
    VarId
);
define_id!(
    /// Index into the function arena.
    FuncId
);

/// Convert an arena length into the next id index.
///
/// Trees beyond `u32::MAX` nodes are not supported; the index saturates.
#[inline]
pub(crate) fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
