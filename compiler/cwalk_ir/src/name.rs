//! Interned identifiers.
//!
//! Names are only consulted when binding built-ins during program setup and
//! when rendering diagnostics, so a single-threaded interner is enough.

use std::fmt;

use rustc_hash::FxHashMap;

/// Interned string identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// String interner mapping identifier text to [`Name`].
#[derive(Clone, Debug)]
pub struct StringInterner {
    map: FxHashMap<String, Name>,
    strings: Vec<String>,
}

impl StringInterner {
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        interner.intern("");
        interner
    }

    /// Intern `s`, returning the existing name if it was seen before.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let name = Name(u32::try_from(self.strings.len()).unwrap_or(u32::MAX));
        self.strings.push(s.to_owned());
        self.map.insert(s.to_owned(), name);
        name
    }

    /// Look up a name that was produced by this interner.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings
            .get(name.0 as usize)
            .map_or("<unknown>", String::as_str)
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_intern_is_idempotent() {
        let mut interner = StringInterner::new();
        let a = interner.intern("main");
        let b = interner.intern("main");
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "main");
    }

    #[test]
    fn test_empty_is_preinterned() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_ne!(interner.intern("PRINT"), Name::EMPTY);
    }
}
