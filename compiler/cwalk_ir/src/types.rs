//! Resolved static types.
//!
//! The interpreter never stores a type next to a runtime value. Instead,
//! every expression carries the [`TypeId`] the front end resolved for it,
//! and the evaluator recovers how to treat a cell from that.

use std::fmt;

use rustc_hash::FxHashMap;

/// Width in bytes of the scalar cell every value is stored in.
pub const CELL_WIDTH: u64 = 8;

/// Interned type identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const INT: TypeId = TypeId(0);
    pub const CHAR: TypeId = TypeId(1);
    pub const VOID: TypeId = TypeId(2);

    /// First ID for compound types.
    pub const FIRST_COMPOUND: u32 = 3;

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TypeId::INT => write!(f, "TypeId::INT"),
            TypeId::CHAR => write!(f, "TypeId::CHAR"),
            TypeId::VOID => write!(f, "TypeId::VOID"),
            TypeId(n) => write!(f, "TypeId({n})"),
        }
    }
}

/// Structure of an interned type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    /// Any integer type; stored as a full cell.
    Int,
    /// `char`; one signed byte when stored in memory.
    Char,
    Void,
    Pointer(TypeId),
    /// Fixed-size array `elem[len]`.
    Array { elem: TypeId, len: u64 },
}

/// Interner for [`TypeKind`]s.
#[derive(Clone, Debug)]
pub struct TypePool {
    kinds: Vec<TypeKind>,
    map: FxHashMap<TypeKind, TypeId>,
}

impl TypePool {
    pub fn new() -> Self {
        let mut pool = TypePool {
            kinds: Vec::with_capacity(16),
            map: FxHashMap::default(),
        };
        pool.intern(TypeKind::Int);
        pool.intern(TypeKind::Char);
        pool.intern(TypeKind::Void);
        debug_assert_eq!(pool.kinds.len(), TypeId::FIRST_COMPOUND as usize);
        pool
    }

    pub fn intern(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.map.get(&kind) {
            return id;
        }
        let id = TypeId(crate::ids::next_index(self.kinds.len()));
        self.kinds.push(kind);
        self.map.insert(kind, id);
        id
    }

    pub fn pointer_to(&mut self, pointee: TypeId) -> TypeId {
        self.intern(TypeKind::Pointer(pointee))
    }

    pub fn array_of(&mut self, elem: TypeId, len: u64) -> TypeId {
        self.intern(TypeKind::Array { elem, len })
    }

    /// Kind of `id`. Unknown ids read as `int`.
    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.kinds.get(id.index()).copied().unwrap_or(TypeKind::Int)
    }

    pub fn is_array(&self, id: TypeId) -> bool {
        matches!(self.kind(id), TypeKind::Array { .. })
    }

    /// Element type of an array or pointee of a pointer.
    pub fn element_of(&self, id: TypeId) -> Option<TypeId> {
        match self.kind(id) {
            TypeKind::Pointer(inner) | TypeKind::Array { elem: inner, .. } => Some(inner),
            _ => None,
        }
    }

    /// Bytes one object of this type occupies in the heap.
    ///
    /// `char` is the only narrow type; every other scalar, including
    /// pointers, takes a full cell.
    pub fn width_of(&self, id: TypeId) -> u64 {
        match self.kind(id) {
            TypeKind::Char => 1,
            TypeKind::Array { elem, len } => self.width_of(elem).saturating_mul(len),
            TypeKind::Int | TypeKind::Void | TypeKind::Pointer(_) => CELL_WIDTH,
        }
    }

    /// Render a type the way it would be written in C.
    pub fn display(&self, id: TypeId) -> String {
        match self.kind(id) {
            TypeKind::Int => "int".to_string(),
            TypeKind::Char => "char".to_string(),
            TypeKind::Void => "void".to_string(),
            TypeKind::Pointer(inner) => format!("{}*", self.display(inner)),
            TypeKind::Array { elem, len } => format!("{}[{len}]", self.display(elem)),
        }
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}
