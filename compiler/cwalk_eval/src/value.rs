//! Runtime values.
//!
//! Every value occupies one 64-bit cell. The variant records how the value
//! was produced, but the authoritative interpretation of a cell is always
//! the static type of the expression consuming it; [`Value::reinterpret`]
//! is the one place that conversion happens.

use std::fmt;

use cwalk_ir::{TypeId, TypeKind, TypePool};

/// Heap address. Null is zero; real blocks start well above it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Address(u64);

impl Address {
    pub const NULL: Address = Address(0);

    #[inline]
    pub const fn new(raw: u64) -> Self {
        Address(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Reinterpret a signed cell as an address (two's complement).
    #[inline]
    pub const fn from_cell(cell: i64) -> Self {
        Address(u64::from_ne_bytes(cell.to_ne_bytes()))
    }

    #[inline]
    pub const fn to_cell(self) -> i64 {
        i64::from_ne_bytes(self.0.to_ne_bytes())
    }

    /// Address `bytes` away from this one. Wraps like C pointer arithmetic
    /// on a flat address space.
    #[inline]
    #[must_use]
    pub const fn offset(self, bytes: i64) -> Self {
        Address(self.0.wrapping_add_signed(bytes))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{:x})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// A single cell, tagged with the kind of expression that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i64),
    Char(i8),
    Pointer(Address),
    /// Base address of a fixed-size array's backing block.
    ArrayBase(Address),
}

impl Value {
    pub const ZERO: Value = Value::Int(0);

    /// The raw 64-bit cell, sign-extended for characters.
    #[inline]
    pub const fn cell(self) -> i64 {
        match self {
            Value::Int(n) => n,
            Value::Char(c) => c as i64,
            Value::Pointer(addr) | Value::ArrayBase(addr) => addr.to_cell(),
        }
    }

    /// Read `cell` as a value of static type `ty`.
    ///
    /// Narrowing to `char` keeps the low byte, exactly as a C conversion
    /// to a signed 8-bit type does on the host.
    pub fn reinterpret(cell: i64, ty: TypeId, types: &TypePool) -> Value {
        match types.kind(ty) {
            TypeKind::Char => Value::Char(i8::from_le_bytes([cell.to_le_bytes()[0]])),
            TypeKind::Pointer(_) => Value::Pointer(Address::from_cell(cell)),
            TypeKind::Array { .. } => Value::ArrayBase(Address::from_cell(cell)),
            TypeKind::Int | TypeKind::Void => Value::Int(cell),
        }
    }

    /// The cell read as an address, whatever the tag.
    #[inline]
    pub const fn as_address(self) -> Address {
        Address::from_cell(self.cell())
    }

    #[inline]
    pub const fn is_truthy(self) -> bool {
        self.cell() != 0
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Pointer(addr) | Value::ArrayBase(addr) => write!(f, "{addr}"),
        }
    }
}

/// Convert a byte width from the type pool into cell arithmetic.
#[inline]
pub(crate) fn width_cell(width: u64) -> i64 {
    i64::try_from(width).unwrap_or(i64::MAX)
}
