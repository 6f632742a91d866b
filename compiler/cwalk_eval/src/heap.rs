//! The interpreter's model of addressable memory.
//!
//! Blocks come from two places: array declarations (released when the
//! declaring frame is popped) and the allocation primitive (released only
//! by the free primitive). Addresses are plain integers so programs can do
//! pointer arithmetic on them; a block is found again by looking up the
//! greatest base at or below an address.
//!
//! Accesses past an array's declared length are not checked as long as
//! they stay inside some live block. Accesses that land outside every
//! block are reported instead of corrupting host memory.

use std::collections::BTreeMap;

use cwalk_ir::CELL_WIDTH;

use crate::errors::{invalid_address, invalid_allocation, EvalResult};
use crate::Address;

/// First address handed out. Keeps small integers (and null) from ever
/// aliasing a block.
pub const HEAP_ADDRESS_START: u64 = 0x1000_0000;

/// Block bases are aligned to a full cell.
const BLOCK_ALIGN: u64 = CELL_WIDTH;

/// Unused bytes between consecutive blocks, so a one-past-the-end pointer
/// never points into the next block.
const GUARD_GAP: u64 = CELL_WIDTH;

/// Largest single block the interpreter will create.
pub const MAX_BLOCK_BYTES: i64 = 1 << 32;

/// Why a block exists.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BlockOrigin {
    /// Backing storage of a declared array, owned by a stack frame.
    Array,
    /// Requested through the allocation primitive.
    Explicit,
}

#[derive(Clone, Debug)]
struct Block {
    bytes: Vec<u8>,
    origin: BlockOrigin,
}

/// Byte-addressed heap of zero-initialized blocks.
#[derive(Clone, Debug)]
pub struct Heap {
    blocks: BTreeMap<u64, Block>,
    next: u64,
}

impl Heap {
    pub fn new() -> Self {
        Heap {
            blocks: BTreeMap::new(),
            next: HEAP_ADDRESS_START,
        }
    }

    /// Allocate a zeroed block of `size` bytes.
    pub fn allocate(&mut self, size: i64, origin: BlockOrigin) -> EvalResult<Address> {
        if !(0..=MAX_BLOCK_BYTES).contains(&size) {
            return Err(invalid_allocation(size));
        }
        let len = usize::try_from(size).map_err(|_| invalid_allocation(size))?;
        let size = u64::try_from(size).map_err(|_| invalid_allocation(size))?;

        let base = self.next;
        self.next = align_up(base.saturating_add(size).saturating_add(GUARD_GAP));
        self.blocks.insert(
            base,
            Block {
                bytes: vec![0; len],
                origin,
            },
        );
        tracing::debug!(base = %Address::new(base), size, ?origin, "heap allocate");
        Ok(Address::new(base))
    }

    /// Release the block starting at `address`.
    ///
    /// Releasing anything that is not the base of a live block is undefined
    /// behaviour in the interpreted program; it is logged and ignored.
    pub fn release(&mut self, address: Address) -> Option<BlockOrigin> {
        if let Some(block) = self.blocks.remove(&address.raw()) {
            tracing::debug!(base = %address, size = block.bytes.len(), "heap release");
            Some(block.origin)
        } else {
            tracing::warn!(%address, "release of an address that is not a live block");
            None
        }
    }

    /// Read `width` bytes at `address`, sign-extended to a cell.
    pub fn load(&self, address: Address, width: u64) -> EvalResult<i64> {
        let width = clamp_width(width);
        let (block, start) = self.locate(address, width)?;
        let mut buf = [0u8; 8];
        buf[..width].copy_from_slice(&block.bytes[start..start + width]);
        let raw = i64::from_le_bytes(buf);
        let shift = 64 - 8 * width_shift(width);
        Ok(if shift == 0 { raw } else { (raw << shift) >> shift })
    }

    /// Write the low `width` bytes of `cell` at `address`.
    pub fn store(&mut self, address: Address, width: u64, cell: i64) -> EvalResult<()> {
        let width = clamp_width(width);
        let (_, start) = self.locate(address, width)?;
        let base = self.base_of(address).ok_or_else(|| invalid_address(address.raw()))?;
        let block = self
            .blocks
            .get_mut(&base)
            .ok_or_else(|| invalid_address(address.raw()))?;
        block.bytes[start..start + width].copy_from_slice(&cell.to_le_bytes()[..width]);
        Ok(())
    }

    /// Number of blocks currently allocated.
    pub fn live_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Origin of the block starting exactly at `address`, if live.
    #[cfg(test)]
    pub fn origin_of(&self, address: Address) -> Option<BlockOrigin> {
        self.blocks.get(&address.raw()).map(|block| block.origin)
    }

    fn base_of(&self, address: Address) -> Option<u64> {
        self.blocks
            .range(..=address.raw())
            .next_back()
            .map(|(&base, _)| base)
    }

    /// Find the block holding `[address, address + width)` and the offset
    /// of `address` inside it.
    fn locate(&self, address: Address, width: usize) -> EvalResult<(&Block, usize)> {
        let raw = address.raw();
        let (base, block) = self
            .blocks
            .range(..=raw)
            .next_back()
            .ok_or_else(|| invalid_address(raw))?;
        let start = usize::try_from(raw - base).map_err(|_| invalid_address(raw))?;
        match start.checked_add(width) {
            Some(end) if end <= block.bytes.len() => Ok((block, start)),
            _ => Err(invalid_address(raw)),
        }
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

fn align_up(n: u64) -> u64 {
    n.div_ceil(BLOCK_ALIGN).saturating_mul(BLOCK_ALIGN)
}

/// Access widths are between one byte and a full cell.
fn clamp_width(width: u64) -> usize {
    match width {
        0 => 1,
        1..=8 => usize::try_from(width).unwrap_or(8),
        _ => 8,
    }
}

fn width_shift(width: usize) -> u32 {
    u32::try_from(width).unwrap_or(8)
}

#[cfg(test)]
mod tests;
