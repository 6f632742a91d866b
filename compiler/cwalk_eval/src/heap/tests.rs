#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn test_blocks_are_zeroed_and_distinct() {
    let mut heap = Heap::new();
    let a = heap.allocate(24, BlockOrigin::Array).unwrap();
    let b = heap.allocate(24, BlockOrigin::Explicit).unwrap();

    assert!(a.raw() >= HEAP_ADDRESS_START);
    assert!(b.raw() >= a.raw() + 24 + GUARD_GAP);
    assert_eq!(a.raw() % BLOCK_ALIGN, 0);
    assert_eq!(b.raw() % BLOCK_ALIGN, 0);
    assert_eq!(heap.load(a.offset(16), 8).unwrap(), 0);
    assert_eq!(heap.origin_of(b), Some(BlockOrigin::Explicit));
}

#[test]
fn test_cell_store_and_load() {
    let mut heap = Heap::new();
    let a = heap.allocate(16, BlockOrigin::Explicit).unwrap();
    heap.store(a.offset(8), 8, -42).unwrap();
    assert_eq!(heap.load(a.offset(8), 8).unwrap(), -42);
    assert_eq!(heap.load(a, 8).unwrap(), 0);
}

#[test]
fn test_byte_store_narrows_and_sign_extends() {
    let mut heap = Heap::new();
    let a = heap.allocate(4, BlockOrigin::Array).unwrap();
    heap.store(a.offset(1), 1, 0x1ff).unwrap();
    assert_eq!(heap.load(a.offset(1), 1).unwrap(), -1);
    assert_eq!(heap.load(a, 1).unwrap(), 0);
    assert_eq!(heap.load(a.offset(2), 1).unwrap(), 0);
}

#[test]
fn test_access_outside_blocks_is_reported() {
    let mut heap = Heap::new();
    let a = heap.allocate(8, BlockOrigin::Explicit).unwrap();

    let err = heap.load(Address::NULL, 8).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::InvalidAddress { address: 0 });

    // Straddles the end of the block
    assert!(heap.load(a.offset(4), 8).is_err());
    assert!(heap.store(a.offset(8), 1, 1).is_err());
}

#[test]
fn test_release() {
    let mut heap = Heap::new();
    let a = heap.allocate(8, BlockOrigin::Explicit).unwrap();
    assert_eq!(heap.live_blocks(), 1);
    assert_eq!(heap.release(a), Some(BlockOrigin::Explicit));
    assert_eq!(heap.live_blocks(), 0);

    // Double free is ignored
    assert_eq!(heap.release(a), None);
    assert!(heap.load(a, 8).is_err());
}

#[test]
fn test_zero_sized_allocation_gets_unique_address() {
    let mut heap = Heap::new();
    let a = heap.allocate(0, BlockOrigin::Explicit).unwrap();
    let b = heap.allocate(0, BlockOrigin::Explicit).unwrap();
    assert_ne!(a, b);
    assert!(heap.load(a, 1).is_err());
}

#[test]
fn test_invalid_allocation_sizes() {
    let mut heap = Heap::new();
    assert_eq!(
        heap.allocate(-1, BlockOrigin::Explicit).unwrap_err().kind,
        EvalErrorKind::InvalidAllocation { size: -1 }
    );
    assert!(heap.allocate(MAX_BLOCK_BYTES + 1, BlockOrigin::Explicit).is_err());
}
