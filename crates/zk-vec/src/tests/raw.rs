// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::raw::RawBlock;
use crate::{DEFAULT_CAPACITY, GenVecBehaviour, GenVecError};

// =============================================================================
// allocate()
// =============================================================================

#[test]
fn test_allocate_default_capacity() {
    let block = RawBlock::<u32>::allocate().expect("Failed to allocate()");

    assert_eq!(block.capacity(), DEFAULT_CAPACITY);
    assert!(!block.as_ptr().is_null());
    assert!(block.as_ptr().is_aligned());
}

#[test]
fn test_allocate_zero_sized() {
    let block = RawBlock::<()>::allocate().expect("Failed to allocate()");

    assert_eq!(block.capacity(), DEFAULT_CAPACITY);
}

// =============================================================================
// with_capacity()
// =============================================================================

#[test]
fn test_with_capacity_fail_at_allocate() {
    let result = RawBlock::<u64>::with_capacity_and_behaviour(8, GenVecBehaviour::FailAtAllocate);
    assert!(matches!(result, Err(GenVecError::AllocationFailure)));

    let result = RawBlock::<()>::with_capacity_and_behaviour(8, GenVecBehaviour::FailAtAllocate);
    assert!(matches!(result, Err(GenVecError::AllocationFailure)));
}

#[test]
fn test_with_capacity_fail_at_grow_still_allocates() {
    let block = RawBlock::<u64>::with_capacity_and_behaviour(8, GenVecBehaviour::FailAtGrow)
        .expect("Failed to with_capacity_and_behaviour()");

    assert_eq!(block.capacity(), 8);
    assert_eq!(block.behaviour(), GenVecBehaviour::FailAtGrow);
}

#[test]
fn test_with_capacity_overflowing_slot_count() {
    // capacity + padding slot overflows usize
    let result = RawBlock::<u64>::with_capacity(usize::MAX);

    assert!(matches!(result, Err(GenVecError::AllocationFailure)));
}

#[test]
fn test_with_capacity_exceeding_isize_max() {
    let result = RawBlock::<u64>::with_capacity(isize::MAX as usize / 4);

    assert!(matches!(result, Err(GenVecError::AllocationFailure)));
}

// =============================================================================
// grow()
// =============================================================================

#[test]
fn test_grow_doubles_capacity() {
    let mut block = RawBlock::<u32>::allocate().expect("Failed to allocate()");

    block.grow().expect("Failed to grow()");
    assert_eq!(block.capacity(), 16);

    block.grow().expect("Failed to grow()");
    assert_eq!(block.capacity(), 32);
}

#[test]
fn test_grow_preserves_slot_bytes() {
    let mut block = RawBlock::<u32>::allocate().expect("Failed to allocate()");

    for i in 0..DEFAULT_CAPACITY {
        unsafe { block.as_mut_ptr().add(i).write(i as u32 * 7) };
    }

    block.grow().expect("Failed to grow()");

    for i in 0..DEFAULT_CAPACITY {
        assert_eq!(unsafe { block.as_ptr().add(i).read() }, i as u32 * 7);
    }
}

#[test]
fn test_grow_padding_slot_is_writable() {
    let mut block = RawBlock::<u64>::allocate().expect("Failed to allocate()");
    block.grow().expect("Failed to grow()");

    // The slot at `capacity` belongs to the allocation.
    let cap = block.capacity();
    unsafe { block.as_mut_ptr().add(cap).write(u64::MAX) };
    assert_eq!(unsafe { block.as_ptr().add(cap).read() }, u64::MAX);
}

#[test]
fn test_grow_zero_sized() {
    let mut block = RawBlock::<()>::allocate().expect("Failed to allocate()");

    block.grow().expect("Failed to grow()");

    assert_eq!(block.capacity(), 16);
}

#[test]
fn test_grow_overflow_leaves_block_untouched() {
    let start = usize::MAX / 2 + 1;
    let mut block = RawBlock::<()>::with_capacity(start).expect("Failed to with_capacity()");

    assert!(matches!(block.grow(), Err(GenVecError::AllocationFailure)));
    assert_eq!(block.capacity(), start);
}

// =============================================================================
// grow_to()
// =============================================================================

#[test]
fn test_grow_to_rounds_to_doubling() {
    let mut block = RawBlock::<u8>::allocate().expect("Failed to allocate()");

    block.grow_to(100).expect("Failed to grow_to()");

    assert_eq!(block.capacity(), 128);
}

#[test]
fn test_grow_to_noop_when_sufficient() {
    let mut block = RawBlock::<u8>::allocate().expect("Failed to allocate()");

    block.grow_to(3).expect("Failed to grow_to()");

    assert_eq!(block.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_grow_to_single_step_from_larger_gap() {
    let mut block = RawBlock::<u32>::allocate().expect("Failed to allocate()");

    for i in 0..DEFAULT_CAPACITY {
        unsafe { block.as_mut_ptr().add(i).write(i as u32) };
    }

    block.grow_to(1000).expect("Failed to grow_to()");

    assert_eq!(block.capacity(), 1024);
    for i in 0..DEFAULT_CAPACITY {
        assert_eq!(unsafe { block.as_ptr().add(i).read() }, i as u32);
    }
}

#[test]
fn test_grow_to_overflow_leaves_capacity_unchanged() {
    let mut block = RawBlock::<()>::allocate().expect("Failed to allocate()");

    // No doubling of 8 reaches usize::MAX.
    assert!(matches!(
        block.grow_to(usize::MAX),
        Err(GenVecError::AllocationFailure)
    ));
    assert_eq!(block.capacity(), DEFAULT_CAPACITY);

    block.grow_to(20).expect("Failed to grow_to()");
    assert_eq!(block.capacity(), 32);
}

#[test]
fn test_grow_to_oversized_layout_leaves_block_untouched() {
    let mut block = RawBlock::<u64>::allocate().expect("Failed to allocate()");
    let ptr = block.as_ptr();

    // Reachable by doubling, but larger than any valid layout.
    assert!(matches!(
        block.grow_to(usize::MAX / 2),
        Err(GenVecError::AllocationFailure)
    ));
    assert_eq!(block.capacity(), DEFAULT_CAPACITY);
    assert_eq!(block.as_ptr(), ptr);
}

// =============================================================================
// injected failures
// =============================================================================

#[test]
fn test_fail_at_grow_realloc_leaves_block_untouched() {
    let mut block = RawBlock::<u64>::with_capacity_and_behaviour(8, GenVecBehaviour::FailAtGrow)
        .expect("Failed to with_capacity_and_behaviour()");
    for i in 0..8 {
        unsafe { block.as_mut_ptr().add(i).write(i as u64 + 100) };
    }
    let ptr = block.as_ptr();

    assert!(matches!(block.grow(), Err(GenVecError::AllocationFailure)));
    assert!(matches!(
        block.grow_to(40),
        Err(GenVecError::AllocationFailure)
    ));

    assert_eq!(block.capacity(), 8);
    assert_eq!(block.as_ptr(), ptr);
    for i in 0..8 {
        assert_eq!(unsafe { block.as_ptr().add(i).read() }, i as u64 + 100);
    }

    block.change_behaviour(GenVecBehaviour::None);
    block.grow_to(40).expect("Failed to grow_to()");

    assert_eq!(block.capacity(), 64);
    for i in 0..8 {
        assert_eq!(unsafe { block.as_ptr().add(i).read() }, i as u64 + 100);
    }
}

#[test]
fn test_fail_at_grow_zero_sized() {
    let mut block = RawBlock::<()>::with_capacity_and_behaviour(8, GenVecBehaviour::FailAtGrow)
        .expect("Failed to with_capacity_and_behaviour()");

    assert!(matches!(block.grow(), Err(GenVecError::AllocationFailure)));
    assert_eq!(block.capacity(), 8);

    // No reallocation needed
    block.grow_to(8).expect("Failed to grow_to()");
}
