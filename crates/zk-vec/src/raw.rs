// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBlock - the single allocation backing a `GenVec`.
//!
//! Holds `capacity` element slots followed by one padding slot, so the
//! one-past-last position always lies inside the allocation. The block never
//! reads or drops elements; tracking which slots are live is the owner's job.

use alloc::alloc::{Layout, alloc, dealloc, realloc};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::GenVecBehaviour;
use crate::error::GenVecError;
use crate::{DEFAULT_CAPACITY, GROWTH_FACTOR};

pub(crate) struct RawBlock<T> {
    ptr: NonNull<T>,
    cap: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: GenVecBehaviour,
    _marker: PhantomData<T>,
}

impl<T> RawBlock<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Layout of a block with `capacity` slots plus the trailing padding slot.
    fn layout_for(capacity: usize) -> Result<Layout, GenVecError> {
        let slots = capacity
            .checked_add(1)
            .ok_or(GenVecError::AllocationFailure)?;

        // Layout::array rejects sizes above isize::MAX.
        Layout::array::<T>(slots).map_err(|_| GenVecError::AllocationFailure)
    }

    /// Allocates a block with [`DEFAULT_CAPACITY`] slots.
    pub(crate) fn allocate() -> Result<Self, GenVecError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Allocates a block with exactly `capacity` slots.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, GenVecError> {
        Self::allocate_slots(capacity, false)
    }

    /// Allocates a block that carries an injected behaviour from the start.
    ///
    /// With [`GenVecBehaviour::FailAtAllocate`] the allocator call is replaced by a
    /// null result.
    #[cfg(any(test, feature = "test_utils"))]
    pub(crate) fn with_capacity_and_behaviour(
        capacity: usize,
        behaviour: GenVecBehaviour,
    ) -> Result<Self, GenVecError> {
        let fail = behaviour == GenVecBehaviour::FailAtAllocate;

        let mut block = Self::allocate_slots(capacity, fail)?;
        block.behaviour = behaviour;

        Ok(block)
    }

    fn allocate_slots(capacity: usize, fail: bool) -> Result<Self, GenVecError> {
        debug_assert!(capacity > 0, "a block always holds at least one slot");

        let ptr = if Self::IS_ZST {
            if fail {
                log::debug!("failed to allocate block of {capacity} slots");
                return Err(GenVecError::AllocationFailure);
            }

            NonNull::dangling()
        } else {
            let layout = Self::layout_for(capacity)?;

            let raw = if fail {
                ptr::null_mut()
            } else {
                // SAFETY (PRECONDITIONS ARE MET): T is not zero-sized and the layout
                // holds at least the padding slot, so its size is non-zero.
                unsafe { alloc(layout) }
            };

            let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
                log::debug!("failed to allocate block of {capacity} slots");
                return Err(GenVecError::AllocationFailure);
            };

            ptr
        };

        Ok(Self {
            ptr,
            cap: capacity,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: GenVecBehaviour::default(),
            _marker: PhantomData,
        })
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub(crate) fn behaviour(&self) -> GenVecBehaviour {
        self.behaviour
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub(crate) fn change_behaviour(&mut self, behaviour: GenVecBehaviour) {
        self.behaviour = behaviour;
    }

    #[cfg(any(test, feature = "test_utils"))]
    #[inline(always)]
    fn fails_at_grow(&self) -> bool {
        self.behaviour == GenVecBehaviour::FailAtGrow
    }

    #[cfg(not(any(test, feature = "test_utils")))]
    #[inline(always)]
    fn fails_at_grow(&self) -> bool {
        false
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Smallest `capacity * GROWTH_FACTOR^k` that reaches `min_capacity`.
    fn target_capacity(&self, min_capacity: usize) -> Result<usize, GenVecError> {
        let mut capacity = self.cap;

        while capacity < min_capacity {
            capacity = capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(GenVecError::AllocationFailure)?;
        }

        Ok(capacity)
    }

    /// Multiplies the capacity by [`GROWTH_FACTOR`].
    ///
    /// The bytes of every existing slot are preserved at the same offsets. On
    /// failure the block is left untouched and still valid.
    pub(crate) fn grow(&mut self) -> Result<(), GenVecError> {
        let new_cap = self
            .cap
            .checked_mul(GROWTH_FACTOR)
            .ok_or(GenVecError::AllocationFailure)?;

        self.reallocate(new_cap)
    }

    /// Grows to the first doubling of the capacity that holds `min_capacity` slots.
    ///
    /// The target is computed first and reached with a single reallocation, so a
    /// failure leaves the block untouched.
    pub(crate) fn grow_to(&mut self, min_capacity: usize) -> Result<(), GenVecError> {
        if self.cap >= min_capacity {
            return Ok(());
        }

        let new_cap = self.target_capacity(min_capacity)?;

        self.reallocate(new_cap)
    }

    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_cap: usize) -> Result<(), GenVecError> {
        debug_assert!(new_cap > self.cap);

        if Self::IS_ZST {
            if self.fails_at_grow() {
                log::debug!("failed to grow block from {} to {new_cap} slots", self.cap);
                return Err(GenVecError::AllocationFailure);
            }

            self.cap = new_cap;
            return Ok(());
        }

        let old_layout = Self::layout_for(self.cap)?;
        let new_layout = Self::layout_for(new_cap)?;

        let raw = if self.fails_at_grow() {
            ptr::null_mut()
        } else {
            // SAFETY (PRECONDITIONS ARE MET): ptr was allocated by the global allocator
            // with old_layout, the alignment is unchanged and new_layout.size() is
            // non-zero and within isize::MAX (checked by Layout::array).
            unsafe {
                realloc(
                    self.ptr.as_ptr().cast::<u8>(),
                    old_layout,
                    new_layout.size(),
                )
            }
        };

        // A null return from realloc leaves the old allocation in place.
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            log::debug!("failed to grow block from {} to {new_cap} slots", self.cap);
            return Err(GenVecError::AllocationFailure);
        };

        log::trace!("grew block from {} to {new_cap} slots", self.cap);

        self.ptr = ptr;
        self.cap = new_cap;

        Ok(())
    }
}

impl<T> Drop for RawBlock<T> {
    fn drop(&mut self) {
        if Self::IS_ZST {
            return;
        }

        // The same layout was computed successfully when the block was allocated.
        if let Ok(layout) = Self::layout_for(self.cap) {
            // SAFETY (PRECONDITIONS ARE MET): ptr was allocated with this exact layout
            // and is released only here.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

// Safety: RawBlock uniquely owns its allocation, like Box<[T]>.
unsafe impl<T: Send> Send for RawBlock<T> {}
unsafe impl<T: Sync> Sync for RawBlock<T> {}
