// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Begin/end positions and iterators over a `GenVec`.
//!
//! Iteration walks the half-open range `[begin, end)` one element at a time.
//! `end` is the padding slot behind the last live element: always inside the
//! allocation, never a live element.
//!
//! # Invalidation
//!
//! | Operation                   | Outstanding positions                 |
//! |-----------------------------|---------------------------------------|
//! | read-only access            | stay valid                            |
//! | push, capacity unchanged    | only `end` is stale                   |
//! | push, capacity grows        | all stale (the block may have moved)  |
//! | free                        | all stale                             |
//!
//! The borrowing iterators below make these rules compile-time errors. The raw
//! pointers from [`GenVec::begin`] and [`GenVec::end`] carry no lifetime and are
//! the caller's responsibility.

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::Range;
use core::ptr::{self, NonNull};

use crate::raw::RawBlock;
use crate::vec::GenVec;

impl<T> GenVec<T> {
    /// Position of the first element.
    ///
    /// For an empty vector this is the start of the storage, equal to [`end`](Self::end).
    #[inline]
    pub fn begin(&self) -> *const T {
        self.block().as_ptr()
    }

    /// Position one past the last element: `begin + len`.
    ///
    /// Never dereference it.
    #[inline]
    pub fn end(&self) -> *const T {
        // SAFETY (PRECONDITIONS ARE MET): len <= capacity and the block always holds
        // one padding slot past capacity, so the offset stays inside the allocation.
        unsafe { self.begin().add(self.len()) }
    }

    /// Both positions at once.
    #[inline]
    pub fn ptr_range(&self) -> Range<*const T> {
        self.begin()..self.end()
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

/// Borrowing iterator over a [`GenVec`].
pub struct Iter<'a, T> {
    ptr: NonNull<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    fn new(vec: &'a GenVec<T>) -> Self {
        Self {
            ptr: NonNull::from(vec.as_slice()).cast::<T>(),
            remaining: vec.len(),
            _marker: PhantomData,
        }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY (PRECONDITIONS ARE MET): `remaining` live elements start at ptr and
        // stay borrowed for 'a.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.remaining) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): ptr points at a live element and the next
        // position is at most `end`.
        unsafe {
            let item = &*self.ptr.as_ptr();
            self.ptr = self.ptr.add(1);
            self.remaining -= 1;
            Some(item)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // SAFETY (PRECONDITIONS ARE MET): `remaining` indexes the last element not yet
        // yielded.
        Some(unsafe { &*self.ptr.as_ptr().add(self.remaining) })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ptr: self.ptr,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

/// Mutable borrowing iterator over a [`GenVec`].
pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    fn new(vec: &'a mut GenVec<T>) -> Self {
        let remaining = vec.len();

        Self {
            ptr: NonNull::from(vec.as_mut_slice()).cast::<T>(),
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): each live element is yielded at most once,
        // so the mutable references never alias.
        unsafe {
            let item = &mut *self.ptr.as_ptr();
            self.ptr = self.ptr.add(1);
            self.remaining -= 1;
            Some(item)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // SAFETY (PRECONDITIONS ARE MET): as in next.
        Some(unsafe { &mut *self.ptr.as_ptr().add(self.remaining) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator that moves elements out of a [`GenVec`].
///
/// Elements not yet yielded are dropped, in order, together with the iterator.
pub struct IntoIter<T> {
    block: RawBlock<T>,
    head: usize,
    tail: usize,
}

impl<T> IntoIter<T> {
    fn remaining_ptr(&mut self) -> *mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): head <= tail <= capacity.
        let start = unsafe { self.block.as_mut_ptr().add(self.head) };
        ptr::slice_from_raw_parts_mut(start, self.tail - self.head)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        let index = self.head;
        self.head += 1;

        // SAFETY (PRECONDITIONS ARE MET): slot `index` is live and leaves the live
        // window before it is read, so it is moved out once.
        Some(unsafe { self.block.as_ptr().add(index).read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        self.tail -= 1;

        // SAFETY (PRECONDITIONS ARE MET): as in next.
        Some(unsafe { self.block.as_ptr().add(self.tail).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.remaining_ptr();
        self.head = self.tail;

        // SAFETY (PRECONDITIONS ARE MET): the window held the elements never yielded.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T> IntoIterator for GenVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (block, len) = self.into_parts();

        IntoIter {
            block,
            head: 0,
            tail: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a GenVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GenVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
