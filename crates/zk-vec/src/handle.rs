// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Nullable handle operations.
//!
//! Free functions over optional vector handles for callers that may hold no
//! vector at all (for example a slot that has not been initialized yet). A missing
//! handle reads as an empty vector in accessors and is rejected with
//! [`GenVecError::InvalidArgument`] by operations that need one.
//!
//! # Example
//!
//! ```rust
//! use zk_vec::handle;
//! use zk_vec::{GenVec, GenVecError, Transplant};
//!
//! let mut slot: Option<GenVec<u32>> = None;
//!
//! assert_eq!(handle::size(slot.as_ref()), 0);
//! assert_eq!(
//!     handle::push_back(slot.as_mut(), Some(Transplant::Move(1))),
//!     Err(GenVecError::InvalidArgument)
//! );
//!
//! slot = Some(GenVec::new().unwrap());
//! handle::push_back(slot.as_mut(), Some(Transplant::Move(1))).unwrap();
//! assert_eq!(handle::size(slot.as_ref()), 1);
//!
//! handle::free(slot.take());
//! ```

use core::ptr;

use crate::error::GenVecError;
use crate::transplant::Transplant;
use crate::vec::GenVec;

/// Number of live elements, or 0 without a handle.
#[inline]
pub fn size<T>(handle: Option<&GenVec<T>>) -> usize {
    handle.map_or(0, GenVec::len)
}

/// Number of allocated slots, or 0 without a handle.
#[inline]
pub fn capacity<T>(handle: Option<&GenVec<T>>) -> usize {
    handle.map_or(0, GenVec::capacity)
}

/// Appends `element` in the mode it carries.
///
/// # Errors
///
/// - [`GenVecError::InvalidArgument`] if the handle or the element is missing.
/// - [`GenVecError::AllocationFailure`] if the vector cannot grow.
pub fn push_back<T: Clone>(
    handle: Option<&mut GenVec<T>>,
    element: Option<Transplant<'_, T>>,
) -> Result<(), GenVecError> {
    let (Some(vec), Some(element)) = (handle, element) else {
        return Err(GenVecError::InvalidArgument);
    };

    vec.push_back(element)
}

/// Moves `value` to the end of the vector. Works for element types without
/// [`Clone`].
///
/// # Errors
///
/// - [`GenVecError::InvalidArgument`] if the handle or the value is missing.
/// - [`GenVecError::AllocationFailure`] if the vector cannot grow.
pub fn push<T>(handle: Option<&mut GenVec<T>>, value: Option<T>) -> Result<(), GenVecError> {
    let (Some(vec), Some(value)) = (handle, value) else {
        return Err(GenVecError::InvalidArgument);
    };

    vec.push(value)
}

/// Moves the elements `[begin, end)` of `source` to the end of `dest`.
///
/// # Errors
///
/// - [`GenVecError::InvalidArgument`] if a handle is missing or the range does not
///   fit `source`.
/// - [`GenVecError::AllocationFailure`] if `dest` cannot grow.
pub fn move_range<T>(
    source: Option<&mut GenVec<T>>,
    begin: usize,
    end: usize,
    dest: Option<&mut GenVec<T>>,
) -> Result<(), GenVecError> {
    let (Some(source), Some(dest)) = (source, dest) else {
        return Err(GenVecError::InvalidArgument);
    };

    source.move_range(begin..end, dest)
}

/// Frees the vector, dropping every element. Does nothing without a handle.
#[inline]
pub fn free<T>(handle: Option<GenVec<T>>) {
    if let Some(vec) = handle {
        vec.free();
    }
}

/// Position of the first element, or null without a handle.
#[inline]
pub fn begin<T>(handle: Option<&GenVec<T>>) -> *const T {
    handle.map_or(ptr::null(), GenVec::begin)
}

/// Position one past the last element, or null without a handle.
#[inline]
pub fn end<T>(handle: Option<&GenVec<T>>) -> *const T {
    handle.map_or(ptr::null(), GenVec::end)
}
