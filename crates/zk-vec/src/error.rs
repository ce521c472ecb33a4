// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for zk-vec.

use thiserror::Error;

/// Error type for `GenVec` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GenVecError {
    /// A required handle or element was missing, or a range did not fit the vector.
    #[error("invalid argument: missing handle, missing element or out-of-bounds range")]
    InvalidArgument,

    /// Storage could not be allocated or grown.
    ///
    /// Also reported when the requested capacity would overflow the maximum
    /// allocation size.
    #[error("allocation failure: could not obtain storage")]
    AllocationFailure,
}

/// A rejected push: the value that could not be stored and the cause.
///
/// The caller keeps ownership of the value.
#[derive(Error, Eq, PartialEq)]
#[error("push failed: {error}")]
pub struct PushError<T> {
    value: T,
    error: GenVecError,
}

impl<T> PushError<T> {
    pub(crate) fn new(value: T, error: GenVecError) -> Self {
        Self { value, error }
    }

    /// Returns the cause of the failure.
    pub fn error(&self) -> GenVecError {
        self.error
    }

    /// Returns a reference to the rejected value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Hands the rejected value back to the caller.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> core::fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
