// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting allocation failures in `GenVec` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use zk_vec::{GenVec, GenVecBehaviour, GenVecError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), GenVecError> {
///         let mut vec = GenVec::new()?;
///         for i in 0..8u8 {
///             vec.push(i)?;
///         }
///
///         // Inject failure
///         vec.change_behaviour(GenVecBehaviour::FailAtGrow);
///
///         // The vector is full, so this push needs to grow
///         assert_eq!(vec.push(8u8), Err(GenVecError::AllocationFailure));
///
///         // Reset to normal behaviour
///         vec.change_behaviour(GenVecBehaviour::None);
///
///         // Now it works
///         vec.push(8u8)?;
///         Ok(())
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Allocating a new block (construction, cloning) fails with `AllocationFailure`.
    FailAtAllocate,
    /// Growing the block fails with `AllocationFailure`.
    FailAtGrow,
}
