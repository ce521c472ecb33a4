// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous vector with doubling growth and fallible allocation.
//!
//! `GenVec<T>` stores its elements inline in a single allocation that starts at
//! [`DEFAULT_CAPACITY`] slots and grows by [`GROWTH_FACTOR`] whenever it fills up.
//!
//! # Core Guarantees
//!
//! - **Fixed growth law**: capacity is 8 on creation and only ever doubles.
//! - **Fallible allocation**: creating or growing storage returns
//!   [`GenVecError::AllocationFailure`] instead of aborting. A failed grow leaves the
//!   vector exactly as it was.
//! - **Copy or move insertion**: [`GenVec::push`] moves a value in, [`GenVec::push_clone`]
//!   clones from a borrow and [`GenVec::push_back`] picks the mode from a [`Transplant`].
//! - **Exactly-once drop**: every live element is dropped once, in index order, when the
//!   vector is freed. The trailing padding slot is never touched.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use zk_vec::{GenVec, GenVecError};
//!
//! fn example() -> Result<(), GenVecError> {
//!     let mut vec = GenVec::<u32>::new()?;
//!     assert_eq!(vec.capacity(), 8);
//!
//!     for i in 0..9 {
//!         vec.push(i)?;
//!     }
//!
//!     assert_eq!(vec.len(), 9);
//!     assert_eq!(vec.capacity(), 16);
//!     assert_eq!(vec, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Copy vs Move
//!
//! ```rust
//! use zk_vec::{GenVec, GenVecError, Transplant};
//!
//! fn example() -> Result<(), GenVecError> {
//!     let mut vec = GenVec::<String>::new()?;
//!
//!     let mut kept = String::from("kept");
//!     vec.push_back(Transplant::Copy(&kept))?;
//!     kept.push_str(" and changed");
//!
//!     let given = String::from("given");
//!     vec.push_back(Transplant::Move(given))?;
//!
//!     assert_eq!(vec, ["kept".to_string(), "given".to_string()]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Nesting
//!
//! Vectors of vectors compose without extra wiring: `GenVec<GenVec<T>>` drops inner
//! vectors recursively and [`Clone`] performs a deep copy at every level.
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! zk-vec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! ```rust,ignore
//! use zk_vec::{GenVec, GenVecBehaviour, GenVecError};
//!
//! let mut vec = GenVec::new().unwrap();
//! vec.change_behaviour(GenVecBehaviour::FailAtGrow);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;

mod error;
mod raw;
mod transplant;
mod vec;

pub mod handle;
pub mod iter;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::GenVecBehaviour;

pub use error::{GenVecError, PushError};
pub use iter::{IntoIter, Iter, IterMut};
pub use transplant::Transplant;
pub use vec::GenVec;

/// Number of slots a freshly created [`GenVec`] can hold before its first grow.
pub const DEFAULT_CAPACITY: usize = 8;

/// Factor applied to the capacity on every grow.
pub const GROWTH_FACTOR: usize = 2;
