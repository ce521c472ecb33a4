// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// How an element enters a vector: cloned from a borrow or moved in by value.
///
/// Dropping an element is always the element type's own [`Drop`]; cloning is its
/// [`Clone`]. A `Move` consumes the source binding, so the caller cannot release
/// the resources it handed over.
///
/// # Example
///
/// ```rust
/// use zk_vec::Transplant;
///
/// let name = String::from("zk");
///
/// let copied = Transplant::Copy(&name);
/// assert!(copied.is_copy());
/// assert_eq!(copied.into_owned(), "zk");
///
/// let moved = Transplant::Move(name);
/// assert!(moved.is_move());
/// assert_eq!(moved.into_owned(), "zk");
/// ```
#[derive(Debug)]
pub enum Transplant<'a, T> {
    /// Insert an independent duplicate; the source stays with the caller.
    Copy(&'a T),
    /// Insert the value itself, transferring its resources to the vector.
    Move(T),
}

impl<T> Transplant<'_, T> {
    /// Returns `true` for [`Transplant::Copy`].
    #[inline]
    pub fn is_copy(&self) -> bool {
        matches!(self, Self::Copy(_))
    }

    /// Returns `true` for [`Transplant::Move`].
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move(_))
    }

    /// Resolves into an owned value, cloning in copy mode.
    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            Self::Copy(source) => source.clone(),
            Self::Move(value) => value,
        }
    }
}
