// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::mem;
use core::ops::{Bound, Deref, DerefMut, RangeBounds};
use core::ptr;
use core::slice;

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::GenVecBehaviour;
use crate::error::{GenVecError, PushError};
use crate::raw::RawBlock;
use crate::transplant::Transplant;

/// A growable vector storing its elements inline in one allocation.
///
/// Capacity starts at [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) and is
/// multiplied by [`GROWTH_FACTOR`](crate::GROWTH_FACTOR) whenever an insertion
/// finds the vector full. It never shrinks.
///
/// Every operation that may allocate is fallible. When it fails, the vector keeps
/// all of its elements and its length.
///
/// # Example
///
/// ```rust
/// use zk_vec::{GenVec, GenVecError};
///
/// fn example() -> Result<(), GenVecError> {
///     let mut vec = GenVec::new()?;
///     vec.push(1u8)?;
///     vec.push_clone(&2u8)?;
///
///     assert_eq!(vec.len(), 2);
///     assert_eq!(vec.capacity(), 8);
///     assert_eq!(vec.as_slice(), &[1, 2]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GenVec<T> {
    block: RawBlock<T>,
    len: usize,
}

impl<T> GenVec<T> {
    fn from_block(block: RawBlock<T>) -> Self {
        Self { block, len: 0 }
    }

    /// Creates an empty vector with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots.
    ///
    /// # Errors
    ///
    /// Returns [`GenVecError::AllocationFailure`] if the storage cannot be allocated.
    pub fn new() -> Result<Self, GenVecError> {
        Ok(Self::from_block(RawBlock::allocate()?))
    }

    /// Creates an empty vector with an injected behaviour already in place.
    ///
    /// With [`GenVecBehaviour::FailAtAllocate`] construction itself fails.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn new_with_behaviour(behaviour: GenVecBehaviour) -> Result<Self, GenVecError> {
        Ok(Self::from_block(RawBlock::with_capacity_and_behaviour(
            crate::DEFAULT_CAPACITY,
            behaviour,
        )?))
    }

    /// Changes the injected behaviour. Sticky until changed again.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: GenVecBehaviour) {
        self.block.change_behaviour(behaviour);
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Returns the byte size of one element.
    #[inline]
    pub fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    #[inline(always)]
    fn reserve_for(&mut self, min_capacity: usize) -> Result<(), GenVecError> {
        self.block.grow_to(min_capacity)
    }

    #[inline(always)]
    fn reserve_one(&mut self) -> Result<(), GenVecError> {
        if self.len < self.capacity() {
            return Ok(());
        }

        self.block.grow()
    }

    /// Writes `value` into the first free slot.
    ///
    /// # Safety
    ///
    /// `len < capacity` must hold.
    #[inline(always)]
    unsafe fn write_at_end(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());

        // SAFETY (PRECONDITIONS ARE MET): slot `len` lies inside the block and holds
        // no live element.
        unsafe { self.block.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Moves `value` to the end of the vector, growing it if full.
    ///
    /// # Errors
    ///
    /// Returns [`GenVecError::AllocationFailure`] if growing fails. The vector is
    /// unchanged and `value` is dropped. Use [`try_push`](Self::try_push) to get it
    /// back instead.
    pub fn push(&mut self, value: T) -> Result<(), GenVecError> {
        self.try_push(value).map_err(|e| e.error())
    }

    /// Moves `value` to the end of the vector, handing it back if growing fails.
    ///
    /// # Errors
    ///
    /// Returns a [`PushError`] holding `value` and the cause if growing fails. The
    /// vector is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zk_vec::{GenVec, GenVecError};
    ///
    /// fn example() -> Result<(), GenVecError> {
    ///     let mut vec = GenVec::new()?;
    ///
    ///     if let Err(e) = vec.try_push(String::from("zk")) {
    ///         // Still owned here; retry later or release it.
    ///         let value: String = e.into_value();
    ///         drop(value);
    ///     }
    ///
    ///     assert_eq!(vec.as_slice(), ["zk"]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<(), PushError<T>> {
        if let Err(error) = self.reserve_one() {
            return Err(PushError::new(value, error));
        }

        // SAFETY (PRECONDITIONS ARE MET): reserve_one guarantees len < capacity.
        unsafe { self.write_at_end(value) };

        Ok(())
    }

    /// Appends a clone of `value`, growing the vector if full.
    ///
    /// The clone is taken only after storage is secured, so a failed grow never
    /// clones.
    ///
    /// # Errors
    ///
    /// Returns [`GenVecError::AllocationFailure`] if growing fails. The vector is
    /// unchanged.
    pub fn push_clone(&mut self, value: &T) -> Result<(), GenVecError>
    where
        T: Clone,
    {
        self.reserve_one()?;

        // SAFETY (PRECONDITIONS ARE MET): reserve_one guarantees len < capacity.
        unsafe { self.write_at_end(value.clone()) };

        Ok(())
    }

    /// Appends an element in the mode chosen by `element`.
    ///
    /// Move-only element types use [`push`](Self::push) or
    /// [`try_push`](Self::try_push); copying requires [`Clone`].
    ///
    /// # Errors
    ///
    /// Returns [`GenVecError::AllocationFailure`] if growing fails. The vector is
    /// unchanged; a moved value is dropped, a borrowed one is never cloned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zk_vec::{GenVec, GenVecError, Transplant};
    ///
    /// fn example() -> Result<(), GenVecError> {
    ///     let mut vec = GenVec::new()?;
    ///     let word = String::from("copy");
    ///
    ///     vec.push_back(Transplant::Copy(&word))?;
    ///     vec.push_back(Transplant::Move(String::from("move")))?;
    ///
    ///     assert_eq!(word, "copy");
    ///     assert_eq!(vec, ["copy".to_string(), "move".to_string()]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push_back(&mut self, element: Transplant<'_, T>) -> Result<(), GenVecError>
    where
        T: Clone,
    {
        self.reserve_one()?;

        // SAFETY (PRECONDITIONS ARE MET): reserve_one guarantees len < capacity.
        unsafe { self.write_at_end(element.into_owned()) };

        Ok(())
    }

    /// Appends clones of every element of `values`.
    ///
    /// All required storage is secured before the first clone.
    ///
    /// # Errors
    ///
    /// Returns [`GenVecError::AllocationFailure`] if growing fails. No element is
    /// appended in that case.
    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), GenVecError>
    where
        T: Clone,
    {
        let required = self
            .len
            .checked_add(values.len())
            .ok_or(GenVecError::AllocationFailure)?;

        self.reserve_for(required)?;

        for value in values {
            // SAFETY (PRECONDITIONS ARE MET): capacity >= len + values.len() and
            // len grows by one per iteration.
            unsafe { self.write_at_end(value.clone()) };
        }

        Ok(())
    }

    /// Removes the last element and returns it.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): slot `len` held a live element that is no
        // longer counted, so it is read out exactly once.
        Some(unsafe { self.block.as_ptr().add(self.len).read() })
    }

    /// Drops every element in index order. Capacity is kept.
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();

        // Reset first: a panicking Drop must not lead to a second drop.
        self.len = 0;

        // SAFETY (PRECONDITIONS ARE MET): the slice covers exactly the former live
        // elements, none of which is reachable through `self` anymore.
        unsafe { ptr::drop_in_place(elements) };
    }

    fn resolve_range<R>(&self, range: R) -> Result<(usize, usize), GenVecError>
    where
        R: RangeBounds<usize>,
    {
        let begin = match range.start_bound() {
            Bound::Included(&begin) => begin,
            Bound::Excluded(&begin) => begin
                .checked_add(1)
                .ok_or(GenVecError::InvalidArgument)?,
            Bound::Unbounded => 0,
        };

        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1).ok_or(GenVecError::InvalidArgument)?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };

        if begin > end || end > self.len {
            return Err(GenVecError::InvalidArgument);
        }

        Ok((begin, end))
    }

    /// Moves the elements in `range` to the end of `dest`, keeping their order.
    ///
    /// The elements after the range shift down to close the gap. `dest` is grown
    /// before anything moves.
    ///
    /// # Errors
    ///
    /// - [`GenVecError::InvalidArgument`] if the range is reversed or ends past `len`.
    /// - [`GenVecError::AllocationFailure`] if `dest` cannot grow. Both vectors keep
    ///   their elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zk_vec::{GenVec, GenVecError};
    ///
    /// fn example() -> Result<(), GenVecError> {
    ///     let mut src = GenVec::new()?;
    ///     src.try_extend_from_slice(&[1, 2, 3, 4, 5])?;
    ///
    ///     let mut dest = GenVec::new()?;
    ///     dest.push(0)?;
    ///
    ///     src.move_range(1..3, &mut dest)?;
    ///
    ///     assert_eq!(src, [1, 4, 5]);
    ///     assert_eq!(dest, [0, 2, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn move_range<R>(&mut self, range: R, dest: &mut GenVec<T>) -> Result<(), GenVecError>
    where
        R: RangeBounds<usize>,
    {
        let (begin, end) = self.resolve_range(range)?;
        let count = end - begin;

        if count == 0 {
            return Ok(());
        }

        let required = dest
            .len
            .checked_add(count)
            .ok_or(GenVecError::AllocationFailure)?;

        dest.reserve_for(required)?;

        let tail = self.len - end;

        // SAFETY (PRECONDITIONS ARE MET): `self` and `dest` are distinct blocks, the
        // source range lies within self's live elements and dest has room for `count`
        // more. The moved slots are forgotten by self before it is observable again.
        unsafe {
            let src = self.block.as_ptr().add(begin);
            let dst = dest.block.as_mut_ptr().add(dest.len);
            ptr::copy_nonoverlapping(src, dst, count);
            dest.len += count;

            let base = self.block.as_mut_ptr();
            ptr::copy(base.add(end), base.add(begin), tail);
            self.len -= count;
        }

        log::trace!("moved {count} elements from [{begin}, {end})");

        Ok(())
    }

    /// Frees the vector: drops every element in index order, then releases the
    /// storage.
    ///
    /// Equivalent to letting the vector go out of scope.
    pub fn free(self) {
        drop(self);
    }

    /// Returns a reference to the element at `index`, if live.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, if live.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): the first `len` slots are initialized and
        // the pointer is non-null and aligned.
        unsafe { slice::from_raw_parts(self.block.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): as in as_slice, and `&mut self` is unique.
        unsafe { slice::from_raw_parts_mut(self.block.as_mut_ptr(), self.len) }
    }

    /// Clones the vector into a fresh allocation of the same capacity.
    ///
    /// Elements are cloned with their own [`Clone`], so nested vectors are copied
    /// deeply. An injected behaviour carries over to the clone.
    ///
    /// # Errors
    ///
    /// Returns [`GenVecError::AllocationFailure`] if the new storage cannot be
    /// allocated.
    pub fn try_clone(&self) -> Result<Self, GenVecError>
    where
        T: Clone,
    {
        #[cfg(any(test, feature = "test_utils"))]
        let block =
            RawBlock::with_capacity_and_behaviour(self.capacity(), self.block.behaviour())?;

        #[cfg(not(any(test, feature = "test_utils")))]
        let block = RawBlock::with_capacity(self.capacity())?;

        let mut clone = Self::from_block(block);

        for value in self.iter() {
            // SAFETY (PRECONDITIONS ARE MET): clone has the same capacity as self, which
            // is at least self.len().
            unsafe { clone.write_at_end(value.clone()) };
        }

        Ok(clone)
    }

    pub(crate) fn into_parts(self) -> (RawBlock<T>, usize) {
        let this = mem::ManuallyDrop::new(self);

        // SAFETY (PRECONDITIONS ARE MET): `this` is never dropped, so the block is
        // moved out exactly once.
        let block = unsafe { ptr::read(&this.block) };

        (block, this.len)
    }

    #[inline]
    pub(crate) fn block(&self) -> &RawBlock<T> {
        &self.block
    }
}

impl<T> Drop for GenVec<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): the slice covers exactly the live elements,
        // dropped here once in index order. The block frees the memory afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T: Clone> Clone for GenVec<T> {
    /// # Panics
    ///
    /// Panics if the new storage cannot be allocated. Use
    /// [`try_clone`](GenVec::try_clone) to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(clone) => clone,
            Err(e) => panic!("GenVec clone failed: {e}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GenVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T> Deref for GenVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for GenVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for GenVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GenVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for GenVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for GenVec<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GenVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
