// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{DEFAULT_CAPACITY, GROWTH_FACTOR, GenVec};

fn expected_capacity(len: usize) -> usize {
    let mut capacity = DEFAULT_CAPACITY;
    while capacity < len {
        capacity *= GROWTH_FACTOR;
    }
    capacity
}

proptest! {
    #[test]
    fn size_never_exceeds_capacity(values in prop::collection::vec(any::<u32>(), 0..300)) {
        let mut vec = GenVec::new().expect("Failed to new()");

        for value in &values {
            vec.push(*value).expect("Failed to push()");
            prop_assert!(vec.len() <= vec.capacity());
        }
    }

    #[test]
    fn capacity_follows_growth_law(len in 0..600usize) {
        let mut vec = GenVec::new().expect("Failed to new()");

        for i in 0..len {
            vec.push(i as u16).expect("Failed to push()");
        }

        prop_assert_eq!(vec.capacity(), expected_capacity(len));
    }

    #[test]
    fn copy_pushes_preserve_order(values in prop::collection::vec(".{0,12}", 0..100)) {
        let mut vec = GenVec::new().expect("Failed to new()");

        for value in &values {
            vec.push_clone(value).expect("Failed to push_clone()");
        }

        prop_assert!(vec.iter().eq(values.iter()));
    }

    #[test]
    fn iterator_range_matches_len(len in 0..200usize) {
        let mut vec = GenVec::new().expect("Failed to new()");

        for i in 0..len {
            vec.push(i as u64).expect("Failed to push()");
            let bytes = vec.end() as usize - vec.begin() as usize;
            prop_assert_eq!(bytes / vec.element_size(), vec.len());
        }
    }

    #[test]
    fn move_range_splits_and_appends(
        values in prop::collection::vec(any::<u8>(), 0..64),
        dest_len in 0..20usize,
        a in 0..64usize,
        b in 0..64usize,
    ) {
        let begin = a.min(b).min(values.len());
        let end = a.max(b).min(values.len());

        let mut src = GenVec::new().expect("Failed to new()");
        src.try_extend_from_slice(&values).expect("Failed to try_extend_from_slice()");
        let mut dest = GenVec::new().expect("Failed to new()");
        for _ in 0..dest_len {
            dest.push(0u8).expect("Failed to push()");
        }

        src.move_range(begin..end, &mut dest).expect("Failed to move_range()");

        let mut expected_src = values.clone();
        let moved: Vec<u8> = expected_src.drain(begin..end).collect();

        prop_assert_eq!(src.as_slice(), expected_src.as_slice());
        prop_assert_eq!(&dest[dest_len..], moved.as_slice());
        prop_assert_eq!(dest.capacity(), expected_capacity(dest_len + moved.len()));
    }
}
