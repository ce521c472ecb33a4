// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zk_test_utils::DropCounter;

use crate::Transplant;

#[test]
fn test_copy_clones_source() {
    let counter = DropCounter::new();
    let source = counter.track("source");

    let transplant = Transplant::Copy(&source);
    assert!(transplant.is_copy());
    assert!(!transplant.is_move());

    let owned = transplant.into_owned();

    assert_eq!(counter.clones(), 1);
    assert_ne!(owned.payload_ptr(), source.payload_ptr());
}

#[test]
fn test_move_passes_value_through() {
    let counter = DropCounter::new();
    let value = counter.track("value");
    let buffer = value.payload_ptr();

    let transplant = Transplant::Move(value);
    assert!(transplant.is_move());

    let owned = transplant.into_owned();

    assert_eq!(counter.clones(), 0);
    assert_eq!(owned.payload_ptr(), buffer);
}
