// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop and clone accounting for container tests.

use std::cell::Cell;
use std::rc::Rc;

/// Shared tally of drops and clones of the [`Tracked`] values it created.
///
/// Cloning a counter shares the tally.
///
/// # Example
/// ```
/// use zk_test_utils::DropCounter;
///
/// let counter = DropCounter::new();
/// let value = counter.track("payload");
/// let copy = value.clone();
///
/// drop(value);
/// drop(copy);
///
/// assert_eq!(counter.clones(), 1);
/// assert_eq!(counter.drops(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
    clones: Rc<Cell<usize>>,
}

impl DropCounter {
    /// Creates a counter with both tallies at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value that owns a heap copy of `payload` and reports to this counter.
    pub fn track(&self, payload: &str) -> Tracked {
        Tracked {
            payload: payload.to_owned(),
            counter: self.clone(),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Number of tracked values cloned so far.
    pub fn clones(&self) -> usize {
        self.clones.get()
    }
}

/// A value owning a heap-allocated string that reports drops and clones.
///
/// Cloning deep-copies the string, so a clone is independent of its source.
#[derive(Debug)]
pub struct Tracked {
    payload: String,
    counter: DropCounter,
}

impl Tracked {
    /// Returns the owned string.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Overwrites the owned string in place, keeping its buffer where possible.
    pub fn set_payload(&mut self, payload: &str) {
        self.payload.clear();
        self.payload.push_str(payload);
    }

    /// Address of the owned string buffer.
    pub fn payload_ptr(&self) -> *const u8 {
        self.payload.as_ptr()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counter.clones.set(self.counter.clones.get() + 1);

        Self {
            payload: self.payload.clone(),
            counter: self.counter.clone(),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counter.drops.set(self.counter.drops.get() + 1);
    }
}
