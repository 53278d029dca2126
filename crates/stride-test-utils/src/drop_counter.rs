// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared handle counting how many [`CountedDrop`] elements were dropped.
///
/// Used to verify that a container runs element cleanup exactly once per
/// removal/overwrite/teardown, and never for relocations.
///
/// # Example
///
/// ```rust
/// use stride_test_utils::DropCounter;
///
/// let counter = DropCounter::new();
/// let probe = counter.element(7);
///
/// assert_eq!(counter.count(), 0);
/// drop(probe);
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DropCounter(Arc<AtomicUsize>);

impl DropCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of probe drops observed so far.
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Creates a probe element tied to this counter.
    pub fn element(&self, value: i32) -> CountedDrop {
        CountedDrop {
            value,
            counter: Arc::clone(&self.0),
        }
    }
}

/// An element that increments its [`DropCounter`] exactly once on drop.
#[derive(Debug)]
pub struct CountedDrop {
    value: i32,
    counter: Arc<AtomicUsize>,
}

impl CountedDrop {
    /// Returns the payload value the probe carries.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }
}
