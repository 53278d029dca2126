// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for stride-buf.
use thiserror::Error;

/// Errors from slot-buffer construction and growth.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SlotBufError {
    /// Slot layouts with zero size have no meaningful stride arithmetic.
    #[error("slot size must be non-zero")]
    ZeroSizedSlot,

    /// A buffer must start with at least one slot.
    #[error("initial capacity must be non-zero")]
    ZeroCapacity,

    /// Doubling `capacity` slots would exceed the addressable byte range.
    #[error("capacity overflow while growing past {capacity} slots")]
    CapacityOverflow {
        /// Capacity in slots at the time growth was requested.
        capacity: usize,
    },

    /// The allocator could not satisfy the request.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}
