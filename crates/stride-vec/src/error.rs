// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for stride-vec.
use stride_buf::SlotBufError;
use thiserror::Error;

/// Errors from `StrideVec` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StrideVecError {
    /// Zero-sized element types have no slot stride.
    #[error("element type must have non-zero size")]
    ZeroSizedElement,

    /// A vector must start with at least one slot of capacity.
    #[error("initial capacity must be non-zero")]
    ZeroCapacity,

    /// An index fell outside its documented valid range.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },

    /// The backing slot buffer failed to allocate or grow.
    #[error("SlotBufError: {0}")]
    Buf(#[from] SlotBufError),
}
