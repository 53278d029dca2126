// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw slot storage for stride containers.
//!
//! [`RawSlotBuf`] owns one contiguous allocation of fixed-size slots
//! described by a runtime [`core::alloc::Layout`]. It tracks capacity,
//! doubling growth and slot arithmetic, never element liveness. The typed
//! container in `stride-vec` layers initialization tracking on top.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod raw_slot_buf;

#[cfg(test)]
mod tests;

pub use error::SlotBufError;
pub use raw_slot_buf::RawSlotBuf;
