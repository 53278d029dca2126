// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable fixed-stride vector with typed cleanup.
//!
//! [`StrideVec<T>`] is a dynamic array over the raw slot storage of
//! `stride-buf`: doubling growth from an explicit initial capacity,
//! order-preserving insert/delete shifts, in-place unstable sort, mutable
//! traversal, and linear or binary search.
//!
//! # Core Guarantees
//!
//! - **Explicit capacity**: construction takes a non-zero initial capacity;
//!   growth always doubles, so reallocation points are predictable.
//! - **Typed cleanup**: whether elements own resources is the compile-time
//!   fact [`core::mem::needs_drop`]. Elements are dropped when overwritten,
//!   deleted, cleared, or when the vector itself is dropped, and never for
//!   relocations (growth, shifts, sorting).
//! - **No silent clamping**: every indexed operation checks its documented
//!   range and fails with [`StrideVecError::OutOfBounds`] instead of
//!   adjusting the index.
//!
//! # Example
//!
//! ```rust
//! use stride_vec::{StrideVec, StrideVecError};
//!
//! fn example() -> Result<(), StrideVecError> {
//!     let mut vec = StrideVec::<i32>::with_capacity(2)?;
//!
//!     vec.append(1)?;
//!     vec.append(2)?;
//!     vec.append(3)?; // doubles capacity
//!     vec.insert(99, 1)?;
//!     vec.delete(0)?;
//!
//!     assert_eq!(vec.as_slice(), &[99, 2, 3]);
//!
//!     vec.sort_unstable_by(|a, b| a.cmp(b));
//!     let found = vec.search_by(&3, |k, e| k.cmp(e), 0, true)?;
//!     assert_eq!(found, Some(1));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod stride_vec;

#[cfg(test)]
mod tests;

pub use error::StrideVecError;
pub use stride_vec::StrideVec;
