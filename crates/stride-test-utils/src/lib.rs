// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for stride crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod drop_counter;
mod permutations;

#[cfg(test)]
mod tests;

pub use drop_counter::{CountedDrop, DropCounter};
pub use permutations::{apply_permutation, index_permutations};
