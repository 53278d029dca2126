// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::DropCounter;

#[test]
fn test_counts_each_drop_once() {
    let counter = DropCounter::new();

    let a = counter.element(1);
    let b = counter.element(2);
    assert_eq!(counter.count(), 0);

    drop(a);
    assert_eq!(counter.count(), 1);

    drop(b);
    assert_eq!(counter.count(), 2);
}

#[test]
fn test_value_is_preserved() {
    let counter = DropCounter::new();
    let probe = counter.element(41);

    assert_eq!(probe.value(), 41);
}
