// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns every permutation of `0..n` in lexicographic order.
///
/// Intended for exhaustive order-sensitivity tests at small `n`; the result
/// has `n!` entries.
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(n);
    let mut used = vec![false; n];

    fill(n, &mut current, &mut used, &mut out);
    out
}

fn fill(n: usize, current: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
    if current.len() == n {
        out.push(current.clone());
        return;
    }

    for i in 0..n {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(i);
        fill(n, current, used, out);
        current.pop();
        used[i] = false;
    }
}

/// Reorders `items` so that position `i` receives `items[perm[i]]`.
///
/// # Panics
///
/// Panics if `perm` indexes outside `items`.
pub fn apply_permutation<T: Clone>(perm: &[usize], items: &[T]) -> Vec<T> {
    perm.iter().map(|&i| items[i].clone()).collect()
}
