// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! k-combinations of card positions.
//!
//! The evaluators search a hand by looking at every way of picking k of its n
//! cards (21 five-card subsets of a seven-card hand, 21 two-card fronts, ...).
//! [KSubsets] yields the positions of each subset in lexicographic order so
//! that searches visiting them are deterministic.

/// Largest n supported by [nck].
const MAX_N: usize = 53;

/// Largest k supported by [nck] and [KSubsets].
pub const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 53 and k <= 7.
const fn make_nck() -> [[u32; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u32; MAX_K + 1]; MAX_N + 1];
    let mut n = 0;

    while n <= MAX_N {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; MAX_K + 1]; MAX_N + 1] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 53 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    NCKS[n][k] as usize
}

/// Iterator over the k-subsets of `0..n` in lexicographic order.
///
/// Each item is a slice-like array whose first k positions hold strictly
/// increasing indices, for 7 choose 2 the first items are `[0, 1]`, `[0, 2]`,
/// ..., `[0, 6]`, `[1, 2]`.
#[derive(Debug, Clone)]
pub struct KSubsets {
    n: usize,
    k: usize,
    idx: [usize; MAX_K],
    remaining: usize,
}

impl KSubsets {
    /// Creates an iterator over the k-subsets of `0..n`.
    ///
    /// Panics if n > 53 or k > 7.
    pub fn new(n: usize, k: usize) -> Self {
        let mut idx = [0; MAX_K];
        for (pos, i) in idx.iter_mut().enumerate().take(k) {
            *i = pos;
        }

        Self {
            n,
            k,
            idx,
            remaining: nck(n, k),
        }
    }

    /// Moves to the next subset in lexicographic order.
    fn advance(&mut self) {
        let (n, k) = (self.n, self.k);

        // Find the rightmost position that can still move right.
        let mut pos = k;
        while pos > 0 {
            pos -= 1;
            if self.idx[pos] < n - k + pos {
                self.idx[pos] += 1;
                for next in pos + 1..k {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
                return;
            }
        }
    }
}

impl Iterator for KSubsets {
    type Item = Subset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let subset = Subset {
            idx: self.idx,
            len: self.k,
        };

        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for KSubsets {}

/// The positions of one k-subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subset {
    idx: [usize; MAX_K],
    len: usize,
}

impl Subset {
    /// Checks if this subset contains the given position.
    pub fn contains(&self, pos: usize) -> bool {
        self.idx[..self.len].contains(&pos)
    }

    /// Picks the items at this subset positions and the items at the other
    /// positions, preserving the input order in both.
    pub fn split<T: Copy>(&self, items: &[T]) -> (Vec<T>, Vec<T>) {
        let mut picked = Vec::with_capacity(self.len);
        let mut rest = Vec::with_capacity(items.len().saturating_sub(self.len));

        for (pos, &item) in items.iter().enumerate() {
            if self.contains(pos) {
                picked.push(item);
            } else {
                rest.push(item);
            }
        }

        (picked, rest)
    }
}

impl std::ops::Deref for Subset {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.idx[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(0, 0), 1);

        [1, 53, 1378, 23426, 292825, 2869685, 22957480, 154143080]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(53, k), v));

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 7, 21, 35, 35, 21, 7, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(7, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));
    }

    #[test]
    fn lexicographic_order() {
        let subsets = KSubsets::new(7, 2).map(|s| s.to_vec()).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 21);
        assert_eq!(subsets[0], [0, 1]);
        assert_eq!(subsets[1], [0, 2]);
        assert_eq!(subsets[6], [1, 2]);
        assert_eq!(subsets[20], [5, 6]);
        assert!(subsets.windows(2).all(|w| w[0] < w[1]));

        let subsets = KSubsets::new(7, 5).map(|s| s.to_vec()).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 21);
        assert_eq!(subsets[0], [0, 1, 2, 3, 4]);
        assert_eq!(subsets[20], [2, 3, 4, 5, 6]);
        assert!(subsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn exact_size() {
        for n in 0..=10 {
            for k in 0..=MAX_K {
                let it = KSubsets::new(n, k);
                assert_eq!(it.len(), nck(n, k));
                assert_eq!(it.count(), nck(n, k), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn subset_split() {
        let items = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];
        let subset = KSubsets::new(7, 2).nth(7).unwrap();
        assert_eq!(&*subset, &[1, 3]);

        let (picked, rest) = subset.split(&items);
        assert_eq!(picked, ['b', 'd']);
        assert_eq!(rest, ['a', 'c', 'e', 'f', 'g']);
    }
}
