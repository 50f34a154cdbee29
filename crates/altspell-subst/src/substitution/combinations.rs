// Enumeration of occurrence subsets
//
// For a word with N occurrences there are 2^N - 1 non-empty subsets. The
// enumeration is exponential in N; natural-language words rarely carry
// more than a handful of alternative spellings, so no pruning is done.

use std::cmp::Ordering;

/// Lazily yields every non-empty subset of `0..n` as sorted index lists.
///
/// Subsets come grouped by size, smallest first, and in lexicographic order
/// within one size. For `n = 3`:
///
/// ```text
/// [0] [1] [2] [0, 1] [0, 2] [1, 2] [0, 1, 2]
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    /// Indices of the subset yielded last; empty before the first call.
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// All non-empty subsets of `0..n`, sizes `1..=n`.
    pub fn all_lengths(n: usize) -> Self {
        Self {
            n,
            indices: Vec::with_capacity(n),
            done: n == 0,
        }
    }

    /// Total number of subsets this enumeration yields.
    ///
    /// Saturates at `usize::MAX` for absurdly large `n`.
    pub fn total(n: usize) -> usize {
        u32::try_from(n)
            .ok()
            .and_then(|n| 2usize.checked_pow(n))
            .map_or(usize::MAX, |count| count - 1)
    }

    /// Advance `indices` to the next combination of the same size.
    /// Returns `false` when the size is exhausted.
    fn advance_within_size(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if self.indices.is_empty() {
            self.indices.push(0);
        } else if !self.advance_within_size() {
            let size = self.indices.len() + 1;
            if size > self.n {
                self.done = true;
                return None;
            }
            self.indices.clear();
            self.indices.extend(0..size);
        }
        Some(self.indices.clone())
    }
}

/// Pick the element that compares strictly greater than all others by `key`.
///
/// Returns `None` for an empty input and when two or more elements share
/// the greatest key.
pub fn distinct_greatest_by_key<T, K, I, F>(items: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut best: Option<(K, T)> = None;
    let mut tied = false;
    for item in items {
        let k = key(&item);
        let greater = match &best {
            None => true,
            Some((best_key, _)) => match k.cmp(best_key) {
                Ordering::Less => false,
                Ordering::Equal => {
                    tied = true;
                    false
                }
                Ordering::Greater => true,
            },
        };
        if greater {
            best = Some((k, item));
            tied = false;
        }
    }
    if tied { None } else { best.map(|(_, item)| item) }
}
