use alloc::vec::Vec;
use core::cmp;

/// Prefix sums over per-item extents, stored as a Fenwick tree.
///
/// `WindowState` keeps one of these for the heterogeneous regime: slot `i` holds the measured
/// extent of item `i`, or the configured average when the item has no ledger entry. Updates and
/// offset → index lookups are `O(log n)`.
#[derive(Clone, Debug, Default)]
pub struct ExtentSums {
    values: Vec<f64>,
    tree: Vec<f64>, // 1-indexed
    total: f64,
    max_bit: usize,
}

impl ExtentSums {
    /// `len` items, each with `extent`.
    pub fn filled(len: usize, extent: f64) -> Self {
        Self::from_values(alloc::vec![extent; len])
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        let n = values.len();
        let mut tree = alloc::vec![0.0f64; n + 1];
        let mut total = 0.0f64;
        for i in 1..=n {
            let v = values[i - 1];
            total += v;
            tree[i] += v;
            let j = i + lsb(i);
            if j <= n {
                tree[j] += tree[i];
            }
        }
        Self {
            values,
            tree,
            total,
            max_bit: highest_power_of_two_leq(n),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Replaces the extent at `index`. Out-of-range indexes are ignored.
    pub fn set(&mut self, index: usize, value: f64) {
        let n = self.len();
        if index >= n {
            return;
        }
        let delta = value - self.values[index];
        if delta == 0.0 {
            return;
        }
        self.values[index] = value;
        self.total += delta;
        let mut i = index + 1;
        while i <= n {
            self.tree[i] += delta;
            i += lsb(i);
        }
    }

    /// Sum of the first `count` extents (the offset at which item `count` starts).
    pub fn prefix(&self, count: usize) -> f64 {
        let mut i = cmp::min(count, self.len());
        let mut sum = 0.0f64;
        while i > 0 {
            sum += self.tree[i];
            i &= i - 1;
        }
        sum
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Returns the number of leading items whose summed extent is `<= target`.
    ///
    /// For `target` inside the list this is the index of the item that owns `target`; an offset
    /// that lands exactly on an item boundary belongs to the item starting there.
    pub fn lower_bound(&self, mut target: f64) -> usize {
        let n = self.len();
        let mut idx = 0usize;
        let mut bit = self.max_bit;
        while bit != 0 {
            let next = idx + bit;
            if next <= n && self.tree[next] <= target {
                target -= self.tree[next];
                idx = next;
            }
            bit >>= 1;
        }
        idx
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut p = 1usize;
    while p <= n / 2 {
        p <<= 1;
    }
    p
}
