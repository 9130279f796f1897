//! Offset → index translation for both sizing regimes.
//!
//! Everything here is a pure function of its arguments. [`crate::WindowState`] calls into it with
//! its [`ExtentSums`], but the functions work just as well on a plain slice of extents.

use alloc::vec::Vec;

use crate::Regime;
use crate::fenwick::ExtentSums;

/// An ordered sequence of item extents, starting at item `0`.
///
/// A source may know fewer items than the collection holds; the resolver treats the unknown tail
/// as items of the average extent. Extents are expected to be non-negative.
pub trait ExtentSource {
    /// Number of leading items with a known extent.
    fn known_len(&self) -> usize;

    /// Offset at which item `index` starts, for `index <= known_len()`.
    fn offset_of(&self, index: usize) -> f64;

    /// Greatest `i <= known_len()` with `offset_of(i) <= offset`.
    fn index_at(&self, offset: f64) -> usize;
}

impl ExtentSource for [f64] {
    fn known_len(&self) -> usize {
        self.len()
    }

    fn offset_of(&self, index: usize) -> f64 {
        self[..index.min(self.len())].iter().sum()
    }

    fn index_at(&self, offset: f64) -> usize {
        let mut prefix = Vec::with_capacity(self.len() + 1);
        let mut acc = 0.0f64;
        prefix.push(acc);
        for &extent in self {
            acc += extent;
            prefix.push(acc);
        }
        prefix.partition_point(|&p| p <= offset).saturating_sub(1)
    }
}

impl ExtentSource for ExtentSums {
    fn known_len(&self) -> usize {
        self.len()
    }

    fn offset_of(&self, index: usize) -> f64 {
        self.prefix(index)
    }

    fn index_at(&self, offset: f64) -> usize {
        self.lower_bound(offset)
    }
}

/// Maps a scroll offset to the index of the item that owns it.
///
/// - `offset <= 0` (or NaN) resolves to `0`.
/// - `Uniform` divides by `extent_or_avg`.
/// - `Heterogeneous` searches `ordered_extents` and interpolates with `extent_or_avg` past the
///   end of the known prefix.
/// - An offset at or past the total extent resolves to `item_count`, which callers treat as an
///   overscroll sentinel rather than a valid index.
///
/// An offset that falls exactly on an item boundary belongs to the item starting there.
pub fn resolve_start(
    offset: f64,
    regime: Regime,
    item_count: usize,
    extent_or_avg: f64,
    ordered_extents: &[f64],
) -> usize {
    resolve_start_in(offset, regime, item_count, extent_or_avg, ordered_extents)
}

/// Same as [`resolve_start`], for any [`ExtentSource`].
pub fn resolve_start_in<S: ExtentSource + ?Sized>(
    offset: f64,
    regime: Regime,
    item_count: usize,
    extent_or_avg: f64,
    extents: &S,
) -> usize {
    if !(offset > 0.0) {
        return 0;
    }
    match regime {
        Regime::Uniform => uniform_index(offset, extent_or_avg, item_count),
        Regime::Heterogeneous => {
            let known = extents.known_len().min(item_count);
            let known_total = extents.offset_of(known);
            if offset < known_total {
                return extents.index_at(offset).min(known.saturating_sub(1));
            }
            // Unmeasured tail: every item counts as the average extent.
            known + uniform_index(offset - known_total, extent_or_avg, item_count - known)
        }
    }
}

/// Number of items needed to cover the viewport, plus `buffer` on each side.
pub fn window_length(viewport_extent: f64, item_extent: f64, buffer: usize) -> usize {
    ceil_ratio(viewport_extent, item_extent).saturating_add(buffer.saturating_mul(2))
}

/// Exclusive end of a window starting at `start_index`.
pub fn resolve_end(
    start_index: usize,
    viewport_extent: f64,
    item_count: usize,
    item_extent: f64,
    buffer: usize,
) -> usize {
    start_index
        .saturating_add(window_length(viewport_extent, item_extent, buffer))
        .min(item_count)
}

fn uniform_index(offset: f64, extent: f64, count: usize) -> usize {
    if !(extent > 0.0) {
        // Zero-extent items occupy no space, so any positive offset is past the end.
        return count;
    }
    let q = offset / extent;
    if q >= count as f64 { count } else { q as usize }
}

fn ceil_ratio(num: f64, den: f64) -> usize {
    if !(num > 0.0) || !(den > 0.0) {
        return 0;
    }
    let q = num / den;
    let t = q as usize;
    if (t as f64) < q { t.saturating_add(1) } else { t }
}
