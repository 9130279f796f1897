use alloc::vec::Vec;
use core::borrow::Borrow;

use crate::error::{Result, check_extent};
use crate::key::{KeyMap, LedgerKey};

/// Last-measured extents of rendered items, keyed by item identity.
///
/// The ledger is sparse on purpose: entries appear when an item finishes layout and go away when
/// the item unmounts, so lookups must always fall back to an average for missing identities.
#[derive(Clone, Debug)]
pub struct SizeLedger<K> {
    sizes: KeyMap<K, f64>,
}

impl<K> Default for SizeLedger<K> {
    fn default() -> Self {
        Self {
            sizes: KeyMap::default(),
        }
    }
}

impl<K: LedgerKey> SizeLedger<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or overwrites) the measured extent of `id` and returns the previous one.
    ///
    /// Negative and non-finite extents are rejected without touching the ledger.
    pub fn set(&mut self, id: K, extent: f64) -> Result<Option<f64>> {
        let extent = check_extent(extent)?;
        Ok(self.sizes.insert(id, extent))
    }

    /// Removes `id`. Unknown identities are fine: items may unmount before being measured.
    pub fn delete(&mut self, id: &K) -> Option<f64> {
        self.sizes.remove(id)
    }

    pub fn get(&self, id: &K) -> Option<f64> {
        self.sizes.get(id).copied()
    }

    pub fn extent_or(&self, id: &K, fallback: f64) -> f64 {
        self.get(id).unwrap_or(fallback)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.sizes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn clear(&mut self) {
        self.sizes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.sizes.iter().map(|(k, v)| (k, *v))
    }

    /// Extents for `ids` in the given (rendering) order, with `fallback` for unmeasured ids.
    pub fn ordered_extents<I>(&self, ids: I, fallback: f64) -> Vec<f64>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        ids.into_iter()
            .map(|id| self.extent_or(id.borrow(), fallback))
            .collect()
    }

    /// Exports the entries as a `Vec` (useful for persistence).
    pub fn export(&self) -> Vec<(K, f64)> {
        self.iter().map(|(k, v)| (k.clone(), v)).collect()
    }

    /// Replaces the ledger with `entries`.
    ///
    /// The import is all-or-nothing: on the first invalid extent the ledger keeps its previous
    /// contents and the error is returned.
    pub fn import(&mut self, entries: impl IntoIterator<Item = (K, f64)>) -> Result<usize> {
        let mut next = KeyMap::default();
        for (k, v) in entries {
            next.insert(k, check_extent(v)?);
        }
        self.sizes = next;
        Ok(self.sizes.len())
    }
}
