#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Bounds required of item identities.
///
/// With `std` the ledger hashes keys; without it keys are ordered in a `BTreeMap`.
#[cfg(feature = "std")]
pub trait LedgerKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> LedgerKey for K {}

#[cfg(not(feature = "std"))]
pub trait LedgerKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> LedgerKey for K {}
