//! A headless windowing engine for very long scrollable lists.
//!
//! Only a small slice of the collection is rendered at a time. This crate maps a scroll offset to
//! that slice (the "window"), keeps it stable while the user scrolls inside a lookahead buffer,
//! and re-anchors it when the user leaves the buffer in either direction.
//!
//! Two sizing regimes are supported:
//! - [`Regime::Uniform`]: every item has one configured extent; lookups are `O(1)`.
//! - [`Regime::Heterogeneous`]: items report their extent after layout into a [`SizeLedger`];
//!   unmeasured items count as a configured average and lookups are `O(log n)`.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport's visible extent
//! - scroll offsets (ideally coalesced to one per frame, see `scroll-window-adapter`)
//! - item measurements and unmount notifications (heterogeneous regime)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod fenwick;
mod key;
mod layout;
mod ledger;
mod options;
pub mod resolver;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, Error, Result};
pub use fenwick::ExtentSums;
pub use layout::{WindowLayout, compute_style_offset, current_window};
pub use ledger::SizeLedger;
pub use options::{DEFAULT_BUFFER, WindowOptions};
pub use resolver::{ExtentSource, resolve_end, resolve_start, resolve_start_in, window_length};
pub use types::{ItemKey, Regime, SampleOutcome, ScrollAxis, ScrollDirection, WindowRange};
pub use window::WindowState;

#[doc(hidden)]
pub use key::LedgerKey;
