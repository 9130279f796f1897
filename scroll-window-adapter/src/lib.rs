//! Frame-coalesced scroll sampling for the `scroll-window` crate.
//!
//! `scroll-window` is UI-agnostic: it turns scroll samples into a window range. This crate sits
//! between a host's native scroll events and that engine:
//!
//! - [`ScrollSampler`]: at most one sample per frame, newest offset wins
//! - [`FrameScheduler`]: the host's frame primitive, with [`ManualFrames`] for headless loops
//! - [`Controller`]: the sampler, a scheduler and a `WindowState` wired together
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod sampler;
mod scheduler;


pub use controller::Controller;
pub use sampler::ScrollSampler;
pub use scheduler::{FrameHandle, FrameScheduler, ManualFrames};
