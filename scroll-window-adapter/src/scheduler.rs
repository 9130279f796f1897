use alloc::vec::Vec;

/// The host's "run this before the next repaint" primitive (e.g. `requestAnimationFrame`).
///
/// A scheduler hands out a handle per request. The host later reports a handle back to the
/// component that requested it (for [`crate::Controller`], via `on_frame`) once the frame fires.
pub trait FrameScheduler {
    type Handle: Copy + Eq + core::fmt::Debug;

    fn request_frame(&mut self) -> Self::Handle;

    /// Cancels a pending request. Cancelling a handle that already fired is a no-op.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Handle issued by [`ManualFrames`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHandle(u64);

/// A deterministic, headless scheduler.
///
/// Requests queue up until the host drains them with [`ManualFrames::take_due`], which makes it
/// suitable for TUIs, tests, and any loop that owns its own frame clock.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    next: u64,
    due: Vec<FrameHandle>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.due.len()
    }

    /// Drains the requests due this frame, in request order.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        core::mem::take(&mut self.due)
    }
}

impl FrameScheduler for ManualFrames {
    type Handle = FrameHandle;

    fn request_frame(&mut self) -> FrameHandle {
        self.next = self.next.wrapping_add(1);
        let handle = FrameHandle(self.next);
        self.due.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.due.retain(|&h| h != handle);
    }
}
