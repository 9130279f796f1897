use crate::FrameScheduler;

/// Coalesces raw scroll events into at most one sample per frame.
///
/// Every raw event overwrites a single slot and replaces the pending frame request, so the
/// frame callback always forwards the newest offset and older ones are dropped, never queued.
#[derive(Clone, Debug)]
pub struct ScrollSampler<H> {
    pending: Option<H>,
    latest: f64,
}

impl<H> Default for ScrollSampler<H> {
    fn default() -> Self {
        Self {
            pending: None,
            latest: 0.0,
        }
    }
}

impl<H: Copy + Eq + core::fmt::Debug> ScrollSampler<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a raw scroll event and (re)schedules the frame callback.
    pub fn on_raw_scroll<S>(&mut self, offset: f64, scheduler: &mut S)
    where
        S: FrameScheduler<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        self.latest = offset;
        let handle = scheduler.request_frame();
        vtrace!(offset, handle = ?handle, "on_raw_scroll");
        self.pending = Some(handle);
    }

    /// Runs the frame callback for `handle`.
    ///
    /// Returns the offset to sample, or `None` when `handle` is not the pending request (a stale
    /// or foreign frame).
    pub fn on_frame(&mut self, handle: H) -> Option<f64> {
        if self.pending != Some(handle) {
            vtrace!(handle = ?handle, "on_frame: stale handle");
            return None;
        }
        self.pending = None;
        Some(self.latest)
    }

    /// Cancels the pending request, if any (e.g. on viewport teardown).
    pub fn cancel<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }
}
