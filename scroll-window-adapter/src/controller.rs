use scroll_window::{
    LedgerKey, Result, SampleOutcome, WindowLayout, WindowOptions, WindowState, current_window,
};

use crate::{FrameScheduler, ManualFrames, ScrollSampler};

/// A framework-neutral controller that wires a [`ScrollSampler`], a [`FrameScheduler`] and a
/// `scroll_window::WindowState` together.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_raw_scroll` / `on_native_scroll` for every native scroll event
/// - `on_frame(handle)` when a requested frame fires (or `tick()` with [`ManualFrames`])
/// - `report` / `unreport` when items finish layout or unmount
#[derive(Clone, Debug)]
pub struct Controller<K, S: FrameScheduler> {
    window: WindowState<K>,
    sampler: ScrollSampler<S::Handle>,
    scheduler: S,
}

impl<K: LedgerKey, S: FrameScheduler> Controller<K, S> {
    pub fn new(options: WindowOptions<K>, scheduler: S) -> Result<Self> {
        Ok(Self::from_window(WindowState::new(options)?, scheduler))
    }

    pub fn from_window(window: WindowState<K>, scheduler: S) -> Self {
        Self {
            window,
            sampler: ScrollSampler::new(),
            scheduler,
        }
    }

    pub fn window(&self) -> &WindowState<K> {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut WindowState<K> {
        &mut self.window
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn into_parts(self) -> (WindowState<K>, S) {
        (self.window, self.scheduler)
    }

    /// Whether a sample is waiting for the next frame.
    pub fn is_pending(&self) -> bool {
        self.sampler.is_pending()
    }

    /// Call this for every scroll event along the configured axis.
    pub fn on_raw_scroll(&mut self, offset: f64) {
        self.sampler.on_raw_scroll(offset, &mut self.scheduler);
    }

    /// Call this with both native scroll offsets; the configured axis picks one.
    pub fn on_native_scroll(&mut self, vertical: f64, horizontal: f64) {
        let offset = self.window.options().axis.select(vertical, horizontal);
        self.on_raw_scroll(offset);
    }

    /// Runs the frame callback for `handle`.
    ///
    /// Returns `None` for stale handles; otherwise the outcome of sampling the newest offset.
    pub fn on_frame(&mut self, handle: S::Handle) -> Option<SampleOutcome> {
        let offset = self.sampler.on_frame(handle)?;
        Some(self.window.on_sample(offset))
    }

    /// Cancels the pending frame, if any. Call this on viewport teardown.
    pub fn cancel_pending(&mut self) {
        if self.sampler.is_pending() {
            vdebug!("cancel_pending");
        }
        self.sampler.cancel(&mut self.scheduler);
    }

    pub fn on_viewport_extent(&mut self, viewport_extent: f64) -> Result<()> {
        self.window.set_viewport_extent(viewport_extent)
    }

    pub fn set_count(&mut self, count: usize) {
        self.window.set_count(count);
    }

    pub fn report(&mut self, id: K, extent: f64) -> Result<()> {
        self.window.report(id, extent)
    }

    pub fn unreport(&mut self, id: &K) -> Option<f64> {
        self.window.unreport(id)
    }

    /// The slice of `collection` to render right now.
    pub fn current_window<'a, T>(&self, collection: &'a [T]) -> &'a [T] {
        current_window(collection, self.window.range())
    }

    pub fn style_offset(&self) -> f64 {
        self.window.style_offset()
    }

    pub fn layout(&self) -> WindowLayout {
        self.window.layout()
    }
}

impl<K: LedgerKey> Controller<K, ManualFrames> {
    /// Fires every due frame of the built-in scheduler.
    ///
    /// Returns the outcome of the last frame that sampled, or `None` when nothing was pending.
    pub fn tick(&mut self) -> Option<SampleOutcome> {
        let mut last = None;
        for handle in self.scheduler.take_due() {
            if let Some(outcome) = self.on_frame(handle) {
                last = Some(outcome);
            }
        }
        last
    }
}
