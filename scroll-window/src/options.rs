use alloc::sync::Arc;

use crate::error::{ConfigError, Result};
use crate::{ItemKey, Regime, ScrollAxis};

/// Overscan used when none is configured.
pub const DEFAULT_BUFFER: usize = 10;

/// Configuration for [`crate::WindowState`].
///
/// Cheap to clone: the key mapping lives behind an `Arc`.
pub struct WindowOptions<K = ItemKey> {
    /// Collection length.
    pub count: usize,
    pub regime: Regime,
    /// The fixed extent (`Uniform`) or the average used for unmeasured items (`Heterogeneous`).
    ///
    /// The closer this is to the real average, the closer heterogeneous lookups get to exact.
    pub item_extent: f64,
    /// Items kept beyond the visible range in each direction.
    pub buffer: usize,
    /// Visible extent of the viewport along the scroll axis.
    pub viewport_extent: f64,
    pub axis: ScrollAxis,
    /// Maps an index to the identity used as the size ledger key.
    pub item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,
}

impl<K> Clone for WindowOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            regime: self.regime,
            item_extent: self.item_extent,
            buffer: self.buffer,
            viewport_extent: self.viewport_extent,
            axis: self.axis,
            item_key: Arc::clone(&self.item_key),
        }
    }
}

impl WindowOptions<ItemKey> {
    /// Creates options for a list keyed by index (`ItemKey = u64`).
    pub fn new(count: usize, regime: Regime, item_extent: f64, viewport_extent: f64) -> Self {
        Self::new_with_key(count, regime, item_extent, viewport_extent, |i| i as u64)
    }

    pub fn uniform(count: usize, item_extent: f64, viewport_extent: f64) -> Self {
        Self::new(count, Regime::Uniform, item_extent, viewport_extent)
    }

    pub fn heterogeneous(count: usize, average_extent: f64, viewport_extent: f64) -> Self {
        Self::new(count, Regime::Heterogeneous, average_extent, viewport_extent)
    }
}

impl<K> WindowOptions<K> {
    /// Creates options with a custom identity mapping.
    ///
    /// `item_key(i)` should return a stable identity for the item rendered at index `i`; the same
    /// identity is what collaborators pass to `report`/`unreport`.
    pub fn new_with_key(
        count: usize,
        regime: Regime,
        item_extent: f64,
        viewport_extent: f64,
        item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            regime,
            item_extent,
            buffer: DEFAULT_BUFFER,
            viewport_extent,
            axis: ScrollAxis::default(),
            item_key: Arc::new(item_key),
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_regime(mut self, regime: Regime, item_extent: f64) -> Self {
        self.regime = regime;
        self.item_extent = item_extent;
        self
    }

    pub fn with_viewport_extent(mut self, viewport_extent: f64) -> Self {
        self.viewport_extent = viewport_extent;
        self
    }

    pub fn with_item_key<K2>(
        self,
        item_key: impl Fn(usize) -> K2 + Send + Sync + 'static,
    ) -> WindowOptions<K2> {
        WindowOptions {
            count: self.count,
            regime: self.regime,
            item_extent: self.item_extent,
            buffer: self.buffer,
            viewport_extent: self.viewport_extent,
            axis: self.axis,
            item_key: Arc::new(item_key),
        }
    }

    /// Rejects extents that are zero, negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.item_extent.is_finite() && self.item_extent > 0.0) {
            return Err(ConfigError::NonPositiveExtent(self.item_extent).into());
        }
        check_viewport(self.viewport_extent)
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.item_key)(index)
    }
}

pub(crate) fn check_viewport(viewport_extent: f64) -> Result<()> {
    if viewport_extent.is_finite() && viewport_extent > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveViewport(viewport_extent).into())
    }
}

impl<K> core::fmt::Debug for WindowOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("regime", &self.regime)
            .field("item_extent", &self.item_extent)
            .field("buffer", &self.buffer)
            .field("viewport_extent", &self.viewport_extent)
            .field("axis", &self.axis)
            .finish_non_exhaustive()
    }
}
