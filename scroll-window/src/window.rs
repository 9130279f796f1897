use alloc::vec::Vec;

use crate::error::Result;
use crate::fenwick::ExtentSums;
use crate::key::{KeyMap, LedgerKey};
use crate::layout::{WindowLayout, compute_style_offset};
use crate::ledger::SizeLedger;
use crate::options::{WindowOptions, check_viewport};
use crate::resolver::{resolve_end, resolve_start_in};
use crate::{ItemKey, Regime, SampleOutcome, ScrollDirection, WindowRange};

/// The windowing engine for one mounted viewport.
///
/// It holds the last scroll offset and direction plus the committed `[start, end)` range, and
/// owns the [`SizeLedger`] that collaborators feed through [`Self::report`] / [`Self::unreport`].
/// It holds no UI objects: a host drives it with scroll samples (usually through a frame-coalescing
/// sampler) and reads the range back when rendering.
///
/// Invariants after every call: `0 <= start <= end <= count` and
/// `end - start >= min(count, buffer)`.
#[derive(Clone, Debug)]
pub struct WindowState<K = ItemKey> {
    options: WindowOptions<K>,
    offset: f64,
    direction: ScrollDirection,
    range: WindowRange,
    ledger: SizeLedger<K>,

    // Heterogeneous regime only: per-index extents (ledger value or average).
    sums: ExtentSums,
    // Ledger identities that currently own a slot in `sums`.
    slots: KeyMap<K, usize>,
}

impl<K: LedgerKey> WindowState<K> {
    /// Creates the engine, failing fast on a non-positive item or viewport extent.
    pub fn new(options: WindowOptions<K>) -> Result<Self> {
        options.validate()?;
        vdebug!(
            count = options.count,
            buffer = options.buffer,
            item_extent = options.item_extent,
            viewport_extent = options.viewport_extent,
            "WindowState::new"
        );
        let mut w = Self {
            options,
            offset: 0.0,
            direction: ScrollDirection::Forward,
            range: WindowRange::default(),
            ledger: SizeLedger::new(),
            sums: ExtentSums::default(),
            slots: KeyMap::default(),
        };
        w.rebuild_sums();
        w.recompute();
        Ok(w)
    }

    pub fn options(&self) -> &WindowOptions<K> {
        &self.options
    }

    /// Replaces the configuration and recomputes everything from the current offset.
    ///
    /// Invalid options are rejected and the current state is kept.
    pub fn set_options(&mut self, options: WindowOptions<K>) -> Result<()> {
        options.validate()?;
        self.options = options;
        vdebug!(count = self.options.count, "WindowState::set_options");
        self.rebuild_sums();
        self.recompute();
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn range(&self) -> WindowRange {
        self.range
    }

    pub fn ledger(&self) -> &SizeLedger<K> {
        &self.ledger
    }

    /// Feeds one scroll sample.
    ///
    /// Scrolling inside the buffered band `[start, start + buffer)` never moves the window.
    /// Leaving it in either direction re-anchors the window `buffer` items before the item at
    /// the new offset. Offset and direction are recorded even when the window holds still.
    ///
    /// Non-finite samples are dropped; negative ones clamp to `0`.
    pub fn on_sample(&mut self, raw_offset: f64) -> SampleOutcome {
        if !raw_offset.is_finite() {
            vwarn!(raw_offset, "on_sample: ignoring non-finite scroll offset");
            return SampleOutcome::Ignored;
        }
        let offset = raw_offset.max(0.0);
        let direction = if offset < self.offset {
            ScrollDirection::Backward
        } else {
            ScrollDirection::Forward
        };

        let resolved = self.resolve(offset);
        let start = self.range.start;
        let commit = match direction {
            ScrollDirection::Backward => resolved < start,
            ScrollDirection::Forward => resolved >= start.saturating_add(self.options.buffer),
        };
        vtrace!(offset, resolved, commit, direction = ?direction, "on_sample");

        let from = self.range;
        if commit {
            self.range = self.settle(self.anchor_at(resolved));
        }
        self.offset = offset;
        self.direction = direction;

        if self.range == from {
            return SampleOutcome::Held;
        }
        vdebug!(
            from_start = from.start,
            from_end = from.end,
            start = self.range.start,
            end = self.range.end,
            "window moved"
        );
        self.place_rendered();
        SampleOutcome::Moved { from }
    }

    /// Replaces the collection length (append/replace) and recomputes from the current offset.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.rebuild_sums();
        self.recompute();
    }

    /// Updates the visible extent after a resize. The window keeps its start.
    pub fn set_viewport_extent(&mut self, viewport_extent: f64) -> Result<()> {
        check_viewport(viewport_extent)?;
        self.options.viewport_extent = viewport_extent;
        let start = self.range.start;
        self.range = self.settle(WindowRange::new(start, self.window_end(start)));
        self.place_rendered();
        Ok(())
    }

    /// Records the measured extent of an item, locating it among the rendered indexes.
    ///
    /// A rejected measurement keeps the previous ledger entry. Measurements never move the
    /// window by themselves; the next sample picks them up.
    pub fn report(&mut self, id: K, extent: f64) -> Result<()> {
        let index = self
            .slots
            .get(&id)
            .copied()
            .or_else(|| self.rendered_index_of(&id));
        self.record(index, id, extent)
    }

    /// Same as [`Self::report`], for callers that already know the item's index.
    pub fn report_at(&mut self, index: usize, id: K, extent: f64) -> Result<()> {
        let index = (index < self.options.count).then_some(index);
        self.record(index, id, extent)
    }

    /// Forgets the measurement of an unmounted item. Unknown identities are ignored.
    pub fn unreport(&mut self, id: &K) -> Option<f64> {
        let removed = self.ledger.delete(id);
        if let Some(index) = self.slots.remove(id) {
            self.sums.set(index, self.options.item_extent);
        }
        vtrace!(removed = removed.is_some(), "unreport");
        removed
    }

    pub fn reset_measurements(&mut self) {
        self.ledger.clear();
        self.rebuild_sums();
    }

    /// Exports the ledger (useful for persistence).
    pub fn export_measurements(&self) -> Vec<(K, f64)> {
        self.ledger.export()
    }

    /// Replaces the ledger from previously exported entries.
    pub fn import_measurements(
        &mut self,
        entries: impl IntoIterator<Item = (K, f64)>,
    ) -> Result<usize> {
        let n = self.ledger.import(entries)?;
        vdebug!(entries = n, "import_measurements");
        self.rebuild_sums();
        Ok(n)
    }

    pub fn key_for(&self, index: usize) -> K {
        self.options.key_for(index)
    }

    /// Extent used for `index`: the fixed extent, or the measured/average one.
    pub fn item_extent(&self, index: usize) -> Option<f64> {
        if index >= self.options.count {
            return None;
        }
        match self.options.regime {
            Regime::Uniform => Some(self.options.item_extent),
            Regime::Heterogeneous => self.sums.get(index),
        }
    }

    /// Extents of the rendered items in rendering order.
    pub fn rendered_extents(&self) -> Vec<f64> {
        match self.options.regime {
            Regime::Uniform => alloc::vec![self.options.item_extent; self.range.len()],
            Regime::Heterogeneous => self.ledger.ordered_extents(
                (self.range.start..self.range.end).map(|i| self.key_for(i)),
                self.options.item_extent,
            ),
        }
    }

    /// Container offset that puts item `start` at its place in the full list.
    pub fn style_offset(&self) -> f64 {
        compute_style_offset(
            self.range.start,
            self.options.regime,
            self.options.item_extent,
            &self.sums,
        )
    }

    /// Extent of the whole collection along the scroll axis.
    pub fn content_extent(&self) -> f64 {
        match self.options.regime {
            Regime::Uniform => self.options.count as f64 * self.options.item_extent,
            Regime::Heterogeneous => self.sums.total(),
        }
    }

    pub fn layout(&self) -> WindowLayout {
        WindowLayout {
            range: self.range,
            offset: self.offset,
            direction: self.direction,
            container_offset: self.style_offset(),
            content_extent: self.content_extent(),
            viewport_extent: self.options.viewport_extent,
        }
    }

    fn resolve(&self, offset: f64) -> usize {
        resolve_start_in(
            offset,
            self.options.regime,
            self.options.count,
            self.options.item_extent,
            &self.sums,
        )
    }

    fn window_end(&self, start: usize) -> usize {
        resolve_end(
            start,
            self.options.viewport_extent,
            self.options.count,
            self.options.item_extent,
            self.options.buffer,
        )
    }

    // Window for a resolved start index, with the backward safety margin applied.
    fn anchor_at(&self, resolved: usize) -> WindowRange {
        let start = resolved.saturating_sub(self.options.buffer);
        WindowRange::new(start, self.window_end(start))
    }

    fn settle(&self, range: WindowRange) -> WindowRange {
        let count = self.options.count;
        let buffer = self.options.buffer;
        if count <= buffer {
            return WindowRange::new(0, count);
        }
        if range.len() < buffer {
            return WindowRange::new(range.end.saturating_sub(buffer), range.end);
        }
        range
    }

    fn recompute(&mut self) {
        let resolved = self.resolve(self.offset);
        self.range = self.settle(self.anchor_at(resolved));
        vdebug!(
            start = self.range.start,
            end = self.range.end,
            "recompute"
        );
        self.place_rendered();
    }

    fn record(&mut self, index: Option<usize>, id: K, extent: f64) -> Result<()> {
        if let Err(err) = self.ledger.set(id.clone(), extent) {
            vwarn!(extent, "report: rejected measurement");
            return Err(err);
        }
        vtrace!(index = ?index, extent, "report");
        if self.options.regime != Regime::Heterogeneous {
            return Ok(());
        }
        if let Some(index) = index {
            if let Some(prev) = self.slots.insert(id, index) {
                if prev != index {
                    self.sums.set(prev, self.options.item_extent);
                }
            }
            self.sums.set(index, extent);
        }
        Ok(())
    }

    fn rendered_index_of(&self, id: &K) -> Option<usize> {
        (self.range.start..self.range.end).find(|&i| self.key_for(i) == *id)
    }

    // Gives ledger entries that were reported before their item was locatable a slot once the
    // item is rendered.
    fn place_rendered(&mut self) {
        if self.options.regime != Regime::Heterogeneous || self.ledger.is_empty() {
            return;
        }
        for i in self.range.start..self.range.end {
            let key = self.key_for(i);
            if self.slots.contains_key(&key) {
                continue;
            }
            if let Some(extent) = self.ledger.get(&key) {
                self.sums.set(i, extent);
                self.slots.insert(key, i);
            }
        }
    }

    fn rebuild_sums(&mut self) {
        self.slots.clear();
        let count = self.options.count;
        let avg = self.options.item_extent;
        if self.options.regime != Regime::Heterogeneous {
            self.sums = ExtentSums::default();
            return;
        }
        if self.ledger.is_empty() {
            self.sums = ExtentSums::filled(count, avg);
            return;
        }
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            let key = self.key_for(i);
            match self.ledger.get(&key) {
                Some(extent) => {
                    values.push(extent);
                    self.slots.insert(key, i);
                }
                None => values.push(avg),
            }
        }
        vdebug!(count, measured = self.slots.len(), "rebuild_sums");
        self.sums = ExtentSums::from_values(values);
    }
}
