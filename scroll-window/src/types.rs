/// How item extents along the scroll axis are known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    /// Every item has the configured extent.
    #[default]
    Uniform,
    /// Items are measured after layout; unmeasured items count as the configured average.
    Heterogeneous,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

/// Which native scroll fields a collaborator reads.
///
/// `Primary` is the vertical axis (top offset / height), `Secondary` the horizontal one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxis {
    #[default]
    Primary,
    Secondary,
}

impl ScrollAxis {
    /// Picks the value belonging to this axis from a `(vertical, horizontal)` pair.
    pub fn select<T>(self, vertical: T, horizontal: T) -> T {
        match self {
            Self::Primary => vertical,
            Self::Secondary => horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl WindowRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Result of feeding one scroll sample into a [`crate::WindowState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleOutcome {
    /// The sample was malformed (non-finite) and dropped; nothing changed.
    Ignored,
    /// Offset/direction were updated but the window stayed where it was.
    Held,
    /// The window moved. `from` is the range before the sample.
    Moved { from: WindowRange },
}

impl SampleOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

pub type ItemKey = u64;
