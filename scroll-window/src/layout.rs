use crate::resolver::ExtentSource;
use crate::{Regime, ScrollDirection, WindowRange};

/// A serializable snapshot of everything a rendering layer needs for one frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowLayout {
    pub range: WindowRange,
    pub offset: f64,
    pub direction: ScrollDirection,
    /// Translation to apply to the container of the rendered items.
    pub container_offset: f64,
    /// Extent of the whole (mostly unrendered) content, used to size the scroll area.
    pub content_extent: f64,
    pub viewport_extent: f64,
}

/// Offset at which item `start` begins, i.e. how far the rendered window's container must be
/// translated so that `start` lines up with its place in the full list.
///
/// Past the known prefix of `extents`, items count as `item_extent`.
pub fn compute_style_offset<S: ExtentSource + ?Sized>(
    start: usize,
    regime: Regime,
    item_extent: f64,
    extents: &S,
) -> f64 {
    match regime {
        Regime::Uniform => start as f64 * item_extent,
        Regime::Heterogeneous => {
            let known = extents.known_len();
            if start <= known {
                extents.offset_of(start)
            } else {
                extents.offset_of(known) + (start - known) as f64 * item_extent
            }
        }
    }
}

/// The items to render this frame. Out-of-range bounds are clamped.
pub fn current_window<T>(collection: &[T], range: WindowRange) -> &[T] {
    let end = range.end.min(collection.len());
    let start = range.start.min(end);
    &collection[start..end]
}
