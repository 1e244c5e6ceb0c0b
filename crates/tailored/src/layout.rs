//! Flexbox, grid, positioning and replaced-content helpers.

use std::num::NonZeroU32;

use once_cell::sync::Lazy;

use crate::style::StyleFragment;
use crate::theme::Theme;

/// Centers children on both axes.
pub static FLEX_CENTER: Lazy<StyleFragment> = Lazy::new(|| {
    StyleFragment::new()
        .push("display", "flex")
        .push("align-items", "center")
        .push("justify-content", "center")
});

/// Vertically centered row with children pushed to both ends.
pub static FLEX_BETWEEN: Lazy<StyleFragment> = Lazy::new(|| {
    StyleFragment::new()
        .push("display", "flex")
        .push("align-items", "center")
        .push("justify-content", "space-between")
});

/// Stacks children vertically.
pub static FLEX_COLUMN: Lazy<StyleFragment> = Lazy::new(|| {
    StyleFragment::new()
        .push("display", "flex")
        .push("flex-direction", "column")
});

/// Covers the nearest positioned ancestor.
pub static ABSOLUTE_FILL: Lazy<StyleFragment> = Lazy::new(|| fill("absolute"));

/// Covers the viewport.
pub static FIXED_FILL: Lazy<StyleFragment> = Lazy::new(|| fill("fixed"));

fn fill(position: &'static str) -> StyleFragment {
    StyleFragment::new()
        .push("position", position)
        .push("top", "0")
        .push("right", "0")
        .push("bottom", "0")
        .push("left", "0")
}

/// A grid of `columns` equal-width columns, `gap` spacing units apart.
///
/// # Example
///
/// ```rust
/// use std::num::NonZeroU32;
/// use tailored::{layout, Theme};
///
/// let columns = NonZeroU32::new(3).unwrap();
/// let grid = layout::grid(columns, 2.0, &Theme::light());
/// assert_eq!(grid.get("grid-template-columns"), Some("repeat(3, 1fr)"));
/// assert_eq!(grid.get("gap"), Some("16px"));
/// ```
pub fn grid(columns: NonZeroU32, gap: f64, theme: &Theme) -> StyleFragment {
    StyleFragment::new()
        .push("display", "grid")
        .push("grid-template-columns", format!("repeat({}, 1fr)", columns))
        .push("gap", theme.spacing(gap).to_string())
}

/// Spans `span` grid columns.
pub fn grid_column(span: NonZeroU32) -> StyleFragment {
    StyleFragment::new().push("grid-column", format!("span {}", span))
}

/// Fixes the box to `width / height` and crops replaced content to fill it.
pub fn aspect_ratio(width: NonZeroU32, height: NonZeroU32) -> StyleFragment {
    StyleFragment::new()
        .push("aspect-ratio", format!("{} / {}", width, height))
        .push("object-fit", "cover")
}
