//! Accessibility helpers.

use once_cell::sync::Lazy;

use crate::style::StyleFragment;
use crate::theme::Theme;

/// Removes an element from visual layout while keeping it available to
/// assistive technology.
pub static VISUALLY_HIDDEN: Lazy<StyleFragment> = Lazy::new(|| {
    StyleFragment::new()
        .push("position", "absolute")
        .push("width", "1px")
        .push("height", "1px")
        .push("padding", "0")
        .push("margin", "-1px")
        .push("overflow", "hidden")
        .push("clip", "rect(0, 0, 0, 0)")
        .push("white-space", "nowrap")
        .push("border", "0")
});

/// Replaces the browser outline with a ring in the primary color on
/// keyboard focus.
pub fn focus_ring(theme: &Theme) -> StyleFragment {
    StyleFragment::new().block(
        "&:focus-visible",
        StyleFragment::new()
            .push("outline", "none")
            .push(
                "box-shadow",
                format!("0 0 0 2px {}", theme.palette().primary.main),
            )
            .push("border-radius", theme.shape().border_radius.to_string()),
    )
}
