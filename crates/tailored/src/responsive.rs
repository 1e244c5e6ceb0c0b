//! Breakpoint and container-query helpers.

use crate::style::StyleFragment;
use crate::theme::{Breakpoint, Theme};

/// Hides the element on screens narrower than the `sm` breakpoint.
pub fn hide_on_mobile(theme: &Theme) -> StyleFragment {
    StyleFragment::new().block(
        theme.breakpoints().down(Breakpoint::Sm),
        StyleFragment::new().push("display", "none"),
    )
}

/// Shows the element only on screens narrower than the `sm` breakpoint.
pub fn show_on_mobile(theme: &Theme) -> StyleFragment {
    StyleFragment::new().push("display", "none").block(
        theme.breakpoints().down(Breakpoint::Sm),
        StyleFragment::new().push("display", "block"),
    )
}

/// Applies `styles` when the query container is at least `min_width_px` wide.
///
/// # Example
///
/// ```rust
/// use tailored::responsive::container_query;
/// use tailored::StyleFragment;
///
/// let wide = StyleFragment::new().declare("flex-direction", "row").unwrap();
/// let fragment = container_query(480, wide);
/// assert_eq!(
///     fragment.to_string(),
///     "@container (min-width: 480px) {\n  flex-direction: row;\n}\n"
/// );
/// ```
pub fn container_query(min_width_px: u32, styles: StyleFragment) -> StyleFragment {
    StyleFragment::new().block(format!("@container (min-width: {}px)", min_width_px), styles)
}

/// Applies `styles` from `breakpoint` upwards.
pub fn media_up(breakpoint: Breakpoint, theme: &Theme, styles: StyleFragment) -> StyleFragment {
    StyleFragment::new().block(theme.breakpoints().up(breakpoint), styles)
}

/// Applies `styles` below `breakpoint`.
pub fn media_down(breakpoint: Breakpoint, theme: &Theme, styles: StyleFragment) -> StyleFragment {
    StyleFragment::new().block(theme.breakpoints().down(breakpoint), styles)
}

/// Applies `styles` only within the range of `breakpoint`.
pub fn media_only(breakpoint: Breakpoint, theme: &Theme, styles: StyleFragment) -> StyleFragment {
    StyleFragment::new().block(theme.breakpoints().only(breakpoint), styles)
}
