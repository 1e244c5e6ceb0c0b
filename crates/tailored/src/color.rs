//! Color-scheme helpers.

use crate::style::StyleFragment;
use crate::theme::{AdaptiveTheme, Theme};

const DARK_SCHEME: &str = "@media (prefers-color-scheme: dark)";
const OLED_SCHEME: &str = "@media (prefers-color-scheme: dark) and (color-gamut: p3)";

fn surface_colors(theme: &Theme) -> StyleFragment {
    let palette = theme.palette();
    StyleFragment::new()
        .push("background-color", palette.background.default.to_string())
        .push("color", palette.text.primary.to_string())
}

/// Applies the theme's background and text colors when the system prefers
/// a dark color scheme.
pub fn dark_mode(theme: &Theme) -> StyleFragment {
    StyleFragment::new().block(DARK_SCHEME, surface_colors(theme))
}

/// Like [`dark_mode`], but on wide-gamut displays and with a pure black
/// background so OLED pixels switch off.
pub fn oled_dark_mode(theme: &Theme) -> StyleFragment {
    StyleFragment::new().block(
        OLED_SCHEME,
        StyleFragment::new()
            .push("background-color", "#000000")
            .push("color", theme.palette().text.primary.to_string()),
    )
}

/// Light colors by default, dark variant colors when the system prefers a
/// dark color scheme.
///
/// Unlike [`AdaptiveTheme::resolve`], the choice is left to the browser.
pub fn adaptive_colors(adaptive: &AdaptiveTheme) -> StyleFragment {
    surface_colors(adaptive.light()).merge(dark_mode(adaptive.dark()))
}
