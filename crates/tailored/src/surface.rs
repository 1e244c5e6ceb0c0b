//! Shadow and border helpers.

use crate::style::StyleFragment;
use crate::theme::{Elevation, Theme};

/// Applies the theme's shadow preset for `level`, unmodified.
///
/// # Example
///
/// ```rust
/// use tailored::surface::elevation;
/// use tailored::theme::Elevation;
/// use tailored::Theme;
///
/// let theme = Theme::light();
/// let raised = elevation(Elevation::Medium, &theme);
/// assert_eq!(raised.get("box-shadow"), Some(theme.shadows().get(Elevation::Medium)));
/// ```
pub fn elevation(level: Elevation, theme: &Theme) -> StyleFragment {
    StyleFragment::new().push("box-shadow", theme.shadows().get(level).to_string())
}

pub fn rounded_corners(theme: &Theme) -> StyleFragment {
    StyleFragment::new().push("border-radius", theme.shape().border_radius.to_string())
}
