//! Theme selection.

use super::adaptive::AdaptiveTheme;
use super::theme::Theme;

/// Reference to either a static theme or an adaptive theme.
///
/// Lets style builders accept either a fixed theme or an adaptive theme that
/// responds to the system color mode.
#[derive(Debug, Clone, Copy)]
pub enum ThemeChoice<'a> {
    /// A fixed theme that doesn't change based on color mode.
    Theme(&'a Theme),
    /// An adaptive theme that selects light/dark based on OS settings.
    Adaptive(&'a AdaptiveTheme),
}

impl<'a> ThemeChoice<'a> {
    /// Resolves to a concrete theme.
    ///
    /// For adaptive themes, detects the current color mode and returns the
    /// matching variant.
    pub fn resolve(&self) -> &'a Theme {
        match *self {
            ThemeChoice::Theme(theme) => theme,
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
