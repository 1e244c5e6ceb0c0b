//! Adaptive themes that respond to system color mode.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// A theme that adapts based on the user's display mode.
///
/// Contains separate themes for light and dark modes. [`resolve`](Self::resolve)
/// picks one based on OS settings, for code that builds styles once at
/// startup; [`adaptive_colors`](crate::color::adaptive_colors) emits both and
/// lets the browser choose.
///
/// # Example
///
/// ```rust
/// use tailored::{AdaptiveTheme, ColorMode, Theme};
///
/// let adaptive = AdaptiveTheme::new(Theme::light(), Theme::dark());
/// assert_eq!(adaptive.variant(ColorMode::Dark).palette().mode, ColorMode::Dark);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    pub fn light(&self) -> &Theme {
        &self.light
    }

    pub fn dark(&self) -> &Theme {
        &self.dark
    }

    /// The variant for an explicit color mode.
    pub fn variant(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Resolves to the appropriate theme based on the current color mode.
    pub fn resolve(&self) -> &Theme {
        self.variant(detect_color_mode())
    }
}

impl Default for AdaptiveTheme {
    fn default() -> Self {
        Self::new(Theme::light(), Theme::dark())
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores OS-based color mode detection.
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = *THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let mode = detector();
    debug!("resolved color mode: {:?}", mode);
    mode
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_adaptive_theme_uses_detector() {
        let adaptive = AdaptiveTheme::default();

        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(adaptive.resolve().palette().mode, ColorMode::Dark);

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve().palette().mode, ColorMode::Light);

        // Reset to default for other tests
        set_theme_detector(|| ColorMode::Light);
    }

    #[test]
    fn test_variant_is_explicit() {
        let light = Theme::light();
        let dark = Theme::dark();
        let adaptive = AdaptiveTheme::new(light.clone(), dark.clone());
        assert_eq!(adaptive.variant(ColorMode::Light), &light);
        assert_eq!(adaptive.variant(ColorMode::Dark), &dark);
    }

    #[test]
    fn test_color_mode_serde() {
        assert_eq!(serde_json::to_string(&ColorMode::Dark).unwrap(), "\"dark\"");
        let mode: ColorMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ColorMode::Light);
    }
}
