//! Color palette.

use serde::{Deserialize, Serialize};

use super::adaptive::ColorMode;
use crate::style::Color;

/// Shades of one palette role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

impl ColorSet {
    fn new(main: &str, light: &str, dark: &str, contrast_text: &str) -> Self {
        Self {
            main: Color::trusted(main),
            light: Color::trusted(light),
            dark: Color::trusted(dark),
            contrast_text: Color::trusted(contrast_text),
        }
    }
}

/// Surface colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub default: Color,
    pub paper: Color,
}

/// Foreground text colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub disabled: Color,
}

/// A palette role with a full [`ColorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRole {
    Primary,
    Secondary,
    Error,
    Warning,
    Info,
    Success,
}

/// The color palette of a theme.
///
/// Missing fields in a theme file are taken from [`Palette::light`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub mode: ColorMode,
    pub primary: ColorSet,
    pub secondary: ColorSet,
    pub error: ColorSet,
    pub warning: ColorSet,
    pub info: ColorSet,
    pub success: ColorSet,
    pub background: Background,
    pub text: TextColors,
    pub divider: Color,
}

impl Palette {
    /// The default light palette.
    pub fn light() -> Self {
        Self {
            mode: ColorMode::Light,
            primary: ColorSet::new("#1976d2", "#42a5f5", "#1565c0", "#fff"),
            secondary: ColorSet::new("#9c27b0", "#ba68c8", "#7b1fa2", "#fff"),
            error: ColorSet::new("#d32f2f", "#ef5350", "#c62828", "#fff"),
            warning: ColorSet::new("#ed6c02", "#ff9800", "#e65100", "#fff"),
            info: ColorSet::new("#0288d1", "#03a9f4", "#01579b", "#fff"),
            success: ColorSet::new("#2e7d32", "#4caf50", "#1b5e20", "#fff"),
            background: Background {
                default: Color::trusted("#fff"),
                paper: Color::trusted("#fff"),
            },
            text: TextColors {
                primary: Color::trusted("rgba(0, 0, 0, 0.87)"),
                secondary: Color::trusted("rgba(0, 0, 0, 0.6)"),
                disabled: Color::trusted("rgba(0, 0, 0, 0.38)"),
            },
            divider: Color::trusted("rgba(0, 0, 0, 0.12)"),
        }
    }

    /// The default dark palette.
    pub fn dark() -> Self {
        Self {
            mode: ColorMode::Dark,
            primary: ColorSet::new("#90caf9", "#e3f2fd", "#42a5f5", "rgba(0, 0, 0, 0.87)"),
            secondary: ColorSet::new("#ce93d8", "#f3e5f5", "#ab47bc", "rgba(0, 0, 0, 0.87)"),
            error: ColorSet::new("#f44336", "#e57373", "#d32f2f", "#fff"),
            warning: ColorSet::new("#ffa726", "#ffb74d", "#f57c00", "rgba(0, 0, 0, 0.87)"),
            info: ColorSet::new("#29b6f6", "#4fc3f7", "#0288d1", "rgba(0, 0, 0, 0.87)"),
            success: ColorSet::new("#66bb6a", "#81c784", "#388e3c", "rgba(0, 0, 0, 0.87)"),
            background: Background {
                default: Color::trusted("#121212"),
                paper: Color::trusted("#121212"),
            },
            text: TextColors {
                primary: Color::trusted("#fff"),
                secondary: Color::trusted("rgba(255, 255, 255, 0.7)"),
                disabled: Color::trusted("rgba(255, 255, 255, 0.5)"),
            },
            divider: Color::trusted("rgba(255, 255, 255, 0.12)"),
        }
    }

    pub fn role(&self, role: PaletteRole) -> &ColorSet {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Secondary => &self.secondary,
            PaletteRole::Error => &self.error,
            PaletteRole::Warning => &self.warning,
            PaletteRole::Info => &self.info,
            PaletteRole::Success => &self.success,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
