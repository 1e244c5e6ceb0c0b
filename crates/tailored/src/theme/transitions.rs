//! Motion tokens: easing curves and duration presets.

use serde::{Deserialize, Serialize};

use crate::style::CssValue;

/// Easing curves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Easing {
    /// Used by most enter/exit animations.
    pub ease_in_out: CssValue,
    /// Elements entering the screen.
    pub ease_out: CssValue,
    /// Elements leaving the screen.
    pub ease_in: CssValue,
    /// Elements that may return at any time.
    pub sharp: CssValue,
}

impl Default for Easing {
    fn default() -> Self {
        Self {
            ease_in_out: CssValue::trusted("cubic-bezier(0.4, 0, 0.2, 1)"),
            ease_out: CssValue::trusted("cubic-bezier(0.0, 0, 0.2, 1)"),
            ease_in: CssValue::trusted("cubic-bezier(0.4, 0, 1, 1)"),
            sharp: CssValue::trusted("cubic-bezier(0.4, 0, 0.6, 1)"),
        }
    }
}

/// Duration presets in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Durations {
    pub shortest: u32,
    pub shorter: u32,
    pub short: u32,
    pub standard: u32,
    pub complex: u32,
    pub entering_screen: u32,
    pub leaving_screen: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            shortest: 150,
            shorter: 200,
            short: 250,
            standard: 300,
            complex: 375,
            entering_screen: 225,
            leaving_screen: 195,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transitions {
    pub easing: Easing,
    pub duration: Durations,
}
