//! Shape and elevation tokens.

use serde::{Deserialize, Serialize};

use crate::style::{CssValue, Length, StyleError};

/// Corner rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shape {
    pub border_radius: Length,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            border_radius: Length::px(4.0),
        }
    }
}

/// A supported elevation level, 0 (flat) through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Elevation {
    Flat,
    Low,
    Medium,
    High,
    Highest,
}

impl Elevation {
    pub const ALL: [Elevation; 5] = [
        Elevation::Flat,
        Elevation::Low,
        Elevation::Medium,
        Elevation::High,
        Elevation::Highest,
    ];

    /// The shadow index for this level.
    pub const fn level(self) -> usize {
        match self {
            Elevation::Flat => 0,
            Elevation::Low => 1,
            Elevation::Medium => 2,
            Elevation::High => 3,
            Elevation::Highest => 4,
        }
    }
}

impl TryFrom<u8> for Elevation {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Elevation::ALL
            .get(usize::from(level))
            .copied()
            .ok_or(level)
    }
}

/// Shadow presets indexed by elevation level.
///
/// A scale always covers every [`Elevation`]; longer scales (such as the
/// 25-entry Material scale) are accepted and the extra entries are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Shadows(Vec<CssValue>);

impl Shadows {
    /// Validates a shadow scale.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::TooFewShadows`] if fewer than five presets are
    /// given, or [`StyleError::InvalidValue`] for a malformed preset.
    pub fn new<S: AsRef<str>>(presets: &[S]) -> Result<Self, StyleError> {
        let required = Elevation::ALL.len();
        if presets.len() < required {
            return Err(StyleError::TooFewShadows {
                found: presets.len(),
                required,
            });
        }
        presets
            .iter()
            .map(|preset| CssValue::parse(preset.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Shadows)
    }

    /// The preset for `elevation`, exactly as configured.
    pub fn get(&self, elevation: Elevation) -> &str {
        self.0
            .get(elevation.level())
            .map_or("none", CssValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Shadows {
    fn default() -> Self {
        Shadows(
            [
                "none",
                "0px 2px 1px -1px rgba(0,0,0,0.2),0px 1px 1px 0px rgba(0,0,0,0.14),0px 1px 3px 0px rgba(0,0,0,0.12)",
                "0px 3px 1px -2px rgba(0,0,0,0.2),0px 2px 2px 0px rgba(0,0,0,0.14),0px 1px 5px 0px rgba(0,0,0,0.12)",
                "0px 3px 3px -2px rgba(0,0,0,0.2),0px 3px 4px 0px rgba(0,0,0,0.14),0px 1px 8px 0px rgba(0,0,0,0.12)",
                "0px 2px 4px -1px rgba(0,0,0,0.2),0px 4px 5px 0px rgba(0,0,0,0.14),0px 1px 10px 0px rgba(0,0,0,0.12)",
            ]
            .into_iter()
            .map(CssValue::trusted)
            .collect(),
        )
    }
}

impl TryFrom<Vec<String>> for Shadows {
    type Error = StyleError;

    fn try_from(presets: Vec<String>) -> Result<Self, Self::Error> {
        Shadows::new(presets.as_slice())
    }
}

impl From<Shadows> for Vec<String> {
    fn from(shadows: Shadows) -> Self {
        shadows.0.into_iter().map(String::from).collect()
    }
}
