//! Theme struct bundling every design token.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::breakpoints::Breakpoints;
use super::loader::ThemeError;
use super::palette::Palette;
use super::shape::{Shadows, Shape};
use super::spacing::Spacing;
use super::transitions::Transitions;
use super::typography::{TypeStyle, Typography, TypographyVariant};
use crate::style::Length;

static LIGHT: Lazy<Theme> = Lazy::new(|| Theme {
    spacing: Spacing::default(),
    breakpoints: Breakpoints::default(),
    typography: Typography::default(),
    palette: Palette::light(),
    shape: Shape::default(),
    transitions: Transitions::default(),
    shadows: Shadows::default(),
});

/// The design tokens every style helper reads from.
///
/// Themes are read-only inputs: helpers take `&Theme` and never keep it.
/// Build one in code with the `with_*` methods, or load one from a file
/// with [`Theme::from_path`]; fields missing from a file keep their
/// defaults.
///
/// # Example
///
/// ```rust
/// use tailored::theme::{Spacing, Theme};
///
/// let theme = Theme::light().with_spacing(Spacing::Factor(4.0));
/// assert_eq!(theme.spacing(3.0).to_string(), "12px");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    spacing: Spacing,
    breakpoints: Breakpoints,
    typography: Typography,
    palette: Palette,
    shape: Shape,
    transitions: Transitions,
    shadows: Shadows,
}

impl Theme {
    /// The default light theme.
    pub fn light() -> Self {
        LIGHT.clone()
    }

    /// The default theme with the dark palette.
    pub fn dark() -> Self {
        Self::light().with_palette(Palette::dark())
    }

    /// Resolves a spacing multiplier through the spacing scale.
    ///
    /// Non-finite multipliers resolve to `0`; see [`Spacing::resolve`].
    pub fn spacing(&self, value: f64) -> Length {
        self.spacing.resolve(value)
    }

    pub fn spacing_scale(&self) -> &Spacing {
        &self.spacing
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// Shorthand for `typography().variant(variant)`.
    pub fn type_style(&self, variant: TypographyVariant) -> &TypeStyle {
        self.typography.variant(variant)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    pub fn shadows(&self) -> &Shadows {
        &self.shadows
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn with_shadows(mut self, shadows: Shadows) -> Self {
        self.shadows = shadows;
        self
    }

    /// Checks the invariants serde and the token types cannot express.
    ///
    /// This is called automatically when loading from a file, but can be
    /// called explicitly for themes assembled in code.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidSpacing`] for a negative, non-finite or
    /// empty spacing scale and [`ThemeError::BreakpointOrder`] when the
    /// breakpoints are not ascending.
    pub fn validate(&self) -> Result<(), ThemeError> {
        match &self.spacing {
            Spacing::Factor(factor) if !factor.is_finite() || *factor < 0.0 => {
                return Err(ThemeError::InvalidSpacing {
                    reason: format!("factor must be a non-negative number, got {}", factor),
                });
            }
            Spacing::Steps(steps) if steps.is_empty() => {
                return Err(ThemeError::InvalidSpacing {
                    reason: "step list is empty".to_string(),
                });
            }
            _ => {}
        }
        if !self.breakpoints.is_ascending() {
            return Err(ThemeError::BreakpointOrder);
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Breakpoint, ColorMode};

    #[test]
    fn test_theme_default_is_light() {
        let theme = Theme::default();
        assert_eq!(theme.palette().mode, ColorMode::Light);
        assert_eq!(theme, Theme::light());
    }

    #[test]
    fn test_theme_dark_only_swaps_palette() {
        let dark = Theme::dark();
        assert_eq!(dark.palette().mode, ColorMode::Dark);
        assert_eq!(dark.typography(), Theme::light().typography());
    }

    #[test]
    fn test_theme_spacing() {
        let theme = Theme::light();
        assert_eq!(theme.spacing(2.0).to_string(), "16px");
        let stepped = theme.with_spacing(Spacing::Steps(vec![Length::Zero, Length::rem(0.5)]));
        assert_eq!(stepped.spacing(1.0).to_string(), "0.5rem");
    }

    #[test]
    fn test_theme_type_style() {
        let theme = Theme::light();
        assert_eq!(
            theme.type_style(TypographyVariant::Body2).font_size,
            Length::rem(0.875)
        );
    }

    #[test]
    fn test_theme_validate_valid() {
        assert!(Theme::light().validate().is_ok());
        assert!(Theme::dark().validate().is_ok());
    }

    #[test]
    fn test_theme_validate_negative_factor() {
        let theme = Theme::light().with_spacing(Spacing::Factor(-2.0));
        assert!(matches!(
            theme.validate(),
            Err(ThemeError::InvalidSpacing { .. })
        ));
    }

    #[test]
    fn test_theme_validate_empty_steps() {
        let theme = Theme::light().with_spacing(Spacing::Steps(vec![]));
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_theme_validate_breakpoints() {
        let breakpoints = Breakpoints {
            lg: 100.0,
            ..Breakpoints::default()
        };
        let theme = Theme::light().with_breakpoints(breakpoints);
        assert!(matches!(theme.validate(), Err(ThemeError::BreakpointOrder)));
        assert_eq!(theme.breakpoints().value(Breakpoint::Lg), 100.0);
    }
}
