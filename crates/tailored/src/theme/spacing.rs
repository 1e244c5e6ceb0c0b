//! Spacing scale.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::style::Length;

/// Default number of pixels per spacing unit.
pub const DEFAULT_SPACING_FACTOR: f64 = 8.0;

/// How a spacing multiplier turns into a length.
///
/// In theme files a number selects [`Spacing::Factor`] and a list selects
/// [`Spacing::Steps`]:
///
/// ```yaml
/// spacing: 4                       # spacing(2) == 8px
/// spacing: [0, 4px, 8px, 1rem]     # spacing(3) == 1rem
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Pixels per unit; the multiplier may be fractional.
    Factor(f64),
    /// Explicit steps indexed by the rounded multiplier.
    ///
    /// Negative multipliers negate the step. Multipliers past the last step
    /// clamp to it.
    Steps(Vec<Length>),
}

impl Spacing {
    /// Resolves a multiplier to a length.
    ///
    /// A multiplier that is not finite, or a factor product that overflows,
    /// resolves to `0` with a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tailored::theme::Spacing;
    ///
    /// assert_eq!(Spacing::default().resolve(2.0).to_string(), "16px");
    /// assert_eq!(Spacing::Factor(4.0).resolve(-1.5).to_string(), "-6px");
    /// ```
    pub fn resolve(&self, value: f64) -> Length {
        if !value.is_finite() {
            warn!("spacing multiplier {} is not finite; resolving to 0", value);
            return Length::Zero;
        }
        match self {
            Spacing::Factor(factor) => {
                let pixels = value * factor;
                if pixels.is_finite() {
                    Length::px(pixels)
                } else {
                    warn!("spacing {} x {} is not finite; resolving to 0", value, factor);
                    Length::Zero
                }
            }
            Spacing::Steps(steps) => {
                let Some(last) = steps.len().checked_sub(1) else {
                    warn!("spacing scale has no steps; resolving {} to 0", value);
                    return Length::Zero;
                };
                let requested = value.abs().round() as usize;
                if requested > last {
                    warn!(
                        "spacing step {} is past the end of the scale, using step {}",
                        requested, last
                    );
                }
                let step = &steps[requested.min(last)];
                if value < 0.0 {
                    step.neg()
                } else {
                    step.clone()
                }
            }
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Factor(DEFAULT_SPACING_FACTOR)
    }
}
