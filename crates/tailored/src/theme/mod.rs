//! Theme system: design tokens and theme selection.
//!
//! This module provides:
//!
//! - [`Theme`]: Spacing, breakpoints, typography, palette, shape, motion and
//!   shadow tokens, with a fluent builder API and YAML/JSON loading
//! - [`AdaptiveTheme`]: Light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: Reference type for selecting themes at build time
//! - [`ColorMode`]: Light or dark color mode enum
//!
//! Every style helper takes a `&Theme` explicitly; there is no global theme.

mod adaptive;
mod breakpoints;
mod choice;
mod loader;
mod palette;
mod shape;
mod spacing;
#[allow(clippy::module_inception)]
mod theme;
mod transitions;
mod typography;

pub use adaptive::{reset_theme_detector, set_theme_detector, AdaptiveTheme, ColorMode};
pub use breakpoints::{Breakpoint, Breakpoints};
pub use choice::ThemeChoice;
pub use loader::ThemeError;
pub use palette::{Background, ColorSet, Palette, PaletteRole, TextColors};
pub use shape::{Elevation, Shadows, Shape};
pub use spacing::{Spacing, DEFAULT_SPACING_FACTOR};
pub use theme::Theme;
pub use transitions::{Durations, Easing, Transitions};
pub use typography::{TypeStyle, Typography, TypographyVariant};
