//! # Tailored - Theme-Driven Style Fragments
//!
//! `tailored` is a library of small, composable style helpers. Each helper
//! takes typed inputs and an explicit `&Theme` and returns a
//! [`StyleFragment`]: an ordered list of CSS declarations and nested blocks
//! that can be composed, inspected, inlined or rendered into a stylesheet.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Design tokens (spacing, breakpoints, typography, palette,
//!   shape, transitions, shadows), loadable from YAML or JSON
//! - [`StyleFragment`]: The value every helper returns
//! - [`Stylesheet`]: Named rules with aliases, rendered to CSS text
//! - [`AdaptiveTheme`]: A light/dark pair resolved against the OS setting
//!
//! ## Helpers
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`layout`] | flex presets, fill presets, grid, grid span, aspect ratio |
//! | [`text`] | ellipsis, line clamp, font weight, font size, typography variants |
//! | [`spacing`] | margin and padding shorthands on the theme spacing scale |
//! | [`responsive`] | breakpoint media queries, container queries |
//! | [`color`] | dark mode and adaptive colors |
//! | [`a11y`] | visually hidden content, focus rings |
//! | [`motion`] | fade and slide keyframes, transitions |
//! | [`surface`] | elevation shadows, rounded corners |
//!
//! ## Quick Start
//!
//! ```rust
//! use tailored::{generate_spacing, layout, Stylesheet, Theme};
//! use tailored::motion::{transition, DEFAULT_TRANSITION_MS};
//!
//! let theme = Theme::light();
//! let spacing = generate_spacing(&theme);
//!
//! let card = layout::FLEX_CENTER
//!     .clone()
//!     .merge(spacing.p(2.0))
//!     .merge(transition(&theme, &["box-shadow"], DEFAULT_TRANSITION_MS).unwrap());
//!
//! assert_eq!(card.get("padding"), Some("16px"));
//!
//! let css = Stylesheet::new()
//!     .add("card", card)
//!     .add("panel", "card")
//!     .render()
//!     .unwrap();
//! assert!(css.contains(".panel {\n  display: flex;\n"));
//! ```
//!
//! ## Loading Themes
//!
//! Theme files only need the tokens they change; everything else keeps the
//! default value:
//!
//! ```rust
//! use tailored::Theme;
//!
//! let theme = Theme::from_yaml("spacing: 4\nshape:\n  borderRadius: 8px\n").unwrap();
//! assert_eq!(theme.spacing(3.0).to_string(), "12px");
//! assert_eq!(theme.shape().border_radius.to_string(), "8px");
//! ```
//!
//! For light/dark pairs, [`color::adaptive_colors`] lets the browser pick a
//! variant, while [`AdaptiveTheme::resolve`] picks one in process.

pub mod a11y;
pub mod color;
pub mod layout;
pub mod motion;
pub mod responsive;
pub mod spacing;
pub mod style;
pub mod surface;
pub mod text;
pub mod theme;
mod util;

pub use spacing::{generate_spacing, SpacingGenerator, SpacingKey};
pub use style::{
    Color, CssValue, Length, LengthUnit, RuleValue, StyleError, StyleFragment,
    StyleValidationError, Stylesheet,
};
pub use theme::{AdaptiveTheme, ColorMode, Theme, ThemeChoice, ThemeError};
pub use util::{format_number, ident_safe};
