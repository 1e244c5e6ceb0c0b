//! Style fragments and the tokens they are built from.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleFragment`]: An immutable list of declarations and nested blocks
//! - [`Length`], [`Color`], [`CssValue`]: Validated tokens for free-form input
//! - [`Stylesheet`]: A registry of named rules, rendered to CSS
//! - [`RuleValue`]: A rule that can be either concrete or an alias
//! - [`StyleError`], [`StyleValidationError`]: Errors from validation
//!
//! Stylesheets support a layered pattern where semantic class names alias
//! presentation rules, which in turn hold concrete fragments.

mod error;
mod fragment;
mod registry;
mod token;
mod value;

pub use error::{StyleError, StyleValidationError};
pub use fragment::{Block, Declaration, Item, StyleFragment};
pub use registry::Stylesheet;
pub use token::{Color, CssValue, Length, LengthUnit};
pub use value::RuleValue;

pub(crate) use token::check_ident;
