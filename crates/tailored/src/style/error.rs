//! Style errors.

use thiserror::Error;

/// Error returned when free-form text cannot be turned into a style token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The text is not a CSS length (`12px`, `1.5rem`, `0`, `50%`, `calc(...)`).
    #[error("'{input}' is not a valid CSS length")]
    InvalidLength { input: String },
    /// The text is not a color understood by the color parser.
    #[error("'{input}' is not a valid CSS color")]
    InvalidColor { input: String },
    /// The text would break out of a declaration (`;`, `{`, `}`) or is empty.
    #[error("'{input}' is not a valid CSS value")]
    InvalidValue { input: String },
    /// The text is not usable as a property, class or animation name.
    #[error("'{input}' is not a valid CSS identifier")]
    InvalidIdent { input: String },
    /// A shadow scale must cover every elevation level.
    #[error("theme defines {found} shadows, at least {required} are required")]
    TooFewShadows { found: usize, required: usize },
}

/// Error returned when stylesheet validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    /// An alias references a rule that doesn't exist
    #[error("rule '{from}' aliases non-existent rule '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution
    #[error("cycle detected in rule aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
    /// A rule name cannot be used as a class selector
    #[error("rule name '{name}' is not a valid class name")]
    InvalidName { name: String },
    /// Two rules define keyframes under one name with different steps
    #[error("'{name}' is defined twice with different steps")]
    ConflictingKeyframes { name: String },
}
