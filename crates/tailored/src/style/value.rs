//! Rule values: concrete fragments or aliases.

use super::fragment::StyleFragment;

/// A stylesheet rule that is either a concrete fragment or an alias to
/// another rule name.
///
/// Aliases let semantic class names (`timestamp`) point at presentation
/// rules (`muted`) without duplicating the declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    /// A concrete fragment.
    Fragment(StyleFragment),
    /// An alias to another rule by name.
    Alias(String),
}

impl From<StyleFragment> for RuleValue {
    fn from(fragment: StyleFragment) -> Self {
        RuleValue::Fragment(fragment)
    }
}

impl From<&StyleFragment> for RuleValue {
    fn from(fragment: &StyleFragment) -> Self {
        RuleValue::Fragment(fragment.clone())
    }
}

impl From<&str> for RuleValue {
    fn from(name: &str) -> Self {
        RuleValue::Alias(name.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(name: String) -> Self {
        RuleValue::Alias(name)
    }
}
