//! The style fragment value type.

use std::borrow::Cow;
use std::fmt;

use super::error::StyleError;
use super::token::{check_ident, check_prelude, check_value};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    property: Cow<'static, str>,
    value: String,
}

impl Declaration {
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A nested block: a prelude such as `@media (...)`, `&:hover` or `from`,
/// followed by a fragment body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    prelude: String,
    body: StyleFragment,
}

impl Block {
    pub fn prelude(&self) -> &str {
        &self.prelude
    }

    pub fn body(&self) -> &StyleFragment {
        &self.body
    }
}

/// One entry of a fragment, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Declaration(Declaration),
    Block(Block),
}

/// An immutable unit of style output.
///
/// Fragments hold declarations and nested blocks in the order they were
/// added, the same shape a CSS-in-JS template literal has. Every helper in
/// this crate returns one; [`Stylesheet`](super::Stylesheet) turns named
/// fragments into a stylesheet.
///
/// # Example
///
/// ```rust
/// use tailored::StyleFragment;
///
/// let card = StyleFragment::new()
///     .declare("display", "flex")
///     .and_then(|f| f.declare("gap", "8px"))
///     .unwrap();
///
/// assert_eq!(card.get("gap"), Some("8px"));
/// assert_eq!(card.inline(), "display: flex; gap: 8px;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleFragment {
    items: Vec<Item>,
}

impl StyleFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a declaration after validating both halves.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidIdent`] for a bad property name and
    /// [`StyleError::InvalidValue`] for a value that would escape the
    /// declaration.
    pub fn declare(self, property: &str, value: &str) -> Result<Self, StyleError> {
        check_ident(property)?;
        check_value(value)?;
        Ok(self.push(property.to_string(), value.trim()))
    }

    /// Appends a nested block after validating its prelude.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] if the prelude is empty or would
    /// open or close a block on its own.
    pub fn nest(self, prelude: &str, body: StyleFragment) -> Result<Self, StyleError> {
        check_prelude(prelude)?;
        Ok(self.block(prelude.trim(), body))
    }

    /// Appends all items of `other` after the items of this fragment.
    pub fn merge(mut self, other: StyleFragment) -> Self {
        self.items.extend(other.items);
        self
    }

    pub(crate) fn push(
        mut self,
        property: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        self.items.push(Item::Declaration(Declaration {
            property: property.into(),
            value: value.into(),
        }));
        self
    }

    pub(crate) fn block(mut self, prelude: impl Into<String>, body: StyleFragment) -> Self {
        self.items.push(Item::Block(Block {
            prelude: prelude.into(),
            body,
        }));
        self
    }

    /// Returns the value of the last top-level declaration of `property`.
    ///
    /// Later declarations win, as they would in the cascade.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations()
            .filter(|decl| decl.property() == property)
            .last()
            .map(Declaration::value)
    }

    /// Returns the body of the first nested block with exactly this prelude.
    pub fn nested(&self, prelude: &str) -> Option<&StyleFragment> {
        self.blocks()
            .find(|block| block.prelude() == prelude)
            .map(Block::body)
    }

    /// Top-level declarations in order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.items.iter().filter_map(|item| match item {
            Item::Declaration(decl) => Some(decl),
            Item::Block(_) => None,
        })
    }

    /// Top-level nested blocks in order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.items.iter().filter_map(|item| match item {
            Item::Block(block) => Some(block),
            Item::Declaration(_) => None,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the top-level declarations for an inline `style` attribute.
    ///
    /// Nested blocks cannot be expressed inline and are skipped.
    pub fn inline(&self) -> String {
        self.declarations()
            .map(|decl| format!("{}: {};", decl.property, decl.value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        for item in &self.items {
            match item {
                Item::Declaration(decl) => {
                    writeln!(f, "{}{}: {};", indent, decl.property, decl.value)?;
                }
                Item::Block(block) => {
                    writeln!(f, "{}{} {{", indent, block.prelude)?;
                    block.body.write_indented(f, depth + 1)?;
                    writeln!(f, "{}}}", indent)?;
                }
            }
        }
        Ok(())
    }
}

/// Renders the fragment as nested CSS text, one declaration per line.
impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl Extend<StyleFragment> for StyleFragment {
    fn extend<T: IntoIterator<Item = StyleFragment>>(&mut self, iter: T) {
        for fragment in iter {
            self.items.extend(fragment.items);
        }
    }
}

impl FromIterator<StyleFragment> for StyleFragment {
    fn from_iter<T: IntoIterator<Item = StyleFragment>>(iter: T) -> Self {
        let mut fragment = StyleFragment::new();
        fragment.extend(iter);
        fragment
    }
}
