//! Named rule registry and stylesheet rendering.
//!
//! [`Stylesheet`] collects fragments under class names and renders them as
//! plain CSS. Fragments are written the way CSS-in-JS authors write them,
//! with `&` selectors and at-rules nested inside the rule, so rendering
//! flattens that nesting:
//!
//! | Nested block | Rendered as |
//! |--------------|-------------|
//! | `&:focus-visible { ... }` | `.name:focus-visible { ... }` |
//! | `img { ... }` | `.name img { ... }` |
//! | `@media (...) { ... }` | `@media (...) { .name { ... } }` |
//! | `@keyframes x { ... }` | emitted once, at the top of the output |

use std::collections::HashMap;

use super::error::StyleValidationError;
use super::fragment::{Declaration, StyleFragment};
use super::token::check_ident;
use super::value::RuleValue;

/// A registry of named rules with alias support.
///
/// Rules render in registration order. Adding a name twice replaces the
/// earlier value in place.
///
/// # Example
///
/// ```rust
/// use tailored::{Stylesheet, StyleFragment};
///
/// let muted = StyleFragment::new().declare("opacity", "0.6").unwrap();
/// let sheet = Stylesheet::new()
///     .add("muted", muted)
///     .add("timestamp", "muted");
///
/// let css = sheet.render().unwrap();
/// assert!(css.contains(".timestamp {\n  opacity: 0.6;\n}"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<(String, RuleValue)>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a named rule, returning the updated stylesheet for chaining.
    ///
    /// The value can be a [`StyleFragment`] or a `&str`/`String` alias to
    /// another rule name.
    pub fn add<V: Into<RuleValue>>(mut self, name: &str, value: V) -> Self {
        let value = value.into();
        match self.rules.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.rules.push((name.to_string(), value)),
        }
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&RuleValue> {
        self.rules
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Rule names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Follows aliases from `name` to a concrete fragment.
    ///
    /// Returns `None` for unknown names, dangling aliases and cycles.
    pub fn resolve(&self, name: &str) -> Option<&StyleFragment> {
        let mut current = name;
        for _ in 0..=self.rules.len() {
            match self.get(current)? {
                RuleValue::Fragment(fragment) => return Some(fragment),
                RuleValue::Alias(target) => current = target.as_str(),
            }
        }
        None
    }

    /// Validates rule names and alias chains.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in registration order.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        for (name, _) in &self.rules {
            if check_ident(name).is_err() {
                return Err(StyleValidationError::InvalidName { name: name.clone() });
            }
            self.validate_chain(name)?;
        }
        Ok(())
    }

    fn validate_chain(&self, name: &str) -> Result<(), StyleValidationError> {
        let mut path = vec![name.to_string()];
        let mut current = name;
        while let Some(RuleValue::Alias(target)) = self.get(current) {
            if path.iter().any(|seen| seen == target) {
                path.push(target.clone());
                return Err(StyleValidationError::CycleDetected { path });
            }
            if !self.has(target) {
                return Err(StyleValidationError::UnresolvedAlias {
                    from: current.to_string(),
                    to: target.clone(),
                });
            }
            path.push(target.clone());
            current = target.as_str();
        }
        Ok(())
    }

    /// Validates the stylesheet and renders it as CSS.
    ///
    /// Keyframes come first, each emitted once, followed by every rule in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleValidationError`] if [`validate`](Self::validate)
    /// fails, or if two rules define keyframes with the same name but
    /// different steps.
    pub fn render(&self) -> Result<String, StyleValidationError> {
        self.validate()?;

        let mut writer = CssWriter::default();
        for (name, _) in &self.rules {
            if let Some(fragment) = self.resolve(name) {
                writer.rule(&[format!(".{}", name)], fragment, &[])?;
            }
        }
        Ok(writer.finish())
    }
}

#[derive(Default)]
struct CssWriter {
    keyframes: String,
    seen_keyframes: HashMap<String, StyleFragment>,
    rules: String,
}

impl CssWriter {
    fn rule(
        &mut self,
        selectors: &[String],
        fragment: &StyleFragment,
        wrappers: &[&str],
    ) -> Result<(), StyleValidationError> {
        let declarations: Vec<&Declaration> = fragment.declarations().collect();
        if !declarations.is_empty() {
            self.write_wrapped(&selectors.join(", "), &declarations, wrappers);
        }

        for block in fragment.blocks() {
            let prelude = block.prelude();
            if is_keyframes(prelude) {
                self.hoist_keyframes(prelude, block.body())?;
            } else if prelude.starts_with('@') {
                let mut nested = wrappers.to_vec();
                nested.push(prelude);
                self.rule(selectors, block.body(), &nested)?;
            } else {
                self.rule(&scope(selectors, prelude), block.body(), wrappers)?;
            }
        }
        Ok(())
    }

    fn hoist_keyframes(
        &mut self,
        prelude: &str,
        body: &StyleFragment,
    ) -> Result<(), StyleValidationError> {
        match self.seen_keyframes.get(prelude) {
            Some(seen) if seen == body => Ok(()),
            Some(_) => Err(StyleValidationError::ConflictingKeyframes {
                name: prelude.to_string(),
            }),
            None => {
                self.keyframes.push_str(&format!("{} {{\n", prelude));
                self.keyframes.push_str(&indent(&body.to_string()));
                self.keyframes.push_str("}\n");
                self.seen_keyframes.insert(prelude.to_string(), body.clone());
                Ok(())
            }
        }
    }

    fn write_wrapped(&mut self, selector: &str, declarations: &[&Declaration], wrappers: &[&str]) {
        for (depth, wrapper) in wrappers.iter().enumerate() {
            self.rules
                .push_str(&format!("{}{} {{\n", "  ".repeat(depth), wrapper));
        }
        let depth = wrappers.len();
        let pad = "  ".repeat(depth);
        self.rules.push_str(&format!("{}{} {{\n", pad, selector));
        for decl in declarations {
            self.rules.push_str(&format!(
                "{}  {}: {};\n",
                pad,
                decl.property(),
                decl.value()
            ));
        }
        self.rules.push_str(&format!("{}}}\n", pad));
        for depth in (0..depth).rev() {
            self.rules.push_str(&format!("{}}}\n", "  ".repeat(depth)));
        }
    }

    fn finish(self) -> String {
        let mut css = self.keyframes;
        css.push_str(&self.rules);
        css
    }
}

/// Resolves a nested selector list against its parent selectors.
///
/// Each part containing `&` has it replaced by the parent, any other part
/// becomes a descendant of the parent. Every parent is combined with every
/// part.
fn scope(parents: &[String], prelude: &str) -> Vec<String> {
    split_selector_list(prelude)
        .into_iter()
        .flat_map(|part| {
            parents.iter().map(move |parent| {
                if part.contains('&') {
                    part.replace('&', parent)
                } else {
                    format!("{} {}", parent, part)
                }
            })
        })
        .collect()
}

/// Splits a selector list on commas outside brackets and strings.
fn split_selector_list(prelude: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: u32 = 0;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in prelude.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' | '[' => depth += 1,
                ')' | ']' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(prelude[start..i].trim());
                    start = i + 1;
                }
                _ => {}
            },
        }
    }
    parts.push(prelude[start..].trim());
    parts.retain(|part| !part.is_empty());
    parts
}

fn is_keyframes(prelude: &str) -> bool {
    prelude.starts_with("@keyframes") || prelude.starts_with("@-webkit-keyframes")
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("  {}\n", line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(property: &'static str, value: &str) -> StyleFragment {
        StyleFragment::new().push(property, value)
    }

    #[test]
    fn test_add_and_get() {
        let sheet = Stylesheet::new().add("card", fragment("display", "flex"));
        assert!(sheet.has("card"));
        assert!(!sheet.has("missing"));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_add_replaces_in_place() {
        let sheet = Stylesheet::new()
            .add("a", fragment("color", "red"))
            .add("b", fragment("color", "blue"))
            .add("a", fragment("color", "green"));
        let names: Vec<_> = sheet.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(sheet.resolve("a").unwrap().get("color"), Some("green"));
    }

    #[test]
    fn test_resolve_follows_aliases() {
        let sheet = Stylesheet::new()
            .add("muted", fragment("opacity", "0.6"))
            .add("disabled", "muted")
            .add("timestamp", "disabled");
        assert_eq!(sheet.resolve("timestamp").unwrap().get("opacity"), Some("0.6"));
        assert!(sheet.resolve("nope").is_none());
    }

    #[test]
    fn test_resolve_cycle_returns_none() {
        let sheet = Stylesheet::new().add("a", "b").add("b", "a");
        assert!(sheet.resolve("a").is_none());
    }

    #[test]
    fn test_validate_unresolved_alias() {
        let sheet = Stylesheet::new().add("orphan", "missing");
        assert_eq!(
            sheet.validate(),
            Err(StyleValidationError::UnresolvedAlias {
                from: "orphan".to_string(),
                to: "missing".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_cycle() {
        let sheet = Stylesheet::new().add("a", "b").add("b", "a");
        assert_eq!(
            sheet.validate(),
            Err(StyleValidationError::CycleDetected {
                path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
            })
        );
    }

    #[test]
    fn test_validate_self_alias() {
        let sheet = Stylesheet::new().add("a", "a");
        assert!(matches!(
            sheet.validate(),
            Err(StyleValidationError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_validate_invalid_name() {
        let sheet = Stylesheet::new().add("two words", fragment("color", "red"));
        assert_eq!(
            sheet.validate(),
            Err(StyleValidationError::InvalidName {
                name: "two words".to_string()
            })
        );
    }

    #[test]
    fn test_render_plain_rule() {
        let sheet = Stylesheet::new().add(
            "card",
            fragment("display", "flex").push("gap", "8px"),
        );
        assert_eq!(
            sheet.render().unwrap(),
            ".card {\n  display: flex;\n  gap: 8px;\n}\n"
        );
    }

    #[test]
    fn test_render_ampersand_and_descendant_blocks() {
        let card = StyleFragment::new()
            .block("&:hover", fragment("opacity", "1"))
            .block("img", fragment("width", "100%"));
        let css = Stylesheet::new().add("card", card).render().unwrap();
        assert_eq!(
            css,
            ".card:hover {\n  opacity: 1;\n}\n.card img {\n  width: 100%;\n}\n"
        );
    }

    #[test]
    fn test_render_media_wraps_rule() {
        let card = fragment("display", "none").block(
            "@media (max-width:599.95px)",
            fragment("display", "block"),
        );
        let css = Stylesheet::new().add("mobile", card).render().unwrap();
        assert_eq!(
            css,
            ".mobile {\n  display: none;\n}\n\
             @media (max-width:599.95px) {\n  .mobile {\n    display: block;\n  }\n}\n"
        );
    }

    #[test]
    fn test_render_hoists_keyframes_once() {
        let fade = fragment("animation", "fade-in 200ms ease-in-out").block(
            "@keyframes fade-in",
            StyleFragment::new()
                .block("from", fragment("opacity", "0"))
                .block("to", fragment("opacity", "1")),
        );
        let css = Stylesheet::new()
            .add("a", fade.clone())
            .add("b", fade)
            .render()
            .unwrap();
        assert_eq!(css.matches("@keyframes fade-in").count(), 1);
        assert!(css.starts_with(
            "@keyframes fade-in {\n  from {\n    opacity: 0;\n  }\n  to {\n    opacity: 1;\n  }\n}\n"
        ));
        assert!(css.contains(".a {\n  animation: fade-in 200ms ease-in-out;\n}\n"));
        assert!(css.contains(".b {\n  animation: fade-in 200ms ease-in-out;\n}\n"));
    }

    #[test]
    fn test_render_conflicting_keyframes() {
        let keyframes = |opacity: &str| {
            StyleFragment::new().block(
                "@keyframes pulse",
                StyleFragment::new().block("to", fragment("opacity", opacity)),
            )
        };
        let sheet = Stylesheet::new()
            .add("a", keyframes("1"))
            .add("b", keyframes("0.5"));
        assert_eq!(
            sheet.render(),
            Err(StyleValidationError::ConflictingKeyframes {
                name: "@keyframes pulse".to_string(),
            })
        );
    }

    #[test]
    fn test_render_descendant_list_scopes_each_part() {
        let card = StyleFragment::new().block("h1, h2", fragment("margin", "0"));
        let css = Stylesheet::new().add("card", card).render().unwrap();
        assert_eq!(css, ".card h1, .card h2 {\n  margin: 0;\n}\n");
    }

    #[test]
    fn test_render_mixed_ampersand_list() {
        let card = StyleFragment::new().block("&:hover, a", fragment("opacity", "1"));
        let css = Stylesheet::new().add("card", card).render().unwrap();
        assert_eq!(css, ".card:hover, .card a {\n  opacity: 1;\n}\n");
    }

    #[test]
    fn test_render_nested_lists_combine() {
        let card = StyleFragment::new().block(
            "h1, h2",
            StyleFragment::new().block("&:hover, :is(em, b)", fragment("color", "red")),
        );
        let css = Stylesheet::new().add("card", card).render().unwrap();
        assert_eq!(
            css,
            ".card h1:hover, .card h2:hover, .card h1 :is(em, b), .card h2 :is(em, b) {\n  \
             color: red;\n}\n"
        );
    }

    #[test]
    fn test_split_selector_list() {
        assert_eq!(split_selector_list("h1, h2"), vec!["h1", "h2"]);
        assert_eq!(split_selector_list(":is(a, b), c"), vec![":is(a, b)", "c"]);
        assert_eq!(split_selector_list("[data-x=\"a,b\"]"), vec!["[data-x=\"a,b\"]"]);
        assert_eq!(split_selector_list("img"), vec!["img"]);
    }

    #[test]
    fn test_render_fails_on_invalid_sheet() {
        let sheet = Stylesheet::new().add("orphan", "missing");
        assert!(sheet.render().is_err());
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(Stylesheet::new().render().unwrap(), "");
    }
}
