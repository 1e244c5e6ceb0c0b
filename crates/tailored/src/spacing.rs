//! Directional margin and padding generator.
//!
//! [`generate_spacing`] binds a theme and returns a [`SpacingGenerator`] with
//! one method per shorthand key. Every method resolves its argument through
//! [`Theme::spacing`] and writes the same value to each property the key
//! covers:
//!
//! | Key | Properties |
//! |-----|------------|
//! | `m` | `margin` |
//! | `mt` / `mr` / `mb` / `ml` | `margin-top` / `-right` / `-bottom` / `-left` |
//! | `mx` | `margin-left`, `margin-right` |
//! | `my` | `margin-top`, `margin-bottom` |
//! | `p` ... `py` | the same for `padding` |

use crate::style::StyleFragment;
use crate::theme::Theme;

/// The closed set of spacing shorthand keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingKey {
    M,
    Mt,
    Mr,
    Mb,
    Ml,
    Mx,
    My,
    P,
    Pt,
    Pr,
    Pb,
    Pl,
    Px,
    Py,
}

impl SpacingKey {
    pub const ALL: [SpacingKey; 14] = [
        SpacingKey::M,
        SpacingKey::Mt,
        SpacingKey::Mr,
        SpacingKey::Mb,
        SpacingKey::Ml,
        SpacingKey::Mx,
        SpacingKey::My,
        SpacingKey::P,
        SpacingKey::Pt,
        SpacingKey::Pr,
        SpacingKey::Pb,
        SpacingKey::Pl,
        SpacingKey::Px,
        SpacingKey::Py,
    ];

    /// The properties this key writes, in output order.
    pub const fn properties(self) -> &'static [&'static str] {
        match self {
            SpacingKey::M => &["margin"],
            SpacingKey::Mt => &["margin-top"],
            SpacingKey::Mr => &["margin-right"],
            SpacingKey::Mb => &["margin-bottom"],
            SpacingKey::Ml => &["margin-left"],
            SpacingKey::Mx => &["margin-left", "margin-right"],
            SpacingKey::My => &["margin-top", "margin-bottom"],
            SpacingKey::P => &["padding"],
            SpacingKey::Pt => &["padding-top"],
            SpacingKey::Pr => &["padding-right"],
            SpacingKey::Pb => &["padding-bottom"],
            SpacingKey::Pl => &["padding-left"],
            SpacingKey::Px => &["padding-left", "padding-right"],
            SpacingKey::Py => &["padding-top", "padding-bottom"],
        }
    }

    /// The shorthand as written in component code.
    pub const fn as_str(self) -> &'static str {
        match self {
            SpacingKey::M => "m",
            SpacingKey::Mt => "mt",
            SpacingKey::Mr => "mr",
            SpacingKey::Mb => "mb",
            SpacingKey::Ml => "ml",
            SpacingKey::Mx => "mx",
            SpacingKey::My => "my",
            SpacingKey::P => "p",
            SpacingKey::Pt => "pt",
            SpacingKey::Pr => "pr",
            SpacingKey::Pb => "pb",
            SpacingKey::Pl => "pl",
            SpacingKey::Px => "px",
            SpacingKey::Py => "py",
        }
    }
}

/// Spacing shorthands bound to a theme.
///
/// # Example
///
/// ```rust
/// use tailored::{generate_spacing, Theme};
///
/// let theme = Theme::light();
/// let spacing = generate_spacing(&theme);
///
/// assert_eq!(spacing.m(2.0).inline(), "margin: 16px;");
/// assert_eq!(spacing.px(1.0).inline(), "padding-left: 8px; padding-right: 8px;");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpacingGenerator<'a> {
    theme: &'a Theme,
}

/// Binds the spacing shorthands to `theme`.
pub fn generate_spacing(theme: &Theme) -> SpacingGenerator<'_> {
    SpacingGenerator { theme }
}

impl<'a> SpacingGenerator<'a> {
    /// Applies a key chosen at runtime.
    pub fn apply(&self, key: SpacingKey, value: f64) -> StyleFragment {
        let resolved = self.theme.spacing(value).to_string();
        key.properties()
            .iter()
            .fold(StyleFragment::new(), |fragment, property| {
                fragment.push(*property, resolved.clone())
            })
    }

    pub fn m(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::M, value)
    }

    pub fn mt(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Mt, value)
    }

    pub fn mr(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Mr, value)
    }

    pub fn mb(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Mb, value)
    }

    pub fn ml(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Ml, value)
    }

    pub fn mx(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Mx, value)
    }

    pub fn my(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::My, value)
    }

    pub fn p(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::P, value)
    }

    pub fn pt(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Pt, value)
    }

    pub fn pr(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Pr, value)
    }

    pub fn pb(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Pb, value)
    }

    pub fn pl(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Pl, value)
    }

    pub fn px(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Px, value)
    }

    pub fn py(&self, value: f64) -> StyleFragment {
        self.apply(SpacingKey::Py, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Declaration;
    use crate::theme::Spacing;

    fn pairs(fragment: &StyleFragment) -> Vec<(String, String)> {
        fragment
            .declarations()
            .map(|decl| (decl.property().to_string(), decl.value().to_string()))
            .collect()
    }

    #[test]
    fn test_m_emits_only_margin() {
        let theme = Theme::light();
        let spacing = generate_spacing(&theme);
        assert_eq!(
            pairs(&spacing.m(3.0)),
            vec![("margin".to_string(), "24px".to_string())]
        );
    }

    #[test]
    fn test_non_finite_value_writes_zero() {
        let theme = Theme::light();
        let spacing = generate_spacing(&theme);
        assert_eq!(spacing.m(f64::NAN).get("margin"), Some("0"));
        assert_eq!(spacing.px(f64::INFINITY).inline(), "padding-left: 0; padding-right: 0;");
    }

    #[test]
    fn test_single_side_keys() {
        let theme = Theme::light();
        let spacing = generate_spacing(&theme);
        assert_eq!(spacing.mt(1.0).inline(), "margin-top: 8px;");
        assert_eq!(spacing.mr(1.0).inline(), "margin-right: 8px;");
        assert_eq!(spacing.mb(1.0).inline(), "margin-bottom: 8px;");
        assert_eq!(spacing.ml(1.0).inline(), "margin-left: 8px;");
        assert_eq!(spacing.p(0.5).inline(), "padding: 4px;");
        assert_eq!(spacing.pt(1.0).inline(), "padding-top: 8px;");
        assert_eq!(spacing.pr(1.0).inline(), "padding-right: 8px;");
        assert_eq!(spacing.pb(1.0).inline(), "padding-bottom: 8px;");
        assert_eq!(spacing.pl(1.0).inline(), "padding-left: 8px;");
    }

    #[test]
    fn test_axis_keys_write_both_sides() {
        let theme = Theme::light();
        let spacing = generate_spacing(&theme);
        assert_eq!(spacing.mx(2.0).inline(), "margin-left: 16px; margin-right: 16px;");
        assert_eq!(spacing.my(2.0).inline(), "margin-top: 16px; margin-bottom: 16px;");
        assert_eq!(spacing.px(2.0).inline(), "padding-left: 16px; padding-right: 16px;");
        assert_eq!(spacing.py(2.0).inline(), "padding-top: 16px; padding-bottom: 16px;");
    }

    #[test]
    fn test_methods_match_apply() {
        let theme = Theme::light();
        let spacing = generate_spacing(&theme);
        let generated = [
            (SpacingKey::M, spacing.m(1.0)),
            (SpacingKey::Mt, spacing.mt(1.0)),
            (SpacingKey::Mr, spacing.mr(1.0)),
            (SpacingKey::Mb, spacing.mb(1.0)),
            (SpacingKey::Ml, spacing.ml(1.0)),
            (SpacingKey::Mx, spacing.mx(1.0)),
            (SpacingKey::My, spacing.my(1.0)),
            (SpacingKey::P, spacing.p(1.0)),
            (SpacingKey::Pt, spacing.pt(1.0)),
            (SpacingKey::Pr, spacing.pr(1.0)),
            (SpacingKey::Pb, spacing.pb(1.0)),
            (SpacingKey::Pl, spacing.pl(1.0)),
            (SpacingKey::Px, spacing.px(1.0)),
            (SpacingKey::Py, spacing.py(1.0)),
        ];
        for (key, fragment) in generated {
            assert_eq!(fragment, spacing.apply(key, 1.0), "{}", key.as_str());
            let props: Vec<&str> = fragment.declarations().map(Declaration::property).collect();
            assert_eq!(props, key.properties());
        }
    }

    #[test]
    fn test_uses_theme_scale() {
        let theme = Theme::light().with_spacing(Spacing::Factor(4.0));
        assert_eq!(generate_spacing(&theme).m(3.0).get("margin"), Some("12px"));
    }

    #[test]
    fn test_keys_are_unique() {
        let mut names: Vec<&str> = SpacingKey::ALL.iter().map(|key| key.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SpacingKey::ALL.len());
    }
}
