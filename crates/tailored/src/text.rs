//! Text and typography helpers.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::style::{StyleError, StyleFragment};
use crate::theme::{Theme, TypographyVariant};
use crate::util::format_number;

/// Truncates overflowing single-line text with an ellipsis.
pub static TEXT_ELLIPSIS: Lazy<StyleFragment> = Lazy::new(|| {
    StyleFragment::new()
        .push("overflow", "hidden")
        .push("text-overflow", "ellipsis")
        .push("white-space", "nowrap")
});

/// Clamps text to `lines` lines, hiding the rest.
pub fn line_clamp(lines: NonZeroU32) -> StyleFragment {
    StyleFragment::new()
        .push("display", "-webkit-box")
        .push("-webkit-line-clamp", lines.to_string())
        .push("-webkit-box-orient", "vertical")
        .push("overflow", "hidden")
}

/// Supported font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub const fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = u16;

    fn try_from(weight: u16) -> Result<Self, Self::Error> {
        match weight {
            300 => Ok(FontWeight::Light),
            400 => Ok(FontWeight::Regular),
            500 => Ok(FontWeight::Medium),
            600 => Ok(FontWeight::SemiBold),
            700 => Ok(FontWeight::Bold),
            other => Err(other),
        }
    }
}

pub fn font_weight(weight: FontWeight) -> StyleFragment {
    StyleFragment::new().push("font-weight", weight.value().to_string())
}

/// Size tokens, smallest to largest.
///
/// Each token maps to one entry of the theme's typography scale:
///
/// | Token | Variant |
/// |-------|---------|
/// | `xs` | caption |
/// | `sm` | body2 |
/// | `base` | body1 |
/// | `lg` | h6 |
/// | `xl` | h5 |
/// | `2xl` | h4 |
/// | `3xl` | h3 |
/// | `4xl` | h2 |
/// | `5xl` | h1 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
}

impl FontSize {
    pub const ALL: [FontSize; 9] = [
        FontSize::Xs,
        FontSize::Sm,
        FontSize::Base,
        FontSize::Lg,
        FontSize::Xl,
        FontSize::Xl2,
        FontSize::Xl3,
        FontSize::Xl4,
        FontSize::Xl5,
    ];

    /// The typography variant this token reads its size from.
    pub const fn variant(self) -> TypographyVariant {
        match self {
            FontSize::Xs => TypographyVariant::Caption,
            FontSize::Sm => TypographyVariant::Body2,
            FontSize::Base => TypographyVariant::Body1,
            FontSize::Lg => TypographyVariant::H6,
            FontSize::Xl => TypographyVariant::H5,
            FontSize::Xl2 => TypographyVariant::H4,
            FontSize::Xl3 => TypographyVariant::H3,
            FontSize::Xl4 => TypographyVariant::H2,
            FontSize::Xl5 => TypographyVariant::H1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FontSize::Xs => "xs",
            FontSize::Sm => "sm",
            FontSize::Base => "base",
            FontSize::Lg => "lg",
            FontSize::Xl => "xl",
            FontSize::Xl2 => "2xl",
            FontSize::Xl3 => "3xl",
            FontSize::Xl4 => "4xl",
            FontSize::Xl5 => "5xl",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = StyleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        FontSize::ALL
            .into_iter()
            .find(|size| size.as_str() == token)
            .ok_or_else(|| StyleError::InvalidIdent {
                input: token.to_string(),
            })
    }
}

/// Sets the font size of a size token from the theme's typography scale.
///
/// # Example
///
/// ```rust
/// use tailored::text::{font_size, FontSize};
/// use tailored::Theme;
///
/// let theme = Theme::light();
/// assert_eq!(font_size(FontSize::Xs, &theme).get("font-size"), Some("0.75rem"));
/// assert_eq!(font_size(FontSize::Xl5, &theme).get("font-size"), Some("6rem"));
/// ```
pub fn font_size(size: FontSize, theme: &Theme) -> StyleFragment {
    StyleFragment::new().push(
        "font-size",
        theme.type_style(size.variant()).font_size.to_string(),
    )
}

/// Applies every setting of a typography variant, including the family.
pub fn typography(variant: TypographyVariant, theme: &Theme) -> StyleFragment {
    let style = theme.type_style(variant);
    let mut fragment = StyleFragment::new()
        .push("font-family", theme.typography().font_family.to_string())
        .push("font-size", style.font_size.to_string());
    if let Some(weight) = style.font_weight {
        fragment = fragment.push("font-weight", weight.to_string());
    }
    if let Some(line_height) = style.line_height {
        fragment = fragment.push("line-height", format_number(line_height));
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_ellipsis() {
        assert_eq!(TEXT_ELLIPSIS.get("text-overflow"), Some("ellipsis"));
        assert_eq!(TEXT_ELLIPSIS.get("white-space"), Some("nowrap"));
        assert_eq!(TEXT_ELLIPSIS.get("overflow"), Some("hidden"));
    }

    #[test]
    fn test_line_clamp() {
        let fragment = line_clamp(NonZeroU32::new(3).unwrap());
        assert_eq!(fragment.get("-webkit-line-clamp"), Some("3"));
        assert_eq!(fragment.get("overflow"), Some("hidden"));
        assert_eq!(fragment.get("-webkit-box-orient"), Some("vertical"));
    }

    #[test]
    fn test_font_weight_values() {
        assert_eq!(font_weight(FontWeight::Light).get("font-weight"), Some("300"));
        assert_eq!(font_weight(FontWeight::SemiBold).get("font-weight"), Some("600"));
        assert_eq!(FontWeight::try_from(700_u16), Ok(FontWeight::Bold));
        assert_eq!(FontWeight::try_from(450_u16), Err(450));
    }

    #[test]
    fn test_font_size_table() {
        let theme = Theme::light();
        let expected = [
            (FontSize::Xs, TypographyVariant::Caption),
            (FontSize::Sm, TypographyVariant::Body2),
            (FontSize::Base, TypographyVariant::Body1),
            (FontSize::Lg, TypographyVariant::H6),
            (FontSize::Xl, TypographyVariant::H5),
            (FontSize::Xl2, TypographyVariant::H4),
            (FontSize::Xl3, TypographyVariant::H3),
            (FontSize::Xl4, TypographyVariant::H2),
            (FontSize::Xl5, TypographyVariant::H1),
        ];
        for (size, variant) in expected {
            let want = theme.type_style(variant).font_size.to_string();
            assert_eq!(
                font_size(size, &theme).get("font-size"),
                Some(want.as_str()),
                "{}",
                size
            );
        }
    }

    #[test]
    fn test_font_size_from_str() {
        assert_eq!("2xl".parse::<FontSize>(), Ok(FontSize::Xl2));
        assert_eq!("base".parse::<FontSize>(), Ok(FontSize::Base));
        assert!("6xl".parse::<FontSize>().is_err());
    }

    #[test]
    fn test_typography_variant() {
        let theme = Theme::light();
        let fragment = typography(TypographyVariant::H6, &theme);
        assert_eq!(fragment.get("font-size"), Some("1.25rem"));
        assert_eq!(fragment.get("font-weight"), Some("500"));
        assert_eq!(fragment.get("line-height"), Some("1.6"));
        assert!(fragment.get("font-family").unwrap().contains("Roboto"));
    }
}
