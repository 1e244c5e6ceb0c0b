//! Typography scale.

use serde::{Deserialize, Serialize};

use crate::style::{CssValue, Length};

/// A named entry of the typography scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyVariant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Button,
    Caption,
    Overline,
}

/// Font settings for one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_size: Length,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

impl TypeStyle {
    fn new(font_size: Length, font_weight: u16, line_height: f64) -> Self {
        Self {
            font_size,
            font_weight: Some(font_weight),
            line_height: Some(line_height),
        }
    }
}

/// The typography scale of a theme.
///
/// Defaults follow the Material type scale with a 16px root size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    pub font_family: CssValue,
    pub h1: TypeStyle,
    pub h2: TypeStyle,
    pub h3: TypeStyle,
    pub h4: TypeStyle,
    pub h5: TypeStyle,
    pub h6: TypeStyle,
    pub subtitle1: TypeStyle,
    pub subtitle2: TypeStyle,
    pub body1: TypeStyle,
    pub body2: TypeStyle,
    pub button: TypeStyle,
    pub caption: TypeStyle,
    pub overline: TypeStyle,
}

impl Typography {
    pub fn variant(&self, variant: TypographyVariant) -> &TypeStyle {
        match variant {
            TypographyVariant::H1 => &self.h1,
            TypographyVariant::H2 => &self.h2,
            TypographyVariant::H3 => &self.h3,
            TypographyVariant::H4 => &self.h4,
            TypographyVariant::H5 => &self.h5,
            TypographyVariant::H6 => &self.h6,
            TypographyVariant::Subtitle1 => &self.subtitle1,
            TypographyVariant::Subtitle2 => &self.subtitle2,
            TypographyVariant::Body1 => &self.body1,
            TypographyVariant::Body2 => &self.body2,
            TypographyVariant::Button => &self.button,
            TypographyVariant::Caption => &self.caption,
            TypographyVariant::Overline => &self.overline,
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: CssValue::trusted("\"Roboto\", \"Helvetica\", \"Arial\", sans-serif"),
            h1: TypeStyle::new(Length::rem(6.0), 300, 1.167),
            h2: TypeStyle::new(Length::rem(3.75), 300, 1.2),
            h3: TypeStyle::new(Length::rem(3.0), 400, 1.167),
            h4: TypeStyle::new(Length::rem(2.125), 400, 1.235),
            h5: TypeStyle::new(Length::rem(1.5), 400, 1.334),
            h6: TypeStyle::new(Length::rem(1.25), 500, 1.6),
            subtitle1: TypeStyle::new(Length::rem(1.0), 400, 1.75),
            subtitle2: TypeStyle::new(Length::rem(0.875), 500, 1.57),
            body1: TypeStyle::new(Length::rem(1.0), 400, 1.5),
            body2: TypeStyle::new(Length::rem(0.875), 400, 1.43),
            button: TypeStyle::new(Length::rem(0.875), 500, 1.75),
            caption: TypeStyle::new(Length::rem(0.75), 400, 1.66),
            overline: TypeStyle::new(Length::rem(0.75), 400, 2.66),
        }
    }
}
