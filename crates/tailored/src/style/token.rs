//! Validated CSS tokens: lengths, colors, identifiers and free-form values.
//!
//! Anything that reaches a [`StyleFragment`](super::StyleFragment) from
//! free-form text passes through one of these types first. Validation runs
//! the text through the `cssparser` tokenizer, so a value can never close the
//! declaration or block it is written into.

use std::fmt;

use cssparser::{ParseError, Parser, ParserInput, Token};
use serde::{Deserialize, Serialize};

use super::error::StyleError;
use crate::util::format_number;

/// Units accepted for [`Length::Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Ch,
    Ex,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Svh,
    Dvh,
    Cqw,
    Cqh,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
}

impl LengthUnit {
    const ALL: [LengthUnit; 18] = [
        LengthUnit::Px,
        LengthUnit::Em,
        LengthUnit::Rem,
        LengthUnit::Ch,
        LengthUnit::Ex,
        LengthUnit::Vw,
        LengthUnit::Vh,
        LengthUnit::Vmin,
        LengthUnit::Vmax,
        LengthUnit::Svh,
        LengthUnit::Dvh,
        LengthUnit::Cqw,
        LengthUnit::Cqh,
        LengthUnit::Cm,
        LengthUnit::Mm,
        LengthUnit::In,
        LengthUnit::Pt,
        LengthUnit::Pc,
    ];

    /// The unit as written in CSS.
    pub const fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Ch => "ch",
            LengthUnit::Ex => "ex",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
            LengthUnit::Svh => "svh",
            LengthUnit::Dvh => "dvh",
            LengthUnit::Cqw => "cqw",
            LengthUnit::Cqh => "cqh",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
        }
    }

    /// Looks up a unit by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(name))
    }
}

/// Functions whose result is a length.
const LENGTH_FUNCTIONS: &[&str] = &["calc", "min", "max", "clamp", "var", "env"];

/// A CSS length value.
///
/// Numbers deserialize as pixels, strings are parsed as CSS.
///
/// # Example
///
/// ```rust
/// use tailored::Length;
///
/// let len = Length::parse("1.5rem").unwrap();
/// assert_eq!(len.to_string(), "1.5rem");
/// assert_eq!(len.neg().to_string(), "-1.5rem");
/// assert_eq!(Length::px(20.0).to_string(), "20px");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLength", into = "String")]
pub enum Length {
    /// Unitless `0`.
    Zero,
    /// A number with a unit, such as `12px`.
    Dimension { value: f64, unit: LengthUnit },
    /// A percentage, stored as written (`50%` is `50.0`).
    Percentage(f64),
    /// A math or variable expression such as `calc(100% - 8px)`.
    Expr(String),
}

impl Length {
    /// A length in pixels.
    pub const fn px(value: f64) -> Self {
        Length::Dimension {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// A length in root ems.
    pub const fn rem(value: f64) -> Self {
        Length::Dimension {
            value,
            unit: LengthUnit::Rem,
        }
    }

    /// Parses a CSS length.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidLength`] when the text is anything other
    /// than a single length, percentage, `0` or length expression.
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidLength {
            input: text.to_string(),
        };
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parser
            .parse_entirely(|parser| parse_length(parser, text))
            .map_err(|_| invalid())
    }

    /// The same length pointing the other way.
    pub fn neg(&self) -> Self {
        match self {
            Length::Zero => Length::Zero,
            Length::Dimension { value, unit } => Length::Dimension {
                value: -value,
                unit: *unit,
            },
            Length::Percentage(value) => Length::Percentage(-value),
            Length::Expr(expr) => Length::Expr(format!("calc(-1 * {})", expr)),
        }
    }

    /// Returns true for any zero length, with or without a unit.
    pub fn is_zero(&self) -> bool {
        match self {
            Length::Zero => true,
            Length::Dimension { value, .. } | Length::Percentage(value) => *value == 0.0,
            Length::Expr(_) => false,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Zero => f.write_str("0"),
            Length::Dimension { value, unit } => {
                write!(f, "{}{}", format_number(*value), unit.as_str())
            }
            Length::Percentage(value) => write!(f, "{}%", format_number(*value)),
            Length::Expr(expr) => f.write_str(expr),
        }
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(f64),
    Text(String),
}

impl TryFrom<RawLength> for Length {
    type Error = StyleError;

    fn try_from(raw: RawLength) -> Result<Self, Self::Error> {
        match raw {
            RawLength::Number(value) if value == 0.0 => Ok(Length::Zero),
            RawLength::Number(value) => Ok(Length::px(value)),
            RawLength::Text(text) => Length::parse(&text),
        }
    }
}

/// A CSS color, kept exactly as written.
///
/// # Example
///
/// ```rust
/// use tailored::Color;
///
/// assert_eq!(Color::parse("#1976d2").unwrap().as_str(), "#1976d2");
/// assert!(Color::parse("not-a-color").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parses a color in any syntax the color parser accepts (hex, `rgb()`,
    /// `hsl()`, named colors).
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] for anything else.
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        let trimmed = text.trim();
        if csscolorparser::parse(trimmed).is_err() || check_value(trimmed).is_err() {
            return Err(StyleError::InvalidColor {
                input: text.to_string(),
            });
        }
        Ok(Color(trimmed.to_string()))
    }

    pub(crate) fn trusted(text: &str) -> Self {
        Color(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Color::parse(&text)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// A free-form CSS value that is safe to place after `property:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssValue(String);

impl CssValue {
    /// Validates a value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] if the text is empty or contains
    /// tokens that would end the declaration.
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        check_value(text)?;
        Ok(CssValue(text.trim().to_string()))
    }

    pub(crate) fn trusted(text: &str) -> Self {
        CssValue(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CssValue {
    type Error = StyleError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        CssValue::parse(&text)
    }
}

impl From<CssValue> for String {
    fn from(value: CssValue) -> Self {
        value.0
    }
}

/// Checks that `text` can be written as a declaration value.
pub(crate) fn check_value(text: &str) -> Result<(), StyleError> {
    let invalid = || StyleError::InvalidValue {
        input: text.to_string(),
    };
    if text.trim().is_empty() || !brackets_balanced(text) {
        return Err(invalid());
    }
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    scan_value(&mut parser).map_err(|_| invalid())
}

/// Checks that `text` is a single CSS identifier, such as a property name.
pub(crate) fn check_ident(text: &str) -> Result<(), StyleError> {
    let invalid = || StyleError::InvalidIdent {
        input: text.to_string(),
    };
    if text.contains('\\') {
        return Err(invalid());
    }
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(parse_ident)
        .map_err(|_| invalid())
}

/// Checks that `text` can open a nested block (`@media ...`, `&:hover`).
pub(crate) fn check_prelude(text: &str) -> Result<(), StyleError> {
    check_value(text)
}

fn parse_length<'i, 't>(
    parser: &mut Parser<'i, 't>,
    text: &str,
) -> Result<Length, ParseError<'i, ()>> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Dimension { value, unit, .. } => match LengthUnit::from_name(&unit) {
            Some(unit) => Ok(Length::Dimension {
                value: f64::from(value),
                unit,
            }),
            None => Err(location.new_custom_error(())),
        },
        Token::Number { value, .. } if value == 0.0 => Ok(Length::Zero),
        Token::Percentage { unit_value, .. } => {
            Ok(Length::Percentage(f64::from(unit_value) * 100.0))
        }
        Token::Function(name)
            if LENGTH_FUNCTIONS
                .iter()
                .any(|function| name.eq_ignore_ascii_case(function)) =>
        {
            parser.parse_nested_block(scan_value)?;
            Ok(Length::Expr(text.trim().to_string()))
        }
        token => Err(location.new_unexpected_token_error(token)),
    }
}

fn parse_ident<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
    let location = parser.current_source_location();
    match parser.next_including_whitespace()?.clone() {
        Token::Ident(_) => Ok(()),
        token => Err(location.new_unexpected_token_error(token)),
    }
}

fn scan_value<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        match token {
            Token::Semicolon
            | Token::CurlyBracketBlock
            | Token::CloseCurlyBracket
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::BadString(_)
            | Token::BadUrl(_)
            | Token::CDO
            | Token::CDC => return Err(parser.new_custom_error(())),
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                parser.parse_nested_block(scan_value)?;
            }
            _ => {}
        }
    }
}

/// The tokenizer closes unterminated blocks at end of input; a value written
/// into a larger stylesheet must close its own.
fn brackets_balanced(text: &str) -> bool {
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;
    for c in text.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' | '[' => depth += 1,
                ')' | ']' => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            },
        }
    }
    depth == 0 && quote.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_parse_dimension() {
        assert_eq!(
            Length::parse("12px").unwrap(),
            Length::Dimension {
                value: 12.0,
                unit: LengthUnit::Px
            }
        );
        assert_eq!(Length::parse("0.75rem").unwrap().to_string(), "0.75rem");
        assert_eq!(Length::parse(" 2EM ").unwrap().to_string(), "2em");
    }

    #[test]
    fn test_length_parse_zero_and_percentage() {
        assert_eq!(Length::parse("0").unwrap(), Length::Zero);
        assert_eq!(Length::parse("50%").unwrap().to_string(), "50%");
    }

    #[test]
    fn test_length_parse_expression() {
        let len = Length::parse("calc(100% - 8px)").unwrap();
        assert_eq!(len.to_string(), "calc(100% - 8px)");
        assert_eq!(len.neg().to_string(), "calc(-1 * calc(100% - 8px))");
    }

    #[test]
    fn test_length_parse_rejects_garbage() {
        assert!(Length::parse("").is_err());
        assert!(Length::parse("12").is_err());
        assert!(Length::parse("12deg").is_err());
        assert!(Length::parse("12px 4px").is_err());
        assert!(Length::parse("12px; color: red").is_err());
        assert!(Length::parse("url(x)").is_err());
    }

    #[test]
    fn test_length_neg() {
        assert_eq!(Length::px(20.0).neg().to_string(), "-20px");
        assert_eq!(Length::Zero.neg(), Length::Zero);
        assert_eq!(Length::Percentage(10.0).neg().to_string(), "-10%");
    }

    #[test]
    fn test_length_is_zero() {
        assert!(Length::Zero.is_zero());
        assert!(Length::px(0.0).is_zero());
        assert!(!Length::rem(1.0).is_zero());
    }

    #[test]
    fn test_length_deserialize_number_as_px() {
        let len: Length = serde_json::from_str("8").unwrap();
        assert_eq!(len, Length::px(8.0));
        let zero: Length = serde_json::from_str("0").unwrap();
        assert_eq!(zero, Length::Zero);
        let text: Length = serde_json::from_str("\"1rem\"").unwrap();
        assert_eq!(text, Length::rem(1.0));
        assert!(serde_json::from_str::<Length>("\"red\"").is_err());
    }

    #[test]
    fn test_length_serializes_as_css() {
        let json = serde_json::to_string(&Length::rem(0.875)).unwrap();
        assert_eq!(json, "\"0.875rem\"");
    }

    #[test]
    fn test_color_parse() {
        assert!(Color::parse("#fff").is_ok());
        assert!(Color::parse("rgba(0, 0, 0, 0.87)").is_ok());
        assert!(Color::parse("rebeccapurple").is_ok());
        assert!(Color::parse("#zzz").is_err());
        assert!(Color::parse("red; display: none").is_err());
    }

    #[test]
    fn test_css_value_accepts_common_values() {
        assert!(CssValue::parse("cubic-bezier(0.4, 0, 0.2, 1)").is_ok());
        assert!(CssValue::parse("0px 2px 1px -1px rgba(0,0,0,0.2)").is_ok());
        assert!(CssValue::parse("\"Roboto\", \"Helvetica\", sans-serif").is_ok());
    }

    #[test]
    fn test_css_value_rejects_breakouts() {
        assert!(CssValue::parse("").is_err());
        assert!(CssValue::parse("   ").is_err());
        assert!(CssValue::parse("red;").is_err());
        assert!(CssValue::parse("red } body { color: blue").is_err());
        assert!(CssValue::parse("calc(1px").is_err());
        assert!(CssValue::parse("calc(1px; x)").is_err());
        assert!(CssValue::parse("1px)").is_err());
    }

    #[test]
    fn test_check_ident() {
        assert!(check_ident("opacity").is_ok());
        assert!(check_ident("-webkit-line-clamp").is_ok());
        assert!(check_ident("--brand").is_ok());
        assert!(check_ident("").is_err());
        assert!(check_ident("1st").is_err());
        assert!(check_ident("a b").is_err());
        assert!(check_ident("color;").is_err());
    }

    #[test]
    fn test_check_prelude() {
        assert!(check_prelude("@media (min-width:600px)").is_ok());
        assert!(check_prelude("&:focus-visible").is_ok());
        assert!(check_prelude("a { b").is_err());
    }

    #[test]
    fn test_length_unit_from_name() {
        assert_eq!(LengthUnit::from_name("PX"), Some(LengthUnit::Px));
        assert_eq!(LengthUnit::from_name("cqw"), Some(LengthUnit::Cqw));
        assert_eq!(LengthUnit::from_name("deg"), None);
    }
}
