//! Utility functions for number formatting and identifier handling.

/// Formats a number the way CSS authors write it.
///
/// Values are rounded to four decimal places, trailing zeros are dropped and
/// negative zero prints as `0`.
///
/// # Example
///
/// ```rust
/// use tailored::format_number;
///
/// assert_eq!(format_number(16.0), "16");
/// assert_eq!(format_number(599.95), "599.95");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Converts arbitrary text into a string that is safe inside a CSS identifier.
///
/// ASCII letters, digits and `-` are kept. Every other character, `_`
/// included, is written as `_<hex code point>_`, so distinct inputs always
/// give distinct outputs.
///
/// # Example
///
/// ```rust
/// use tailored::ident_safe;
///
/// assert_eq!(ident_safe("20px"), "20px");
/// assert_eq!(ident_safe("1.5rem"), "1_2e_5rem");
/// ```
pub fn ident_safe(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' => result.push(c),
            _ => result.push_str(&format!("_{:x}_", u32::from(c))),
        }
    }
    result
}
