//! Responsive breakpoints and the media queries built from them.

use serde::{Deserialize, Serialize};

use crate::util::format_number;

/// Subtracted from an upper bound so adjacent ranges never overlap.
const STEP: f64 = 0.05;

/// A named screen-width threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints from narrowest to widest.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// The next wider breakpoint, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Breakpoint::Xs => Some(Breakpoint::Sm),
            Breakpoint::Sm => Some(Breakpoint::Md),
            Breakpoint::Md => Some(Breakpoint::Lg),
            Breakpoint::Lg => Some(Breakpoint::Xl),
            Breakpoint::Xl => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

/// Minimum widths, in pixels, at which each breakpoint starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
}

impl Breakpoints {
    pub fn value(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Matches screens at least as wide as `breakpoint`.
    ///
    /// ```rust
    /// use tailored::theme::{Breakpoint, Breakpoints};
    ///
    /// let bp = Breakpoints::default();
    /// assert_eq!(bp.up(Breakpoint::Md), "@media (min-width:900px)");
    /// ```
    pub fn up(&self, breakpoint: Breakpoint) -> String {
        format!(
            "@media (min-width:{}px)",
            format_number(self.value(breakpoint))
        )
    }

    /// Matches screens narrower than `breakpoint`.
    ///
    /// ```rust
    /// use tailored::theme::{Breakpoint, Breakpoints};
    ///
    /// let bp = Breakpoints::default();
    /// assert_eq!(bp.down(Breakpoint::Sm), "@media (max-width:599.95px)");
    /// ```
    pub fn down(&self, breakpoint: Breakpoint) -> String {
        format!(
            "@media (max-width:{}px)",
            format_number(self.value(breakpoint) - STEP)
        )
    }

    /// Matches screens from `start` up to, but not including, `end`.
    pub fn between(&self, start: Breakpoint, end: Breakpoint) -> String {
        format!(
            "@media (min-width:{}px) and (max-width:{}px)",
            format_number(self.value(start)),
            format_number(self.value(end) - STEP)
        )
    }

    /// Matches only the range covered by `breakpoint`.
    pub fn only(&self, breakpoint: Breakpoint) -> String {
        match breakpoint.next() {
            Some(next) => self.between(breakpoint, next),
            None => self.up(breakpoint),
        }
    }

    /// Returns true if every value is finite, non-negative and strictly
    /// wider than the one before it.
    pub fn is_ascending(&self) -> bool {
        let values: Vec<f64> = Breakpoint::ALL.iter().map(|bp| self.value(*bp)).collect();
        values.iter().all(|v| v.is_finite() && *v >= 0.0)
            && values.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 0.0,
            sm: 600.0,
            md: 900.0,
            lg: 1200.0,
            xl: 1536.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_and_down() {
        let bp = Breakpoints::default();
        assert_eq!(bp.up(Breakpoint::Xs), "@media (min-width:0px)");
        assert_eq!(bp.down(Breakpoint::Md), "@media (max-width:899.95px)");
    }

    #[test]
    fn test_between() {
        let bp = Breakpoints::default();
        assert_eq!(
            bp.between(Breakpoint::Sm, Breakpoint::Lg),
            "@media (min-width:600px) and (max-width:1199.95px)"
        );
    }

    #[test]
    fn test_only_uses_next_breakpoint() {
        let bp = Breakpoints::default();
        assert_eq!(
            bp.only(Breakpoint::Md),
            "@media (min-width:900px) and (max-width:1199.95px)"
        );
        assert_eq!(bp.only(Breakpoint::Xl), "@media (min-width:1536px)");
    }

    #[test]
    fn test_is_ascending() {
        assert!(Breakpoints::default().is_ascending());
        let swapped = Breakpoints {
            md: 500.0,
            ..Breakpoints::default()
        };
        assert!(!swapped.is_ascending());
        let negative = Breakpoints {
            xs: -1.0,
            ..Breakpoints::default()
        };
        assert!(!negative.is_ascending());
    }

    #[test]
    fn test_next_walks_in_order() {
        let mut walked = vec![Breakpoint::Xs];
        while let Some(next) = walked.last().and_then(|bp| bp.next()) {
            walked.push(next);
        }
        assert_eq!(walked, Breakpoint::ALL.to_vec());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let bp: Breakpoints = serde_yaml::from_str("sm: 640").unwrap();
        assert_eq!(bp.sm, 640.0);
        assert_eq!(bp.md, 900.0);
    }
}
