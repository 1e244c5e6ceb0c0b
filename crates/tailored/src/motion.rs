//! Keyframe animations and transitions.
//!
//! Animation helpers return the `@keyframes` block alongside the
//! `animation` declaration that uses it. [`Stylesheet::render`] hoists the
//! keyframes to the top of the output and emits each name once, so the same
//! animation can be applied to any number of rules.
//!
//! [`Stylesheet::render`]: crate::Stylesheet::render

use once_cell::sync::Lazy;

use crate::style::{check_ident, Length, StyleError, StyleFragment};
use crate::theme::Theme;
use crate::util::ident_safe;

/// Duration used by callers that have no opinion on transition timing.
pub const DEFAULT_TRANSITION_MS: u32 = 200;

/// Offset used by [`slide_in_default`].
pub const DEFAULT_SLIDE_DISTANCE: Length = Length::px(20.0);

const SLIDE_TIMING: &str = "300ms ease-out";

/// Fades an element in from fully transparent.
pub static FADE_IN: Lazy<StyleFragment> = Lazy::new(|| {
    StyleFragment::new()
        .push("animation", "fade-in 200ms ease-in-out")
        .block(
            "@keyframes fade-in",
            StyleFragment::new()
                .block("from", StyleFragment::new().push("opacity", "0"))
                .block("to", StyleFragment::new().push("opacity", "1")),
        )
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn translate(self) -> &'static str {
        match self {
            Axis::X => "translateX",
            Axis::Y => "translateY",
        }
    }
}

/// The side an element slides in from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl SlideDirection {
    pub const ALL: [SlideDirection; 4] = [
        SlideDirection::Left,
        SlideDirection::Right,
        SlideDirection::Top,
        SlideDirection::Bottom,
    ];

    pub const fn axis(self) -> Axis {
        match self {
            SlideDirection::Left | SlideDirection::Right => Axis::X,
            SlideDirection::Top | SlideDirection::Bottom => Axis::Y,
        }
    }

    /// Whether the starting offset is on the positive side of the axis.
    pub const fn is_positive(self) -> bool {
        matches!(self, SlideDirection::Right | SlideDirection::Bottom)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SlideDirection::Left => "left",
            SlideDirection::Right => "right",
            SlideDirection::Top => "top",
            SlideDirection::Bottom => "bottom",
        }
    }
}

/// Slides an element into place from `direction` while fading it in.
///
/// The element starts `distance` away from its resting position: to the left
/// or above it for [`Left`](SlideDirection::Left) and
/// [`Top`](SlideDirection::Top), to the right or below it otherwise.
///
/// # Example
///
/// ```rust
/// use tailored::motion::{slide_in, SlideDirection};
/// use tailored::Length;
///
/// let fragment = slide_in(SlideDirection::Right, &Length::px(30.0));
/// let keyframes = fragment.nested("@keyframes slide-in-right-30px").unwrap();
/// let from = keyframes.nested("from").unwrap();
/// assert_eq!(from.get("transform"), Some("translateX(30px)"));
/// ```
pub fn slide_in(direction: SlideDirection, distance: &Length) -> StyleFragment {
    let offset = if direction.is_positive() {
        distance.clone()
    } else {
        distance.neg()
    };
    let translate = direction.axis().translate();
    let name = format!(
        "slide-in-{}-{}",
        direction.as_str(),
        ident_safe(&distance.to_string())
    );

    let keyframes = StyleFragment::new()
        .block(
            "from",
            StyleFragment::new()
                .push("opacity", "0")
                .push("transform", format!("{}({})", translate, offset)),
        )
        .block(
            "to",
            StyleFragment::new()
                .push("opacity", "1")
                .push("transform", format!("{}(0)", translate)),
        );

    StyleFragment::new()
        .push("animation", format!("{} {}", name, SLIDE_TIMING))
        .block(format!("@keyframes {}", name), keyframes)
}

/// [`slide_in`] with [`DEFAULT_SLIDE_DISTANCE`].
pub fn slide_in_default(direction: SlideDirection) -> StyleFragment {
    slide_in(direction, &DEFAULT_SLIDE_DISTANCE)
}

/// Transitions each property over `duration_ms` with the theme's
/// ease-in-out curve.
///
/// # Errors
///
/// Returns [`StyleError::InvalidIdent`] if a property is not a CSS
/// identifier. `all` is accepted.
///
/// # Example
///
/// ```rust
/// use tailored::motion::transition;
/// use tailored::Theme;
///
/// let fragment = transition(&Theme::light(), &["opacity"], 150).unwrap();
/// assert_eq!(
///     fragment.get("transition"),
///     Some("opacity 150ms cubic-bezier(0.4, 0, 0.2, 1)")
/// );
/// ```
pub fn transition<P: AsRef<str>>(
    theme: &Theme,
    properties: &[P],
    duration_ms: u32,
) -> Result<StyleFragment, StyleError> {
    if properties.is_empty() {
        return Ok(StyleFragment::new());
    }
    let easing = &theme.transitions().easing.ease_in_out;
    let entries = properties
        .iter()
        .map(|property| -> Result<String, StyleError> {
            let property = property.as_ref().trim();
            check_ident(property)?;
            Ok(format!("{} {}ms {}", property, duration_ms, easing))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StyleFragment::new().push("transition", entries.join(", ")))
}
