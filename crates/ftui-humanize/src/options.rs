//! Formatting options.
//!
//! [`FormatOptions`] follows the builder style used across the workspace:
//! public fields plus chainable setters named after the field.
//!
//! ```
//! use ftui_humanize::{FormatOptions, HumanizeFlags, Join, Syntax};
//!
//! let options = FormatOptions::new()
//!     .parts(2)
//!     .join(Join::Default)
//!     .syntax(Syntax::RelativeToNow)
//!     .flags(HumanizeFlags::ONE_DAY_WORDS);
//! assert_eq!(options.parts, Some(2));
//! ```

use core::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::error::HumanizeError;
use crate::locale::Frame;
use crate::unit::Unit;

bitflags! {
    /// Idiom and decomposition switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HumanizeFlags: u8 {
        /// Exactly one day relative to now reads "yesterday" / "tomorrow".
        const ONE_DAY_WORDS = 1 << 0;
        /// Exactly two days relative to now reads "before yesterday" / "after tomorrow".
        const TWO_DAY_WORDS = 1 << 1;
        /// A zero interval reads as one of the minimum unit instead of zero,
        /// so "1 second ago" replaces "just now".
        const NO_ZERO_DIFF = 1 << 2;
        /// Stop at the first zero unit after the first emitted unit.
        const SEQUENTIAL_PARTS_ONLY = 1 << 3;
    }
}

/// Relative-time framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Syntax {
    /// Bare phrase: "2 years".
    #[default]
    None,
    /// "2 years ago" / "2 years from now".
    RelativeToNow,
    /// "2 years before" / "2 years after".
    RelativeToOther,
}

impl Syntax {
    /// Frame for an interval of the given direction.
    #[must_use]
    pub const fn frame(self, negative: bool) -> Option<Frame> {
        match (self, negative) {
            (Self::None, _) => None,
            (Self::RelativeToNow, true) => Some(Frame::Ago),
            (Self::RelativeToNow, false) => Some(Frame::FromNow),
            (Self::RelativeToOther, true) => Some(Frame::Before),
            (Self::RelativeToOther, false) => Some(Frame::After),
        }
    }
}

/// Reducer for [`Join::Custom`].
pub type JoinFn = dyn Fn(&[String]) -> String + Send + Sync;

/// How rendered unit phrases are joined.
#[derive(Clone, Default)]
pub enum Join {
    /// Single space, no conjunction.
    #[default]
    None,
    /// The locale's list separator and final conjunction.
    Default,
    /// One separator between every pair.
    Separator(String),
    /// `separator` between all but the last two, `last` before the last.
    Pair { separator: String, last: String },
    /// Full override: receives every rendered phrase, returns the joined string.
    Custom(Arc<JoinFn>),
}

impl Join {
    #[must_use]
    pub fn pair(separator: impl Into<String>, last: impl Into<String>) -> Self {
        Self::Pair {
            separator: separator.into(),
            last: last.into(),
        }
    }

    #[must_use]
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }
}

impl fmt::Debug for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "Join::None"),
            Self::Default => write!(f, "Join::Default"),
            Self::Separator(sep) => write!(f, "Join::Separator({sep:?})"),
            Self::Pair { separator, last } => {
                write!(f, "Join::Pair({separator:?}, {last:?})")
            }
            Self::Custom(_) => write!(f, "Join::Custom(...)"),
        }
    }
}

impl From<bool> for Join {
    fn from(value: bool) -> Self {
        if value { Self::Default } else { Self::None }
    }
}

impl From<&str> for Join {
    fn from(value: &str) -> Self {
        Self::Separator(value.to_string())
    }
}

impl From<(&str, &str)> for Join {
    fn from((separator, last): (&str, &str)) -> Self {
        Self::pair(separator, last)
    }
}

/// Options for a single formatting call.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Maximum number of units emitted; `None` is unbounded.
    pub parts: Option<usize>,
    pub join: Join,
    /// Abbreviated unit labels ("1mo" vs "1 month").
    pub short: bool,
    /// Render a count of one with the indefinite article ("an hour").
    pub a_unit: bool,
    pub syntax: Syntax,
    pub flags: HumanizeFlags,
    /// Round the last emitted unit instead of truncating.
    pub round: bool,
    /// Smallest unit that may be emitted.
    pub minimum_unit: Unit,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            parts: None,
            join: Join::None,
            short: false,
            a_unit: false,
            syntax: Syntax::None,
            flags: HumanizeFlags::empty(),
            round: false,
            minimum_unit: Unit::Second,
        }
    }
}

impl FormatOptions {
    /// Unbounded parts, no framing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain duration phrasing: the single most significant unit.
    #[must_use]
    pub fn duration() -> Self {
        Self::new().parts(1)
    }

    /// Diff phrasing: every unit, framed relative to now.
    #[must_use]
    pub fn diff() -> Self {
        Self::new().syntax(Syntax::RelativeToNow)
    }

    #[must_use]
    pub fn parts(mut self, parts: usize) -> Self {
        self.parts = Some(parts);
        self
    }

    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.parts = None;
        self
    }

    #[must_use]
    pub fn join(mut self, join: impl Into<Join>) -> Self {
        self.join = join.into();
        self
    }

    #[must_use]
    pub fn short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    #[must_use]
    pub fn a_unit(mut self, a_unit: bool) -> Self {
        self.a_unit = a_unit;
        self
    }

    #[must_use]
    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: HumanizeFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn minimum_unit(mut self, unit: Unit) -> Self {
        self.minimum_unit = unit;
        self
    }

    /// Reject out-of-range configuration before any work is done.
    pub fn validate(&self) -> Result<(), HumanizeError> {
        if self.parts == Some(0) {
            return Err(HumanizeError::InvalidOptions(
                "parts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.parts, None);
        assert!(matches!(options.join, Join::None));
        assert_eq!(options.syntax, Syntax::None);
        assert_eq!(options.minimum_unit, Unit::Second);
        assert!(options.flags.is_empty());
    }

    #[test]
    fn presets() {
        assert_eq!(FormatOptions::duration().parts, Some(1));
        let diff = FormatOptions::diff();
        assert_eq!(diff.parts, None);
        assert_eq!(diff.syntax, Syntax::RelativeToNow);
    }

    #[test]
    fn zero_parts_rejected() {
        assert!(matches!(
            FormatOptions::new().parts(0).validate(),
            Err(HumanizeError::InvalidOptions(_))
        ));
        assert!(FormatOptions::new().parts(1).validate().is_ok());
    }

    #[test]
    fn frames_follow_sign() {
        assert_eq!(Syntax::None.frame(true), None);
        assert_eq!(Syntax::RelativeToNow.frame(true), Some(Frame::Ago));
        assert_eq!(Syntax::RelativeToNow.frame(false), Some(Frame::FromNow));
        assert_eq!(Syntax::RelativeToOther.frame(true), Some(Frame::Before));
        assert_eq!(Syntax::RelativeToOther.frame(false), Some(Frame::After));
    }

    #[test]
    fn join_conversions() {
        assert!(matches!(Join::from(true), Join::Default));
        assert!(matches!(Join::from(false), Join::None));
        assert!(matches!(Join::from(", "), Join::Separator(ref s) if s == ", "));
        assert!(matches!(
            Join::from((" and ", " and also ")),
            Join::Pair { ref last, .. } if last == " and also "
        ));
        assert_eq!(format!("{:?}", Join::custom(|t| t.concat())), "Join::Custom(...)");
    }

    #[test]
    fn flags_combine() {
        let flags = HumanizeFlags::ONE_DAY_WORDS | HumanizeFlags::TWO_DAY_WORDS;
        assert!(flags.contains(HumanizeFlags::ONE_DAY_WORDS));
        assert!(!flags.contains(HumanizeFlags::NO_ZERO_DIFF));
    }
}
