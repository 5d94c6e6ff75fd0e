//! The fixed unit table.
//!
//! Units are totally ordered by magnitude, largest first. The factor table
//! is only consulted when rounding the last emitted unit.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Interval granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
}

impl Unit {
    /// All units, largest first.
    pub const ALL: [Unit; 9] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
    ];

    /// Translation key for the long table.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
            Self::Microsecond => "microsecond",
        }
    }

    /// The next smaller unit, if any.
    #[must_use]
    pub const fn smaller(self) -> Option<Unit> {
        match self {
            Self::Year => Some(Self::Month),
            Self::Month => Some(Self::Week),
            Self::Week => Some(Self::Day),
            Self::Day => Some(Self::Hour),
            Self::Hour => Some(Self::Minute),
            Self::Minute => Some(Self::Second),
            Self::Second => Some(Self::Millisecond),
            Self::Millisecond => Some(Self::Microsecond),
            Self::Microsecond => None,
        }
    }

    /// How many of the next smaller unit make one of `self`.
    ///
    /// Months count as four weeks here; this only matters for rounding.
    #[must_use]
    pub const fn factor(self) -> u64 {
        match self {
            Self::Year => 12,
            Self::Month => 4,
            Self::Week => 7,
            Self::Day => 24,
            Self::Hour | Self::Minute => 60,
            Self::Second | Self::Millisecond => 1000,
            Self::Microsecond => 1,
        }
    }

    /// Size of one `self` expressed in microseconds, per the factor table.
    #[must_use]
    pub const fn micros(self) -> u128 {
        let mut size: u128 = 1;
        let mut unit = self;
        while let Some(next) = unit.smaller() {
            size *= unit.factor() as u128;
            unit = next;
        }
        size
    }

    /// Parse a unit key (long name, plural, or common abbreviation).
    #[must_use]
    pub fn parse(value: &str) -> Option<Unit> {
        let unit = match value.trim().to_ascii_lowercase().as_str() {
            "year" | "years" | "y" => Self::Year,
            "month" | "months" | "mo" => Self::Month,
            "week" | "weeks" | "w" => Self::Week,
            "day" | "days" | "d" => Self::Day,
            "hour" | "hours" | "h" => Self::Hour,
            "minute" | "minutes" | "min" => Self::Minute,
            "second" | "seconds" | "s" => Self::Second,
            "millisecond" | "milliseconds" | "ms" => Self::Millisecond,
            "microsecond" | "microseconds" | "us" | "µs" => Self::Microsecond,
            _ => return None,
        };
        Some(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
