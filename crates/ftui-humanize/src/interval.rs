//! Signed multi-unit interval value.
//!
//! An [`Interval`] stores one magnitude per bucket plus a single sign flag,
//! so a mixed-sign interval cannot be represented. Weeks and days are
//! independent buckets: 10 days stays 10 days unless [`Interval::cascade_weeks`]
//! is called.
//!
//! Milliseconds have no bucket of their own; they are derived from the
//! microsecond bucket when a caller asks for millisecond precision.

use std::time::Duration;

use crate::error::HumanizeError;
use crate::unit::Unit;

const MICROS_PER_SECOND: u64 = 1_000_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// A signed interval decomposed into calendar and clock buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interval {
    years: u64,
    months: u64,
    weeks: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    micros: u64,
    negative: bool,
}

impl Interval {
    /// A zero interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            micros: 0,
            negative: false,
        }
    }

    #[must_use]
    pub const fn years(mut self, n: u64) -> Self {
        self.years = n;
        self
    }

    #[must_use]
    pub const fn months(mut self, n: u64) -> Self {
        self.months = n;
        self
    }

    #[must_use]
    pub const fn weeks(mut self, n: u64) -> Self {
        self.weeks = n;
        self
    }

    #[must_use]
    pub const fn days(mut self, n: u64) -> Self {
        self.days = n;
        self
    }

    #[must_use]
    pub const fn hours(mut self, n: u64) -> Self {
        self.hours = n;
        self
    }

    #[must_use]
    pub const fn minutes(mut self, n: u64) -> Self {
        self.minutes = n;
        self
    }

    #[must_use]
    pub const fn seconds(mut self, n: u64) -> Self {
        self.seconds = n;
        self
    }

    /// Set the sub-second bucket in microseconds.
    #[must_use]
    pub const fn micros(mut self, n: u64) -> Self {
        self.micros = n;
        self
    }

    /// Set the sub-second bucket from milliseconds, keeping any sub-millisecond remainder.
    #[must_use]
    pub const fn millis(mut self, n: u64) -> Self {
        self.micros = n.saturating_mul(1000).saturating_add(self.micros % 1000);
        self
    }

    /// Flip the direction.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    /// Set the direction explicitly.
    #[must_use]
    pub const fn with_sign(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// Whether the interval points into the past (or "before" the other instant).
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether every bucket is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.micros == 0
    }

    /// Magnitude of one unit's bucket.
    ///
    /// `Millisecond` and `Microsecond` split the sub-second bucket, so
    /// `1_500` µs reads as 1 ms and 500 µs.
    #[must_use]
    pub const fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
            Unit::Millisecond => self.micros / 1000,
            Unit::Microsecond => self.micros % 1000,
        }
    }

    /// Build an interval from signed components.
    ///
    /// All non-zero components must share a sign. Repeated units accumulate.
    pub fn try_from_signed(parts: &[(Unit, i64)]) -> Result<Self, HumanizeError> {
        let mut interval = Self::new();
        let mut sign: Option<bool> = None;

        for &(unit, value) in parts {
            if value == 0 {
                continue;
            }
            let negative = value < 0;
            match sign {
                Some(existing) if existing != negative => {
                    return Err(HumanizeError::InvalidInterval(format!(
                        "mixed signs: {unit} is {value} but earlier components are {}",
                        if existing { "negative" } else { "positive" }
                    )));
                }
                _ => sign = Some(negative),
            }
            interval.add(unit, value.unsigned_abs())?;
        }

        interval.negative = sign.unwrap_or(false);
        Ok(interval)
    }

    fn add(&mut self, unit: Unit, magnitude: u64) -> Result<(), HumanizeError> {
        let overflow = || HumanizeError::InvalidInterval(format!("{unit} bucket overflows"));
        let (slot, amount) = match unit {
            Unit::Year => (&mut self.years, magnitude),
            Unit::Month => (&mut self.months, magnitude),
            Unit::Week => (&mut self.weeks, magnitude),
            Unit::Day => (&mut self.days, magnitude),
            Unit::Hour => (&mut self.hours, magnitude),
            Unit::Minute => (&mut self.minutes, magnitude),
            Unit::Second => (&mut self.seconds, magnitude),
            Unit::Millisecond => (
                &mut self.micros,
                magnitude.checked_mul(1000).ok_or_else(overflow)?,
            ),
            Unit::Microsecond => (&mut self.micros, magnitude),
        };
        *slot = slot.checked_add(amount).ok_or_else(overflow)?;
        Ok(())
    }

    /// Cascade a raw signed number of seconds into day/hour/minute/second buckets.
    #[must_use]
    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_clock(seconds.unsigned_abs(), 0).with_sign(seconds < 0)
    }

    /// Cascade a raw signed number of microseconds into clock buckets.
    #[must_use]
    pub fn from_micros(micros: i64) -> Self {
        let magnitude = micros.unsigned_abs();
        Self::from_clock(magnitude / MICROS_PER_SECOND, magnitude % MICROS_PER_SECOND)
            .with_sign(micros < 0)
    }

    /// Cascade a (positive) [`Duration`] into clock buckets.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_clock(duration.as_secs(), u64::from(duration.subsec_micros()))
    }

    fn from_clock(total_seconds: u64, micros: u64) -> Self {
        Self::new()
            .days(total_seconds / SECONDS_PER_DAY)
            .hours(total_seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR)
            .minutes(total_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE)
            .seconds(total_seconds % SECONDS_PER_MINUTE)
            .micros(micros)
    }

    /// Move whole weeks out of the day bucket (10 days → 1 week 3 days).
    #[must_use]
    pub const fn cascade_weeks(mut self) -> Self {
        self.weeks = self.weeks.saturating_add(self.days / 7);
        self.days %= 7;
        self
    }
}
