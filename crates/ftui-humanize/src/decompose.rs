//! Interval decomposition into an ordered, bounded unit list.
//!
//! # Invariants
//!
//! 1. **Descending**: emitted units strictly decrease in magnitude.
//! 2. **Bounded**: at most `parts` entries are emitted.
//! 3. **Non-empty**: an all-zero interval emits exactly one entry, for the
//!    minimum unit. An idiom emits none. An interval with nothing elapsed
//!    reads as past.
//! 4. **Sign-free counts**: counts are magnitudes; the direction is carried
//!    once in [`Decomposition::negative`].
//! 5. **No carry**: rounding increments only the last emitted unit, so
//!    "11 months 20 days" with one part rounds to "12 months".

use crate::interval::Interval;
use crate::locale::NearNow;
use crate::options::{FormatOptions, HumanizeFlags, Syntax};
use crate::unit::Unit;

/// One emitted unit and its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCount {
    pub unit: Unit,
    pub count: u64,
}

impl UnitCount {
    #[must_use]
    pub const fn new(unit: Unit, count: u64) -> Self {
        Self { unit, count }
    }
}

/// Result of decomposing an interval under a set of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// Direction of the source interval.
    pub negative: bool,
    /// The single emitted entry has count zero.
    pub zero: bool,
    /// Near-now word replacing the numeric phrase.
    pub idiom: Option<NearNow>,
    pub units: Vec<UnitCount>,
}

/// Decompose `interval` according to `options`.
///
/// Options are assumed valid; [`format_interval`](crate::format_interval)
/// validates them first. A `parts` of zero is treated as one here.
#[must_use]
pub fn decompose(interval: &Interval, options: &FormatOptions) -> Decomposition {
    let mut negative = interval.is_negative();
    let full: Vec<UnitCount> = Unit::ALL
        .iter()
        .take_while(|unit| **unit <= options.minimum_unit)
        .map(|&unit| UnitCount::new(unit, interval.get(unit)))
        .filter(|uc| uc.count > 0)
        .collect();

    if let Some(idiom) = near_now_idiom(&full, negative, options) {
        tracing::trace!(?idiom, "interval collapsed to idiom");
        return Decomposition {
            negative,
            zero: false,
            idiom: Some(idiom),
            units: Vec::new(),
        };
    }

    let limit = options.parts.unwrap_or(usize::MAX).max(1);
    let sequential = options.flags.contains(HumanizeFlags::SEQUENTIAL_PARTS_ONLY);
    let mut units: Vec<UnitCount> = Vec::new();

    for &unit in Unit::ALL.iter().take_while(|unit| **unit <= options.minimum_unit) {
        let count = interval.get(unit);
        if count == 0 {
            if sequential && !units.is_empty() {
                break;
            }
            continue;
        }
        if units.len() == limit {
            break;
        }
        units.push(UnitCount::new(unit, count));
    }

    let mut zero = false;
    if units.is_empty() {
        let count = if options.round && rounds_up(interval, options.minimum_unit) {
            1
        } else {
            u64::from(options.flags.contains(HumanizeFlags::NO_ZERO_DIFF))
        };
        zero = count == 0;
        negative |= interval.is_zero();
        units.push(UnitCount::new(options.minimum_unit, count));
    } else if options.round
        && let Some(last) = units.last_mut()
        && rounds_up(interval, last.unit)
    {
        last.count = last.count.saturating_add(1);
    }

    tracing::trace!(parts = units.len(), negative, zero, "decomposed interval");
    Decomposition {
        negative,
        zero,
        idiom: None,
        units,
    }
}

fn near_now_idiom(full: &[UnitCount], negative: bool, options: &FormatOptions) -> Option<NearNow> {
    if options.syntax != Syntax::RelativeToNow {
        return None;
    }
    match full {
        [UnitCount {
            unit: Unit::Day,
            count: 1,
        }] if options.flags.contains(HumanizeFlags::ONE_DAY_WORDS) => Some(if negative {
            NearNow::Yesterday
        } else {
            NearNow::Tomorrow
        }),
        [UnitCount {
            unit: Unit::Day,
            count: 2,
        }] if options.flags.contains(HumanizeFlags::TWO_DAY_WORDS) => Some(if negative {
            NearNow::BeforeYesterday
        } else {
            NearNow::AfterTomorrow
        }),
        _ => None,
    }
}

/// Everything below `unit` amounts to at least half of one `unit`.
fn rounds_up(interval: &Interval, unit: Unit) -> bool {
    let remainder: u128 = Unit::ALL
        .iter()
        .filter(|smaller| **smaller > unit)
        .map(|&smaller| u128::from(interval.get(smaller)).saturating_mul(smaller.micros()))
        .fold(0, u128::saturating_add);
    remainder.saturating_mul(2) >= unit.micros()
}
