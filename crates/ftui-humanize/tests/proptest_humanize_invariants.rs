//! Property-based invariant tests for decomposition and phrase assembly.
//!
//! 1. Emitted units are strictly descending and never exceed `parts`.
//! 2. An all-zero interval decomposes to exactly one entry.
//! 3. Every bundled locale renders every unit for any count.
//! 4. A single-unit interval renders as its plural template.
//! 5. Rounding moves the last count by at most one, never down.
//! 6. Direction only affects framed output.
//! 7. Formatting never fails for bundled locales and valid options.

use ftui_humanize::data::BUNDLED;
use ftui_humanize::{
    FormatOptions, HumanizeFlags, Interval, Join, Syntax, Unit, decompose, format_interval,
    resolve_locale,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_interval() -> impl Strategy<Value = Interval> {
    (
        (0u64..=40, 0u64..=24, 0u64..=10, 0u64..=60),
        (0u64..=48, 0u64..=120, 0u64..=120, 0u64..=3_000_000),
        any::<bool>(),
    )
        .prop_map(|((y, mo, w, d), (h, mi, s, us), negative)| {
            Interval::new()
                .years(y)
                .months(mo)
                .weeks(w)
                .days(d)
                .hours(h)
                .minutes(mi)
                .seconds(s)
                .micros(us)
                .with_sign(negative)
        })
}

fn arb_unit() -> impl Strategy<Value = Unit> {
    proptest::sample::select(Unit::ALL.to_vec())
}

fn arb_syntax() -> impl Strategy<Value = Syntax> {
    prop_oneof![
        Just(Syntax::None),
        Just(Syntax::RelativeToNow),
        Just(Syntax::RelativeToOther),
    ]
}

fn arb_options() -> impl Strategy<Value = FormatOptions> {
    (
        proptest::option::of(1usize..=9),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        arb_syntax(),
        0u8..16,
        arb_unit(),
    )
        .prop_map(|(parts, join, short, a_unit, round, syntax, flags, minimum)| {
            let mut options = FormatOptions::new()
                .join(join)
                .short(short)
                .a_unit(a_unit)
                .round(round)
                .syntax(syntax)
                .flags(HumanizeFlags::from_bits_truncate(flags))
                .minimum_unit(minimum);
            options.parts = parts;
            options
        })
}

fn bundled_ids() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(id, _)| *id)
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Decomposition shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn units_descend_within_parts(interval in arb_interval(), options in arb_options()) {
        let d = decompose(&interval, &options);
        if d.idiom.is_some() {
            prop_assert!(d.units.is_empty());
        } else {
            prop_assert!(!d.units.is_empty());
            prop_assert!(d.units.len() <= options.parts.unwrap_or(usize::MAX));
            for pair in d.units.windows(2) {
                prop_assert!(pair[0].unit < pair[1].unit, "not descending: {:?}", d.units);
            }
            for uc in &d.units {
                prop_assert!(uc.unit <= options.minimum_unit);
            }
        }
        prop_assert_eq!(d.negative, interval.is_negative() || interval.is_zero());
    }

    #[test]
    fn zero_interval_has_one_entry(options in arb_options(), negative in any::<bool>()) {
        let d = decompose(&Interval::new().with_sign(negative), &options);
        prop_assert_eq!(d.units.len(), 1);
        prop_assert!(d.negative);
        prop_assert_eq!(d.units[0].unit, options.minimum_unit);
        let expected = u64::from(options.flags.contains(HumanizeFlags::NO_ZERO_DIFF));
        prop_assert_eq!(d.units[0].count, expected);
        prop_assert_eq!(d.zero, expected == 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Plural totality and single-unit round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_locale_renders_every_unit(unit in arb_unit(), count in 0u64..=10_000, short in any::<bool>()) {
        for id in bundled_ids() {
            let locale = resolve_locale(id).unwrap();
            let text = locale.render_unit(unit, count, short);
            prop_assert!(text.is_ok(), "{} {:?} {}: {:?}", id, unit, count, text);
            let text = text.unwrap();
            prop_assert!(!text.contains("{count}"), "unsubstituted placeholder: {}", text);
        }
    }

    #[test]
    fn single_unit_renders_template(unit in arb_unit(), count in 1u64..=999) {
        let en = resolve_locale("en").unwrap();
        let interval = match unit {
            Unit::Year => Interval::new().years(count),
            Unit::Month => Interval::new().months(count),
            Unit::Week => Interval::new().weeks(count),
            Unit::Day => Interval::new().days(count),
            Unit::Hour => Interval::new().hours(count),
            Unit::Minute => Interval::new().minutes(count),
            Unit::Second => Interval::new().seconds(count),
            Unit::Millisecond => Interval::new().millis(count),
            Unit::Microsecond => Interval::new().micros(count),
        };
        let options = FormatOptions::new().minimum_unit(Unit::Microsecond);
        let text = format_interval(&interval, &en, &options).unwrap();
        let expected = if count == 1 {
            format!("1 {}", unit.key())
        } else {
            format!("{count} {}s", unit.key())
        };
        prop_assert_eq!(text, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Rounding bound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rounding_adds_at_most_one(interval in arb_interval(), parts in 1usize..=4) {
        let truncated = decompose(&interval, &FormatOptions::new().parts(parts));
        let rounded = decompose(&interval, &FormatOptions::new().parts(parts).round(true));
        prop_assert_eq!(truncated.units.len(), rounded.units.len());
        let n = truncated.units.len();
        prop_assert_eq!(&truncated.units[..n - 1], &rounded.units[..n - 1]);
        let (t, r) = (truncated.units[n - 1], rounded.units[n - 1]);
        prop_assert_eq!(t.unit, r.unit);
        prop_assert!(r.count == t.count || r.count == t.count + 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Direction and totality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unframed_output_ignores_sign(interval in arb_interval()) {
        let en = resolve_locale("en").unwrap();
        let options = FormatOptions::new().join(Join::Default);
        let forward = format_interval(&interval.with_sign(false), &en, &options).unwrap();
        let backward = format_interval(&interval.with_sign(true), &en, &options).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn bundled_locales_never_fail(interval in arb_interval(), options in arb_options()) {
        for id in bundled_ids() {
            let locale = resolve_locale(id).unwrap();
            let text = format_interval(&interval, &locale, &options);
            prop_assert!(text.is_ok(), "{}: {:?}", id, text);
            prop_assert!(!text.unwrap().is_empty());
        }
    }
}
