#![forbid(unsafe_code)]

//! Locale-aware interval humanization for FrankenTUI.
//!
//! Turns a calendar interval into a phrase such as "1 year 2 months ago",
//! "il y a un an" or "2yrs 3mos". The pipeline has two pure stages:
//!
//! 1. [`decompose`] picks the units to show (parts limit, minimum unit,
//!    rounding, near-now idioms).
//! 2. [`assemble`] renders them through a [`ResolvedLocale`] fallback chain
//!    (plural selection, articles, list joining, relative framing).
//!
//! Locales live in a [`LocaleRegistry`]; the process-wide one is seeded with
//! bundled resources and reached through [`resolve_locale`] and
//! [`register_locale`].
//!
//! ```
//! use ftui_humanize::{FormatOptions, Humanizer, Interval, Join};
//!
//! let fr = Humanizer::for_locale("fr").unwrap();
//! let interval = Interval::new().years(1).months(1).days(1).hours(1);
//! let options = FormatOptions::new().join(Join::Default);
//! assert_eq!(
//!     fr.format_with(&interval, &options).unwrap(),
//!     "1 an, 1 mois, 1 jour et 1 heure"
//! );
//! ```

pub mod assemble;
pub mod config;
pub mod data;
pub mod decompose;
pub mod error;
pub mod humanize;
pub mod interval;
pub mod locale;
pub mod options;
pub mod plural;
pub mod registry;
pub mod unit;

pub use assemble::{PhraseToken, assemble, render_tokens};
pub use config::{HumanizeConfig, HumanizeConfigError, HumanizeConfigParse, posix_locale_tag};
pub use decompose::{Decomposition, UnitCount, decompose};
pub use error::HumanizeError;
pub use humanize::{Humanizer, format_interval, plural_category, register_locale, resolve_locale};
pub use interval::Interval;
pub use locale::{Frame, ListSeparators, Locale, NearNow, required_keys};
pub use options::{FormatOptions, HumanizeFlags, Join, JoinFn, Syntax};
pub use plural::{PluralCategory, PluralForms, PluralRule};
pub use registry::{
    CoverageReport, DEFAULT_LOCALE, LocaleCoverage, LocaleRegistry, ResolvedLocale, normalize_tag,
};
pub use unit::Unit;
