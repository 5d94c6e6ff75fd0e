//! CLDR plural rules for locale-aware pluralization.
//!
//! Implements the subset of the Unicode CLDR integer plural rules needed by
//! the bundled locales. Each [`PluralRule`] maps an absolute count to a
//! [`PluralCategory`].
//!
//! # Invariants
//!
//! 1. Every `PluralRule` maps any `u64` to exactly one `PluralCategory`.
//! 2. The `Other` category is always the catch-all fallback.
//! 3. Rules are pure functions of the magnitude; the sign of an interval
//!    never reaches this module.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "zero"),
            Self::One => write!(f, "one"),
            Self::Two => write!(f, "two"),
            Self::Few => write!(f, "few"),
            Self::Many => write!(f, "many"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Plural form templates keyed by category.
///
/// `exact` entries match a specific count and win over the category, which
/// is how fixed idioms such as Burmese "တစ်နှစ်" (one year) are expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralForms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
    pub one: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub few: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub many: Option<String>,
    pub other: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub exact: BTreeMap<u64, String>,
}

impl PluralForms {
    /// Forms that only distinguish `one` from `other`.
    #[must_use]
    pub fn binary(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
            ..Default::default()
        }
    }

    /// A single template used for every count.
    #[must_use]
    pub fn invariant(template: impl Into<String>) -> Self {
        let template = template.into();
        Self::binary(template.clone(), template)
    }

    /// Add an exact-count override.
    #[must_use]
    pub fn with_exact(mut self, count: u64, template: impl Into<String>) -> Self {
        self.exact.insert(count, template.into());
        self
    }

    /// Select the appropriate form for the given category, falling back
    /// to `other` if the specific form is absent.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::Zero => self.zero.as_deref().unwrap_or(&self.other),
            PluralCategory::One => &self.one,
            PluralCategory::Two => self.two.as_deref().unwrap_or(&self.other),
            PluralCategory::Few => self.few.as_deref().unwrap_or(&self.other),
            PluralCategory::Many => self.many.as_deref().unwrap_or(&self.other),
            PluralCategory::Other => &self.other,
        }
    }

    /// Select the form for a concrete count under `rule`.
    #[must_use]
    pub fn select_count(&self, rule: &PluralRule, count: u64) -> &str {
        match self.exact.get(&count) {
            Some(template) => template,
            None => self.select(rule.categorize(count)),
        }
    }
}

/// A plural rule function that maps a count to a plural category.
///
/// Built-in rules cover the CLDR language groups of the bundled locales.
/// Custom rules can be provided via the function pointer variant.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRule {
    /// English-like: `one` for 1, `other` for everything else.
    #[default]
    English,
    /// French-like: `one` for 0-1, `other` for everything else.
    French,
    /// Russian/East Slavic: `one` for 1, `few` for 2-4, `many` for 5-20,
    /// then repeats based on last two digits.
    Russian,
    /// Polish: `one` only for exactly 1, otherwise Russian-like few/many.
    Polish,
    /// Czech/Slovak: `one` for 1, `few` for 2-4, `other` otherwise.
    Czech,
    /// Arabic: `zero` for 0, `one` for 1, `two` for 2, `few` for 3-10,
    /// `many` for 11-99, `other` for 100+ (by last two digits).
    Arabic,
    /// Tamazight: `one` for 0-1 and 11-99, `other` otherwise.
    Tamazight,
    /// Chinese/Japanese/Korean/Burmese: always `other`.
    #[serde(rename = "cjk")]
    CJK,
    /// Custom rule function.
    #[serde(skip)]
    Custom(fn(u64) -> PluralCategory),
}

impl PluralRule {
    /// Determine the plural category for the given absolute count.
    #[must_use]
    pub fn categorize(&self, n: u64) -> PluralCategory {
        match self {
            Self::English => english_rule(n),
            Self::French => french_rule(n),
            Self::Russian => russian_rule(n),
            Self::Polish => polish_rule(n),
            Self::Czech => czech_rule(n),
            Self::Arabic => arabic_rule(n),
            Self::Tamazight => tamazight_rule(n),
            Self::CJK => PluralCategory::Other,
            Self::Custom(f) => f(n),
        }
    }

    /// Select the best rule for a locale tag (e.g., `"en"`, `"ru"`, `"ar"`).
    ///
    /// Falls back to English if the language is unknown.
    #[must_use]
    pub fn for_locale(lang: &str) -> Self {
        // Extract the primary language subtag
        let primary = lang.split(['-', '_']).next().unwrap_or(lang);

        match primary.to_ascii_lowercase().as_str() {
            "en" | "de" | "nl" | "sv" | "da" | "no" | "nb" | "nn" | "it" | "es" | "ca" | "el"
            | "hu" | "fi" | "et" | "he" | "tr" | "bg" => Self::English,
            "fr" | "pt" | "hi" | "bn" => Self::French,
            "ru" | "uk" | "be" | "hr" | "sr" | "bs" => Self::Russian,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::Czech,
            "ar" => Self::Arabic,
            "zgh" | "tzm" => Self::Tamazight,
            "zh" | "ja" | "ko" | "th" | "vi" | "id" | "ms" | "my" => Self::CJK,
            _ => Self::English,
        }
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "PluralRule::English"),
            Self::French => write!(f, "PluralRule::French"),
            Self::Russian => write!(f, "PluralRule::Russian"),
            Self::Polish => write!(f, "PluralRule::Polish"),
            Self::Czech => write!(f, "PluralRule::Czech"),
            Self::Arabic => write!(f, "PluralRule::Arabic"),
            Self::Tamazight => write!(f, "PluralRule::Tamazight"),
            Self::CJK => write!(f, "PluralRule::CJK"),
            Self::Custom(_) => write!(f, "PluralRule::Custom(...)"),
        }
    }
}

/// Custom rules compare by function address.
impl PartialEq for PluralRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => core::ptr::fn_addr_eq(*a, *b),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Eq for PluralRule {}

// ── Rule implementations ────────────────────────────────────────────

fn english_rule(n: u64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn french_rule(n: u64) -> PluralCategory {
    if n <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn russian_rule(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

fn polish_rule(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if n == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

fn czech_rule(n: u64) -> PluralCategory {
    match n {
        1 => PluralCategory::One,
        2..=4 => PluralCategory::Few,
        _ => PluralCategory::Other,
    }
}

fn arabic_rule(n: u64) -> PluralCategory {
    let mod100 = n % 100;
    match n {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        _ if (3..=10).contains(&mod100) => PluralCategory::Few,
        _ if (11..=99).contains(&mod100) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}

fn tamazight_rule(n: u64) -> PluralCategory {
    if n <= 1 || (11..=99).contains(&n) {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}
