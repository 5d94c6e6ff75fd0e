//! Locale records: the translation data a single locale contributes.
//!
//! A [`Locale`] is plain data. It does not know about fallbacks; the
//! registry layers records into a [`ResolvedLocale`](crate::ResolvedLocale)
//! chain and every lookup walks that chain.
//!
//! # Templates
//!
//! Unit templates carry one `{count}` placeholder ("{count} years"), frame
//! templates one `{time}` placeholder ("il y a {time}"). Interpolation is a
//! single pass: substituted values are never re-scanned.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "id": "fr",
//!   "plural": "french",
//!   "units": { "year": { "one": "{count} an", "other": "{count} ans" } },
//!   "short_units": { "year": { "one": "{count}a", "other": "{count}a" } },
//!   "articles": { "year": "un an" },
//!   "relative": { "ago": "il y a {time}", "from_now": "dans {time}" },
//!   "words": { "yesterday": "hier" },
//!   "list": { "separator": ", ", "last": " et " }
//! }
//! ```

use core::fmt;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::HumanizeError;
use crate::plural::{PluralForms, PluralRule};
use crate::unit::Unit;

/// Relative-time frame a phrase can be wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    /// "{time} ago"
    Ago,
    /// "{time} from now"
    FromNow,
    /// "{time} before"
    Before,
    /// "{time} after"
    After,
}

impl Frame {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ago => "ago",
            Self::FromNow => "from_now",
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fixed near-now words that replace a numeric phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NearNow {
    JustNow,
    Yesterday,
    Tomorrow,
    BeforeYesterday,
    AfterTomorrow,
}

impl NearNow {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::JustNow => "just_now",
            Self::Yesterday => "yesterday",
            Self::Tomorrow => "tomorrow",
            Self::BeforeYesterday => "before_yesterday",
            Self::AfterTomorrow => "after_tomorrow",
        }
    }
}

/// List separators used by the locale's default join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSeparators {
    /// Between all items except the last two.
    pub separator: String,
    /// Between the last two items.
    pub last: String,
}

/// Translation data for one locale tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Locale {
    /// Locale tag (e.g., `"en"`, `"fr-CA"`, `"zgh"`).
    pub id: String,
    /// Explicit plural rule; derived from `id` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<PluralRule>,
    #[serde(default)]
    pub units: HashMap<Unit, PluralForms>,
    #[serde(default)]
    pub short_units: HashMap<Unit, PluralForms>,
    /// Indefinite-article phrase per unit ("a year", "une heure").
    #[serde(default)]
    pub articles: HashMap<Unit, String>,
    /// Frame templates with a `{time}` placeholder.
    #[serde(default)]
    pub relative: HashMap<Frame, String>,
    /// Whole-phrase overrides for a single framed unit ("vor {count} Jahren").
    #[serde(default)]
    pub unit_relative: HashMap<Frame, HashMap<Unit, PluralForms>>,
    #[serde(default)]
    pub words: HashMap<NearNow, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListSeparators>,
    /// Auxiliary data (meridiem names, etc.) carried for other formatters.
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

impl Locale {
    /// Create an empty record for `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Decode a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, HumanizeError> {
        let locale: Self = serde_json::from_str(json)?;
        if locale.id.trim().is_empty() {
            return Err(HumanizeError::LocaleData("locale id is empty".into()));
        }
        Ok(locale)
    }

    /// Encode the record as pretty JSON.
    pub fn to_json(&self) -> Result<String, HumanizeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The effective plural rule.
    #[must_use]
    pub fn plural_rule(&self) -> PluralRule {
        self.plural.unwrap_or_else(|| PluralRule::for_locale(&self.id))
    }

    #[must_use]
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.plural = Some(rule);
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: Unit, forms: PluralForms) -> Self {
        self.units.insert(unit, forms);
        self
    }

    #[must_use]
    pub fn with_short_unit(mut self, unit: Unit, forms: PluralForms) -> Self {
        self.short_units.insert(unit, forms);
        self
    }

    #[must_use]
    pub fn with_article(mut self, unit: Unit, phrase: impl Into<String>) -> Self {
        self.articles.insert(unit, phrase.into());
        self
    }

    #[must_use]
    pub fn with_relative(mut self, frame: Frame, template: impl Into<String>) -> Self {
        self.relative.insert(frame, template.into());
        self
    }

    #[must_use]
    pub fn with_unit_relative(mut self, frame: Frame, unit: Unit, forms: PluralForms) -> Self {
        self.unit_relative
            .entry(frame)
            .or_default()
            .insert(unit, forms);
        self
    }

    #[must_use]
    pub fn with_word(mut self, word: NearNow, phrase: impl Into<String>) -> Self {
        self.words.insert(word, phrase.into());
        self
    }

    #[must_use]
    pub fn with_list(mut self, separator: impl Into<String>, last: impl Into<String>) -> Self {
        self.list = Some(ListSeparators {
            separator: separator.into(),
            last: last.into(),
        });
        self
    }

    /// Unit forms for this locale only. Short lookups fall back to the
    /// long form of the same locale before the caller moves on to the next
    /// locale in the chain.
    #[must_use]
    pub fn unit_forms(&self, unit: Unit, short: bool) -> Option<&PluralForms> {
        if short && let Some(forms) = self.short_units.get(&unit) {
            return Some(forms);
        }
        self.units.get(&unit)
    }

    #[must_use]
    pub fn article(&self, unit: Unit) -> Option<&str> {
        self.articles.get(&unit).map(String::as_str)
    }

    #[must_use]
    pub fn relative(&self, frame: Frame) -> Option<&str> {
        self.relative.get(&frame).map(String::as_str)
    }

    #[must_use]
    pub fn unit_relative(&self, frame: Frame, unit: Unit) -> Option<&PluralForms> {
        self.unit_relative.get(&frame).and_then(|m| m.get(&unit))
    }

    #[must_use]
    pub fn word(&self, word: NearNow) -> Option<&str> {
        self.words.get(&word).map(String::as_str)
    }

    /// Keys this record provides, in the same notation as
    /// [`required_keys`].
    #[must_use]
    pub fn provided_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for unit in self.units.keys() {
            keys.push(format!("unit.{unit}"));
        }
        for unit in self.short_units.keys() {
            keys.push(format!("short.{unit}"));
        }
        for unit in self.articles.keys() {
            keys.push(format!("article.{unit}"));
        }
        for frame in self.relative.keys() {
            keys.push(format!("relative.{frame}"));
        }
        for word in self.words.keys() {
            keys.push(format!("word.{}", word.key()));
        }
        if self.list.is_some() {
            keys.push("list".to_string());
        }
        keys.sort_unstable();
        keys
    }
}

/// Every key a complete default locale must provide.
///
/// Short forms are not required: a missing short form falls back to the
/// long form of the same locale.
#[must_use]
pub fn required_keys() -> Vec<String> {
    let mut keys: Vec<String> = Unit::ALL
        .iter()
        .flat_map(|unit| [format!("unit.{unit}"), format!("article.{unit}")])
        .collect();
    keys.extend(
        [Frame::Ago, Frame::FromNow, Frame::Before, Frame::After]
            .iter()
            .map(|frame| format!("relative.{frame}")),
    );
    keys.extend(
        [
            NearNow::JustNow,
            NearNow::Yesterday,
            NearNow::Tomorrow,
            NearNow::BeforeYesterday,
            NearNow::AfterTomorrow,
        ]
        .iter()
        .map(|word| format!("word.{}", word.key())),
    );
    keys.push("list".to_string());
    keys.sort_unstable();
    keys
}

/// Single-pass `{name}` interpolation. Unmatched tokens left as-is.
pub(crate) fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            // Try to read a token name until '}'
            let mut token = String::new();
            let mut found_close = false;
            for c in chars.by_ref() {
                if c == '}' {
                    found_close = true;
                    break;
                }
                token.push(c);
            }

            if found_close {
                if let Some(&(_, value)) = args.iter().find(|&&(name, _)| name == token) {
                    result.push_str(value);
                } else {
                    result.push('{');
                    result.push_str(&token);
                    result.push('}');
                }
            } else {
                // Unclosed brace: emit as-is
                result.push('{');
                result.push_str(&token);
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french() -> Locale {
        Locale::new("fr")
            .with_unit(Unit::Year, PluralForms::binary("{count} an", "{count} ans"))
            .with_unit(Unit::Day, PluralForms::binary("{count} jour", "{count} jours"))
            .with_short_unit(Unit::Day, PluralForms::invariant("{count}j"))
            .with_article(Unit::Year, "un an")
            .with_relative(Frame::Ago, "il y a {time}")
            .with_word(NearNow::Yesterday, "hier")
            .with_list(", ", " et ")
    }

    #[test]
    fn plural_rule_derived_from_id() {
        assert_eq!(french().plural_rule(), PluralRule::French);
        assert_eq!(
            french().with_plural_rule(PluralRule::CJK).plural_rule(),
            PluralRule::CJK
        );
    }

    #[test]
    fn short_falls_back_to_long_within_locale() {
        let fr = french();
        assert_eq!(fr.unit_forms(Unit::Day, true).unwrap().one, "{count}j");
        assert_eq!(fr.unit_forms(Unit::Year, true).unwrap().one, "{count} an");
        assert!(fr.unit_forms(Unit::Hour, false).is_none());
    }

    #[test]
    fn accessors() {
        let fr = french();
        assert_eq!(fr.article(Unit::Year), Some("un an"));
        assert_eq!(fr.relative(Frame::Ago), Some("il y a {time}"));
        assert_eq!(fr.relative(Frame::After), None);
        assert_eq!(fr.word(NearNow::Yesterday), Some("hier"));
        assert_eq!(fr.list.as_ref().unwrap().last, " et ");
    }

    #[test]
    fn json_round_trip_preserves_templates() {
        let fr = french();
        let json = fr.to_json().unwrap();
        let back = Locale::from_json(&json).unwrap();
        assert_eq!(back.id, "fr");
        assert_eq!(back.units, fr.units);
        assert_eq!(back.words, fr.words);
    }

    #[test]
    fn json_with_exact_and_plural_rule() {
        let my = Locale::from_json(
            r#"{
                "id": "my",
                "plural": "cjk",
                "units": {
                    "year": { "one": "{count} နှစ်", "other": "{count} နှစ်", "exact": { "1": "တစ်နှစ်" } }
                }
            }"#,
        )
        .unwrap();
        let forms = my.unit_forms(Unit::Year, false).unwrap();
        assert_eq!(forms.select_count(&my.plural_rule(), 1), "တစ်နှစ်");
    }

    #[test]
    fn json_rejects_empty_id() {
        assert!(matches!(
            Locale::from_json(r#"{ "id": " " }"#),
            Err(HumanizeError::LocaleData(_))
        ));
        assert!(Locale::from_json("not json").is_err());
    }

    #[test]
    fn provided_keys_sorted() {
        let keys = french().provided_keys();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert!(keys.contains(&"unit.year".to_string()));
        assert!(keys.contains(&"short.day".to_string()));
        assert!(keys.contains(&"list".to_string()));
    }

    #[test]
    fn required_keys_cover_every_unit() {
        let keys = required_keys();
        for unit in Unit::ALL {
            assert!(keys.contains(&format!("unit.{unit}")));
        }
        assert!(keys.contains(&"word.just_now".to_string()));
    }

    #[test]
    fn interpolation_edge_cases() {
        assert_eq!(interpolate("{count} ans", &[("count", "2")]), "2 ans");
        // Unclosed brace
        assert_eq!(interpolate("Hello {world", &[]), "Hello {world");
        // Empty braces
        assert_eq!(interpolate("Hello {}", &[]), "Hello {}");
        // Multiple occurrences
        assert_eq!(interpolate("{x} and {x}", &[("x", "A")]), "A and A");
        // Substituted values are not re-scanned
        assert_eq!(
            interpolate("{time}", &[("time", "{count}"), ("count", "1")]),
            "{count}"
        );
    }
}
