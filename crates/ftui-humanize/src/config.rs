//! Environment-driven defaults for [`Humanizer`](crate::Humanizer).
//!
//! | Variable | Values | Field |
//! |----------|--------|-------|
//! | `FTUI_HUMANIZE_LOCALE` | locale tag | `locale` |
//! | `LC_ALL` / `LC_MESSAGES` / `LANG` | POSIX locale, e.g. `fr_FR.UTF-8` | `locale` (fallback) |
//! | `FTUI_HUMANIZE_PARTS` | positive integer or `all` | `parts` |
//! | `FTUI_HUMANIZE_SHORT` | bool | `short` |
//! | `FTUI_HUMANIZE_JOIN` | bool | `join` |
//! | `FTUI_HUMANIZE_MIN_UNIT` | unit name, e.g. `minute` or `ms` | `min_unit` |
//!
//! The first POSIX variable that is set decides the fallback locale. `C` and
//! `POSIX` select the default locale.
//!
//! Invalid values keep the default and are reported through
//! [`HumanizeConfigParse::errors`].

use core::fmt;
use std::env;

use crate::options::{FormatOptions, Join};
use crate::registry::DEFAULT_LOCALE;
use crate::unit::Unit;

const ENV_LOCALE: &str = "FTUI_HUMANIZE_LOCALE";
const ENV_PARTS: &str = "FTUI_HUMANIZE_PARTS";
const ENV_SHORT: &str = "FTUI_HUMANIZE_SHORT";
const ENV_JOIN: &str = "FTUI_HUMANIZE_JOIN";
const ENV_MIN_UNIT: &str = "FTUI_HUMANIZE_MIN_UNIT";

/// POSIX locale variables in precedence order.
const POSIX_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Process-level formatting defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanizeConfig {
    pub locale: String,
    /// `None` is unbounded.
    pub parts: Option<usize>,
    pub short: bool,
    /// Join with the locale's list conjunction instead of spaces.
    pub join: bool,
    /// Smallest unit shown.
    pub min_unit: Unit,
}

impl Default for HumanizeConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            parts: None,
            short: false,
            join: false,
            min_unit: Unit::Second,
        }
    }
}

/// Configuration parse diagnostics.
#[derive(Debug, Clone)]
pub struct HumanizeConfigParse {
    pub config: HumanizeConfig,
    pub errors: Vec<HumanizeConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanizeConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl HumanizeConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for HumanizeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for HumanizeConfigError {}

impl HumanizeConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> HumanizeConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config through an arbitrary lookup. Tests pass a map here.
    pub fn from_env_with<F>(mut get: F) -> HumanizeConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        match get(ENV_LOCALE) {
            Some(value) if !value.trim().is_empty() => config.locale = value.trim().to_string(),
            Some(value) => errors.push(HumanizeConfigError::new(
                "locale",
                value,
                "expected a locale tag",
            )),
            None => {
                if let Some(value) = POSIX_LOCALE_VARS
                    .iter()
                    .filter_map(|key| get(key))
                    .find(|value| !value.trim().is_empty())
                    && let Some(tag) = posix_locale_tag(&value)
                {
                    config.locale = tag;
                }
            }
        }

        if let Some(value) = get(ENV_PARTS) {
            match parse_parts(&value) {
                Some(parsed) => config.parts = parsed,
                None => errors.push(HumanizeConfigError::new(
                    "parts",
                    value,
                    "expected positive integer or all",
                )),
            }
        }

        if let Some(value) = get(ENV_SHORT) {
            match parse_bool(&value) {
                Some(parsed) => config.short = parsed,
                None => errors.push(HumanizeConfigError::new(
                    "short",
                    value,
                    "expected bool (1/0/true/false)",
                )),
            }
        }

        if let Some(value) = get(ENV_JOIN) {
            match parse_bool(&value) {
                Some(parsed) => config.join = parsed,
                None => errors.push(HumanizeConfigError::new(
                    "join",
                    value,
                    "expected bool (1/0/true/false)",
                )),
            }
        }

        if let Some(value) = get(ENV_MIN_UNIT) {
            match Unit::parse(&value) {
                Some(parsed) => config.min_unit = parsed,
                None => errors.push(HumanizeConfigError::new(
                    "min_unit",
                    value,
                    "expected unit name",
                )),
            }
        }

        for error in &errors {
            tracing::warn!(field = error.field, value = %error.value, "{}", error.message);
        }

        HumanizeConfigParse { config, errors }
    }

    /// Formatting options carrying these defaults.
    #[must_use]
    pub fn to_options(&self) -> FormatOptions {
        let mut options = FormatOptions::new()
            .short(self.short)
            .join(Join::from(self.join))
            .minimum_unit(self.min_unit);
        options.parts = self.parts;
        options
    }
}

/// Convert a POSIX locale (`fr_FR.UTF-8@euro`) to a tag (`fr-FR`).
///
/// `C` and `POSIX` carry no language and yield `None`.
#[must_use]
pub fn posix_locale_tag(value: &str) -> Option<String> {
    let base = value
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");
    match base.as_str() {
        "" | "C" | "POSIX" => None,
        _ => Some(base),
    }
}

#[inline]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `Some(None)` for `all`, `Some(Some(n))` for a positive integer.
#[inline]
fn parse_parts(value: &str) -> Option<Option<usize>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("all") {
        return Some(None);
    }
    match value.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(Some(n)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> HumanizeConfigParse {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HumanizeConfig::from_env_with(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_env_is_default() {
        let parsed = parse(&[]);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config, HumanizeConfig::default());
        assert_eq!(parsed.config.locale, "en");
    }

    #[test]
    fn explicit_locale_wins_over_posix() {
        let parsed = parse(&[(ENV_LOCALE, "de"), ("LANG", "fr_FR.UTF-8")]);
        assert_eq!(parsed.config.locale, "de");
    }

    #[test]
    fn posix_precedence() {
        let parsed = parse(&[("LC_ALL", "ru_RU.UTF-8"), ("LANG", "fr_FR.UTF-8")]);
        assert_eq!(parsed.config.locale, "ru-RU");

        let parsed = parse(&[("LC_MESSAGES", "de_DE"), ("LANG", "fr_FR.UTF-8@euro")]);
        assert_eq!(parsed.config.locale, "de-DE");

        // Empty counts as unset.
        let parsed = parse(&[("LC_ALL", ""), ("LANG", "fr_FR.UTF-8@euro")]);
        assert_eq!(parsed.config.locale, "fr-FR");
    }

    #[test]
    fn c_locale_stops_the_lookup() {
        let parsed = parse(&[("LC_ALL", "C"), ("LANG", "fr_FR.UTF-8@euro")]);
        assert_eq!(parsed.config.locale, "en");
        let parsed = parse(&[("LC_MESSAGES", "POSIX"), ("LANG", "ru_RU")]);
        assert_eq!(parsed.config.locale, "en");
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn min_unit_values() {
        assert_eq!(parse(&[(ENV_MIN_UNIT, "minutes")]).config.min_unit, Unit::Minute);
        assert_eq!(parse(&[(ENV_MIN_UNIT, "ms")]).config.min_unit, Unit::Millisecond);

        let parsed = parse(&[(ENV_MIN_UNIT, "fortnight")]);
        assert_eq!(parsed.config.min_unit, Unit::Second);
        assert_eq!(
            parsed.errors,
            vec![HumanizeConfigError::new("min_unit", "fortnight", "expected unit name")]
        );
    }

    #[test]
    fn posix_tag_normalization() {
        assert_eq!(posix_locale_tag("fr_FR.UTF-8@euro").as_deref(), Some("fr-FR"));
        assert_eq!(posix_locale_tag("de").as_deref(), Some("de"));
        assert_eq!(posix_locale_tag("POSIX"), None);
        assert_eq!(posix_locale_tag("  "), None);
    }

    #[test]
    fn parts_values() {
        assert_eq!(parse(&[(ENV_PARTS, "3")]).config.parts, Some(3));
        assert_eq!(parse(&[(ENV_PARTS, "ALL")]).config.parts, None);

        let parsed = parse(&[(ENV_PARTS, "0")]);
        assert_eq!(parsed.config.parts, None);
        assert_eq!(
            parsed.errors,
            vec![HumanizeConfigError::new(
                "parts",
                "0",
                "expected positive integer or all"
            )]
        );
    }

    #[test]
    fn bools_and_diagnostics() {
        let parsed = parse(&[(ENV_SHORT, "yes"), (ENV_JOIN, "maybe")]);
        assert!(parsed.config.short);
        assert!(!parsed.config.join);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].field, "join");
        assert_eq!(
            parsed.errors[0].to_string(),
            "join=maybe (expected bool (1/0/true/false))"
        );
    }

    #[test]
    fn blank_locale_is_reported() {
        let parsed = parse(&[(ENV_LOCALE, " ")]);
        assert_eq!(parsed.config.locale, "en");
        assert_eq!(parsed.errors[0].field, "locale");
    }

    #[test]
    fn options_carry_config() {
        let config = HumanizeConfig {
            locale: "fr".into(),
            parts: Some(2),
            short: true,
            join: true,
            min_unit: Unit::Hour,
        };
        let options = config.to_options();
        assert_eq!(options.parts, Some(2));
        assert_eq!(options.minimum_unit, Unit::Hour);
        assert!(options.short);
        assert!(matches!(options.join, Join::Default));
    }
}
