//! Entry points: the free formatting function, global-registry helpers and
//! the [`Humanizer`] context holder.

use crate::assemble::assemble;
use crate::config::HumanizeConfig;
use crate::decompose::decompose;
use crate::error::HumanizeError;
use crate::interval::Interval;
use crate::locale::Locale;
use crate::options::{FormatOptions, Syntax};
use crate::plural::PluralCategory;
use crate::registry::{DEFAULT_LOCALE, LocaleRegistry, ResolvedLocale};

/// Render `interval` as a phrase in `locale`.
///
/// ```
/// use ftui_humanize::{FormatOptions, Interval, Syntax, format_interval, resolve_locale};
///
/// let en = resolve_locale("en").unwrap();
/// let interval = Interval::new().years(1).months(2).negated();
/// let options = FormatOptions::new().syntax(Syntax::RelativeToNow);
/// assert_eq!(format_interval(&interval, &en, &options).unwrap(), "1 year 2 months ago");
/// ```
pub fn format_interval(
    interval: &Interval,
    locale: &ResolvedLocale,
    options: &FormatOptions,
) -> Result<String, HumanizeError> {
    options.validate()?;
    let decomposition = decompose(interval, options);
    assemble(&decomposition, locale, options)
}

/// Plural category of `quantity` under the locale's primary rule.
#[must_use]
pub fn plural_category(locale: &ResolvedLocale, quantity: u64) -> PluralCategory {
    locale.plural_category(quantity)
}

/// Add or replace a locale in the process-wide registry.
pub fn register_locale(locale: Locale) {
    LocaleRegistry::global().register(locale);
}

/// Resolve a tag against the process-wide registry.
pub fn resolve_locale(id: &str) -> Result<ResolvedLocale, HumanizeError> {
    LocaleRegistry::global().resolve(id)
}

/// A resolved locale bundled with default options.
#[derive(Debug, Clone)]
pub struct Humanizer {
    locale: ResolvedLocale,
    options: FormatOptions,
}

impl Humanizer {
    #[must_use]
    pub fn new(locale: ResolvedLocale, options: FormatOptions) -> Self {
        Self { locale, options }
    }

    /// Global-registry locale with default options.
    pub fn for_locale(id: &str) -> Result<Self, HumanizeError> {
        Ok(Self::new(resolve_locale(id)?, FormatOptions::new()))
    }

    /// Locale and options from configuration.
    ///
    /// An unresolvable configured locale falls back to the default so a bad
    /// `LANG` never disables formatting.
    pub fn from_config(config: &HumanizeConfig) -> Result<Self, HumanizeError> {
        let locale = match resolve_locale(&config.locale) {
            Ok(locale) => locale,
            Err(err) => {
                tracing::warn!(locale = %config.locale, error = %err, "falling back to default locale");
                resolve_locale(DEFAULT_LOCALE)?
            }
        };
        Ok(Self::new(locale, config.to_options()))
    }

    #[must_use]
    pub fn locale(&self) -> &ResolvedLocale {
        &self.locale
    }

    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format with the stored options.
    pub fn format(&self, interval: &Interval) -> Result<String, HumanizeError> {
        format_interval(interval, &self.locale, &self.options)
    }

    /// Format with one-off options.
    pub fn format_with(
        &self,
        interval: &Interval,
        options: &FormatOptions,
    ) -> Result<String, HumanizeError> {
        format_interval(interval, &self.locale, options)
    }

    /// Stored options with parts unbounded, framed relative to now.
    pub fn diff(&self, interval: &Interval) -> Result<String, HumanizeError> {
        let options = self
            .options
            .clone()
            .unbounded()
            .syntax(Syntax::RelativeToNow);
        format_interval(interval, &self.locale, &options)
    }
}
