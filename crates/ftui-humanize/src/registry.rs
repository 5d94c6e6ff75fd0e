//! Locale registry with fallback-chain resolution.
//!
//! # Invariants
//!
//! 1. **Fallback chain terminates**: a tag resolves to itself, then each
//!    shorter dash-delimited prefix, then the default locale. Tags absent
//!    from the registry are skipped; the chain is never empty on success.
//!
//! 2. **Atomic replacement**: records are stored as `Arc<Locale>` and
//!    `register` swaps a whole `Arc`, so readers never observe a
//!    half-updated record.
//!
//! 3. **Cache coherence**: resolved chains are cached under the most
//!    specific registered tag of the chain, so the cache never holds more
//!    entries than the registry does. `register` clears the cache while still holding the entry write lock,
//!    and `resolve` fills the cache while holding the entry read lock, so a
//!    stale chain can never be cached after a registration.
//!
//! 4. **Thread safety**: `LocaleRegistry` is `Send + Sync`.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | No chain element registered, default included | `UnknownLocale` |
//! | Missing key | Key not in any chain element | `MissingTranslation` |
//! | Poisoned lock | Writer panicked | Guard recovered; records are whole `Arc`s |

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::data;
use crate::error::HumanizeError;
use crate::locale::{Frame, ListSeparators, Locale, NearNow, interpolate, required_keys};
use crate::plural::{PluralCategory, PluralRule};
use crate::unit::Unit;

/// Tag of the locale every chain ends with unless configured otherwise.
pub const DEFAULT_LOCALE: &str = "en";

static GLOBAL: LazyLock<LocaleRegistry> = LazyLock::new(LocaleRegistry::with_bundled);

#[derive(Debug, Clone)]
struct ChainEntry {
    locale: Arc<Locale>,
    rule: PluralRule,
}

/// A locale tag resolved into its ordered fallback chain.
///
/// Cheap to clone. Every lookup walks the chain front to back and computes
/// plural categories with the rule of the locale that supplies the form.
#[derive(Debug, Clone)]
pub struct ResolvedLocale {
    id: String,
    chain: Arc<[ChainEntry]>,
}

impl ResolvedLocale {
    /// The tag that was requested.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The most specific registered record.
    #[must_use]
    pub fn primary(&self) -> &Locale {
        &self.chain[0].locale
    }

    /// Tags of the chain, most specific first.
    #[must_use]
    pub fn chain_ids(&self) -> Vec<&str> {
        self.chain.iter().map(|e| e.locale.id.as_str()).collect()
    }

    /// Plural category for an absolute quantity under the primary locale's rule.
    #[must_use]
    pub fn plural_category(&self, quantity: u64) -> PluralCategory {
        self.chain[0].rule.categorize(quantity)
    }

    fn missing(&self, key: impl Into<String>) -> HumanizeError {
        HumanizeError::missing(&self.id, key)
    }

    /// Render a unit phrase ("2 ans", "1yr").
    pub fn render_unit(&self, unit: Unit, count: u64, short: bool) -> Result<String, HumanizeError> {
        self.chain
            .iter()
            .find_map(|entry| {
                entry
                    .locale
                    .unit_forms(unit, short)
                    .map(|forms| forms.select_count(&entry.rule, count))
            })
            .map(|template| interpolate(template, &[("count", &count.to_string())]))
            .ok_or_else(|| {
                let table = if short { "short" } else { "unit" };
                self.missing(format!("{table}.{unit}"))
            })
    }

    /// Indefinite-article phrase for a unit ("an hour").
    pub fn article(&self, unit: Unit) -> Result<&str, HumanizeError> {
        self.chain
            .iter()
            .find_map(|entry| entry.locale.article(unit))
            .ok_or_else(|| self.missing(format!("article.{unit}")))
    }

    /// Frame template with a `{time}` placeholder.
    pub fn relative(&self, frame: Frame) -> Result<&str, HumanizeError> {
        self.chain
            .iter()
            .find_map(|entry| entry.locale.relative(frame))
            .ok_or_else(|| self.missing(format!("relative.{frame}")))
    }

    /// Whole-phrase override for a single framed unit, if any chain element has one.
    #[must_use]
    pub fn render_unit_relative(&self, frame: Frame, unit: Unit, count: u64) -> Option<String> {
        self.chain.iter().find_map(|entry| {
            entry.locale.unit_relative(frame, unit).map(|forms| {
                interpolate(
                    forms.select_count(&entry.rule, count),
                    &[("count", &count.to_string())],
                )
            })
        })
    }

    /// Near-now word ("yesterday", "à l'instant").
    pub fn word(&self, word: NearNow) -> Result<&str, HumanizeError> {
        self.chain
            .iter()
            .find_map(|entry| entry.locale.word(word))
            .ok_or_else(|| self.missing(format!("word.{}", word.key())))
    }

    /// Default list separators.
    pub fn list(&self) -> Result<&ListSeparators, HumanizeError> {
        self.chain
            .iter()
            .find_map(|entry| entry.locale.list.as_ref())
            .ok_or_else(|| self.missing("list"))
    }

    fn has_key(&self, key: &str) -> bool {
        self.chain
            .iter()
            .any(|entry| entry.locale.provided_keys().iter().any(|k| k == key))
    }
}

/// Process-wide or standalone mapping from locale tags to records.
#[derive(Debug)]
pub struct LocaleRegistry {
    default_key: String,
    entries: RwLock<HashMap<String, Arc<Locale>>>,
    resolved: RwLock<HashMap<String, Arc<[ChainEntry]>>>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl LocaleRegistry {
    /// Create an empty registry whose chains end with `default_id`.
    #[must_use]
    pub fn new(default_id: &str) -> Self {
        Self {
            default_key: normalize_tag(default_id),
            entries: RwLock::new(HashMap::new()),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry seeded with the bundled locale resources.
    ///
    /// A bundled resource that fails to decode is logged and skipped.
    #[must_use]
    pub fn with_bundled() -> Self {
        let registry = Self::default();
        for (name, json) in data::BUNDLED {
            match Locale::from_json(json) {
                Ok(locale) => registry.register(locale),
                Err(err) => tracing::error!(resource = name, %err, "bundled locale failed to decode"),
            }
        }
        tracing::debug!(locales = registry.len(), "seeded bundled locales");
        registry
    }

    /// The process-wide registry, seeded with bundled locales on first use.
    #[must_use]
    pub fn global() -> &'static LocaleRegistry {
        &GLOBAL
    }

    /// Normalized tag of the default locale.
    #[must_use]
    pub fn default_id(&self) -> &str {
        &self.default_key
    }

    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Locale>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Locale>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<[ChainEntry]>>> {
        self.resolved.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<[ChainEntry]>>> {
        self.resolved.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or replace the record for `locale.id`.
    pub fn register(&self, locale: Locale) {
        let key = normalize_tag(&locale.id);
        let mut entries = self.write_entries();
        let replaced = entries.insert(key.clone(), Arc::new(locale)).is_some();
        self.write_cache().clear();
        tracing::debug!(locale = %key, replaced, "registered locale");
    }

    /// Whether a record is registered under exactly this tag.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.read_entries().contains_key(&normalize_tag(id))
    }

    /// Number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// All registered tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read_entries().keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve `id` into its fallback chain.
    ///
    /// The returned [`ResolvedLocale::id`] is always `id` as given, even when
    /// the chain comes from the cache.
    pub fn resolve(&self, id: &str) -> Result<ResolvedLocale, HumanizeError> {
        let key = normalize_tag(id);
        if let Some(chain) = self.read_cache().get(&key) {
            return Ok(ResolvedLocale {
                id: id.to_string(),
                chain: Arc::clone(chain),
            });
        }

        let entries = self.read_entries();
        let candidates = fallback_candidates(&key, &self.default_key);
        let Some(anchor) = candidates.iter().find(|tag| entries.contains_key(*tag)) else {
            return Err(HumanizeError::UnknownLocale(id.to_string()));
        };
        if *anchor != key {
            tracing::trace!(requested = %key, resolved = %anchor, "locale fell back");
            if let Some(chain) = self.read_cache().get(anchor) {
                return Ok(ResolvedLocale {
                    id: id.to_string(),
                    chain: Arc::clone(chain),
                });
            }
        }

        // The candidates from the anchor onward are the anchor's own chain.
        let chain: Arc<[ChainEntry]> = candidates
            .iter()
            .filter_map(|tag| entries.get(tag))
            .map(|locale| ChainEntry {
                rule: locale.plural_rule(),
                locale: Arc::clone(locale),
            })
            .collect();
        self.write_cache().insert(anchor.clone(), Arc::clone(&chain));
        Ok(ResolvedLocale {
            id: id.to_string(),
            chain,
        })
    }

    /// Keys from the required set that `id` cannot supply even after fallback.
    pub fn missing_keys(&self, id: &str) -> Result<Vec<String>, HumanizeError> {
        let resolved = self.resolve(id)?;
        let mut missing: Vec<String> = required_keys()
            .into_iter()
            .filter(|key| !resolved.has_key(key))
            .collect();
        missing.sort_unstable();
        Ok(missing)
    }

    /// Coverage of the required key set for every registered locale.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let required = required_keys();
        let total = required.len();

        let mut records: Vec<Arc<Locale>> = self.read_entries().values().cloned().collect();
        records.sort_unstable_by(|a, b| a.id.cmp(&b.id));

        let locales = records
            .into_iter()
            .map(|locale| {
                let provided = locale.provided_keys();
                let own_missing: Vec<String> = required
                    .iter()
                    .filter(|key| !provided.contains(key))
                    .cloned()
                    .collect();
                let present = total.saturating_sub(own_missing.len());
                let unresolved = self.missing_keys(&locale.id).unwrap_or(own_missing.clone());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale: locale.id.clone(),
                    present,
                    missing: own_missing,
                    unresolved,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}

/// Coverage report for a registry.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Number of keys in the required set.
    pub total_keys: usize,
    /// Per-locale coverage data, sorted by tag.
    pub locales: Vec<LocaleCoverage>,
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Required keys the record provides itself.
    pub present: usize,
    /// Required keys the record leaves to its fallbacks.
    pub missing: Vec<String>,
    /// Required keys missing even after fallback.
    pub unresolved: Vec<String>,
    /// Own coverage as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}

/// Lowercase a tag and unify `_` separators to `-`.
#[must_use]
pub fn normalize_tag(id: &str) -> String {
    id.trim().replace('_', "-").to_ascii_lowercase()
}

/// "zh-hant-tw" → ["zh-hant-tw", "zh-hant", "zh", default].
fn fallback_candidates(key: &str, default_key: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut tag = key;
    while !tag.is_empty() {
        candidates.push(tag.to_string());
        match tag.rfind('-') {
            Some(idx) => tag = &tag[..idx],
            None => break,
        }
    }
    if !candidates.iter().any(|c| c == default_key) {
        candidates.push(default_key.to_string());
    }
    candidates
}
