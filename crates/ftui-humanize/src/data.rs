//! Bundled locale resources.
//!
//! Compiled into the binary so the default locale is always complete. The
//! registry decodes these at seed time; see
//! [`LocaleRegistry::with_bundled`](crate::LocaleRegistry::with_bundled).

/// `(resource name, JSON)` pairs. English must stay complete.
pub const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("ar", include_str!("../locales/ar.json")),
    ("bg", include_str!("../locales/bg.json")),
    ("ca", include_str!("../locales/ca.json")),
    ("cs", include_str!("../locales/cs.json")),
    ("da", include_str!("../locales/da.json")),
    ("de", include_str!("../locales/de.json")),
    ("el", include_str!("../locales/el.json")),
    ("fr", include_str!("../locales/fr.json")),
    ("ja", include_str!("../locales/ja.json")),
    ("my", include_str!("../locales/my.json")),
    ("pl", include_str!("../locales/pl.json")),
    ("ru", include_str!("../locales/ru.json")),
    ("zgh", include_str!("../locales/zgh.json")),
];
