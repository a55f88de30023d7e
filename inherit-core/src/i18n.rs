//! Locale bundles for rendering estimates.
//!
//! Bundles are embedded JSON documents addressed with dotted keys
//! (`"hair.light_brown"`). Lookups fall back to English, then to the key itself.
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::constants::DEFAULT_LANG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        rtl: false,
    },
    LocaleMeta {
        code: "ar",
        rtl: true,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("ar", include_str!("../i18n/ar.json")),
];

/// Supported locales with their direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

fn load_translations(lang: &str) -> Value {
    let raw = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::error!("locale bundle {lang} is not valid JSON: {err}");
        Value::Object(serde_json::Map::new())
    })
}

#[derive(Debug, Clone)]
pub struct I18nBundle {
    lang: &'static str,
    rtl: bool,
    translations: Value,
    fallback: Value,
}

impl I18nBundle {
    /// Build a bundle for `lang`; unknown codes get the English bundle.
    #[must_use]
    pub fn new(lang: &str) -> Self {
        let meta = LOCALE_META
            .iter()
            .find(|m| m.code == lang)
            .unwrap_or(&LOCALE_META[0]);
        if meta.code != lang {
            log::warn!("unsupported locale {lang:?}; using {DEFAULT_LANG}");
        }
        Self {
            lang: meta.code,
            rtl: meta.rtl,
            translations: load_translations(meta.code),
            fallback: load_translations(DEFAULT_LANG),
        }
    }

    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.lang
    }

    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn resolve(&self, key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
        get_nested_value(&self.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&self.fallback, key).and_then(|v| render_value(v, args)))
    }

    /// Translate a key without substitution.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.tr(key, None)
    }

    /// Translate a key, substituting `{name}` / `{{name}}` placeholders.
    #[must_use]
    pub fn tr(&self, key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
        self.resolve(key, args).unwrap_or_else(|| key.to_string())
    }
}

/// Shared bundle for `lang`, built once per process.
#[must_use]
pub fn bundle(lang: &str) -> &'static I18nBundle {
    static BUNDLES: OnceLock<Vec<I18nBundle>> = OnceLock::new();
    let bundles =
        BUNDLES.get_or_init(|| LOCALE_META.iter().map(|m| I18nBundle::new(m.code)).collect());
    bundles.iter().find(|b| b.lang == lang).unwrap_or_else(|| {
        log::warn!("unsupported locale {lang:?}; using {DEFAULT_LANG}");
        &bundles[0]
    })
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}
