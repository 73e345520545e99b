//! Localization context
//!
//! Loads per-locale dictionaries from a directory (one `yml`/`yaml`/`json`
//! file per locale, nested keys addressed with dot notation) and resolves
//! UI strings with a fallback chain: requested locale, then the site's
//! default locale, then the key itself.
//!
//! The catalog never translates anything; it is the callers of filter
//! operations that hold localized "all" sentinel labels. [`I18n`] owns
//! those sentinels and maps a sentinel-valued label back to "no filter".

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Dictionary key of the "all categories" filter sentinel
const ALL_CATEGORIES_KEY: &str = "articles.filters.all_categories";
/// Dictionary key of the "all tags" filter sentinel
const ALL_TAGS_KEY: &str = "articles.filters.all_tags";

/// Localization context: a current locale plus the loaded dictionaries
#[derive(Debug, Clone)]
pub struct I18n {
    /// Current locale
    locale: String,
    /// Fallback locale when a key is missing in the current one
    default_locale: String,
    /// Dictionary data: locale -> key -> value
    dictionaries: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    /// Create a new localization context
    pub fn new(locale: &str, default_locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            default_locale: default_locale.to_string(),
            dictionaries: HashMap::new(),
        }
    }

    /// Load locale dictionaries from a directory. The file stem is the
    /// locale name. Unparsable files are skipped with a warning.
    pub fn load_locales<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                continue;
            }

            let locale = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("en")
                .to_string();

            let content = fs::read_to_string(&path)?;

            // YAML is a superset of JSON, one parser covers both
            match serde_yaml::from_str::<HashMap<String, serde_yaml::Value>>(&content) {
                Ok(data) => {
                    tracing::debug!("loaded locale dictionary {:?}", path);
                    self.dictionaries.insert(locale, data);
                }
                Err(e) => {
                    tracing::warn!("failed to parse locale dictionary {:?}: {}", path, e);
                }
            }
        }

        Ok(())
    }

    /// Get the current locale
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Set the current locale
    pub fn set_locale(&mut self, locale: &str) {
        self.locale = locale.to_string();
    }

    /// Resolve a translation by dot-nested key, e.g. "articles.list.title"
    pub fn get(&self, key: &str) -> String {
        self.get_for_locale(&self.locale, key)
    }

    /// Resolve a translation for a specific locale
    pub fn get_for_locale(&self, locale: &str, key: &str) -> String {
        if let Some(data) = self.dictionaries.get(locale) {
            if let Some(value) = get_nested_value(data, key) {
                return yaml_value_to_string(value);
            }
        }

        if locale != self.default_locale {
            if let Some(data) = self.dictionaries.get(&self.default_locale) {
                if let Some(value) = get_nested_value(data, key) {
                    return yaml_value_to_string(value);
                }
            }
        }

        // Return key as fallback
        key.to_string()
    }

    /// Check whether a key resolves in the current locale
    pub fn has(&self, key: &str) -> bool {
        self.dictionaries
            .get(&self.locale)
            .and_then(|data| get_nested_value(data, key))
            .is_some()
    }

    /// Resolve a count-dependent message. The dictionary carries
    /// `<key>.zero`, `<key>.one` and `<key>.other` variants with a
    /// `{count}` placeholder.
    pub fn count_message(&self, key: &str, count: usize) -> String {
        let variant = match count {
            0 => format!("{}.zero", key),
            1 => format!("{}.one", key),
            _ => format!("{}.other", key),
        };

        self.get(&variant).replace("{count}", &count.to_string())
    }

    /// The localized "all categories" sentinel label
    pub fn all_categories_label(&self) -> String {
        self.get(ALL_CATEGORIES_KEY)
    }

    /// The localized "all tags" sentinel label
    pub fn all_tags_label(&self) -> String {
        self.get(ALL_TAGS_KEY)
    }

    /// Map a caller-supplied category label to a filter value.
    /// The localized "all" sentinel and blank labels mean no filter.
    pub fn category_filter<'a>(&self, label: &'a str) -> Option<&'a str> {
        self.filter_value(label, ALL_CATEGORIES_KEY)
    }

    /// Map a caller-supplied tag label to a filter value
    pub fn tag_filter<'a>(&self, label: &'a str) -> Option<&'a str> {
        self.filter_value(label, ALL_TAGS_KEY)
    }

    fn filter_value<'a>(&self, label: &'a str, sentinel_key: &str) -> Option<&'a str> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        // Any locale's sentinel counts, the caller's locale may differ
        // from the context's current one
        for data in self.dictionaries.values() {
            if let Some(value) = get_nested_value(data, sentinel_key) {
                if yaml_value_to_string(value) == label {
                    return None;
                }
            }
        }
        Some(label)
    }

    #[cfg(test)]
    fn insert_dictionary(&mut self, locale: &str, data: HashMap<String, serde_yaml::Value>) {
        self.dictionaries.insert(locale.to_string(), data);
    }
}

/// Get a nested value from a YAML map using dot notation
fn get_nested_value<'a>(
    data: &'a HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<&'a serde_yaml::Value> {
    let mut parts = key.split('.');
    let mut current = data.get(parts.next()?);

    for part in parts {
        match current {
            Some(serde_yaml::Value::Mapping(map)) => {
                current = map.get(serde_yaml::Value::String(part.to_string()));
            }
            _ => return None,
        }
    }

    current
}

/// Convert a YAML value to a display string
fn yaml_value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(yaml: &str) -> HashMap<String, serde_yaml::Value> {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_get_with_fallback() {
        let mut i18n = I18n::new("en", "zh-Hans");
        i18n.insert_dictionary("en", dictionary("hello: Hello"));
        i18n.insert_dictionary(
            "zh-Hans",
            dictionary("hello: 你好\nonly_zh: 仅中文"),
        );

        assert_eq!(i18n.get("hello"), "Hello");
        // Missing in en, falls back to the default locale
        assert_eq!(i18n.get("only_zh"), "仅中文");
        // Missing everywhere, falls back to the key
        assert_eq!(i18n.get("unknown.key"), "unknown.key");
    }

    #[test]
    fn test_nested_keys() {
        let mut i18n = I18n::new("en", "en");
        i18n.insert_dictionary(
            "en",
            dictionary("articles:\n  list:\n    title: All Articles"),
        );

        assert_eq!(i18n.get("articles.list.title"), "All Articles");
        assert!(i18n.has("articles.list.title"));
        assert!(!i18n.has("articles.list.missing"));
    }

    #[test]
    fn test_count_message() {
        let mut i18n = I18n::new("en", "en");
        i18n.insert_dictionary(
            "en",
            dictionary(
                r#"
articles:
  list:
    total_count:
      zero: No articles
      one: 1 article
      other: "{count} articles"
"#,
            ),
        );

        assert_eq!(i18n.count_message("articles.list.total_count", 0), "No articles");
        assert_eq!(i18n.count_message("articles.list.total_count", 1), "1 article");
        assert_eq!(i18n.count_message("articles.list.total_count", 12), "12 articles");
    }

    #[test]
    fn test_sentinel_filters() {
        let mut i18n = I18n::new("zh-Hans", "zh-Hans");
        i18n.insert_dictionary(
            "zh-Hans",
            dictionary("articles:\n  filters:\n    all_categories: 全部分类"),
        );
        i18n.insert_dictionary(
            "en",
            dictionary("articles:\n  filters:\n    all_categories: All Categories"),
        );

        // Sentinels of any loaded locale mean no filter
        assert_eq!(i18n.category_filter("全部分类"), None);
        assert_eq!(i18n.category_filter("All Categories"), None);
        assert_eq!(i18n.category_filter(""), None);
        assert_eq!(i18n.category_filter("Programming"), Some("Programming"));
    }

    #[test]
    fn test_load_locales_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("en.yml"),
            "articles:\n  list:\n    title: Articles\n",
        )
        .unwrap();
        fs::write(dir.path().join("ja.json"), r#"{"articles": {"list": {"title": "記事"}}}"#)
            .unwrap();
        fs::write(dir.path().join("broken.yml"), "foo: [unclosed\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut i18n = I18n::new("ja", "en");
        i18n.load_locales(dir.path()).unwrap();

        assert_eq!(i18n.get("articles.list.title"), "記事");
        assert_eq!(i18n.get_for_locale("en", "articles.list.title"), "Articles");
    }
}
