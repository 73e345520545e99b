//! Site configuration (site.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,

    // Localization
    /// Locale used when none is requested
    pub default_locale: String,
    /// Locales the site ships dictionaries for
    pub locales: Vec<String>,

    // Directory
    pub content_dir: String,
    pub locales_dir: String,

    // Pagination
    pub per_page: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "anonymous".to_string(),

            default_locale: "zh-Hans".to_string(),
            locales: vec![
                "zh-Hans".to_string(),
                "en".to_string(),
                "ja".to_string(),
            ],

            content_dir: "content".to_string(),
            locales_dir: "locales".to_string(),

            per_page: 10,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.default_locale, "zh-Hans");
        assert_eq!(config.locales.len(), 3);
        assert_eq!(config.per_page, 10);
        assert_eq!(config.content_dir, "content");
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
title: Caffeine Diary
author: yukang
per_page: 5
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Caffeine Diary");
        assert_eq!(config.per_page, 5);
        // Unspecified fields keep their defaults
        assert_eq!(config.default_locale, "zh-Hans");
        assert_eq!(config.locales_dir, "locales");
    }
}
