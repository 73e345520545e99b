//! inkpost: a markdown article catalog for file-based personal blogs
//!
//! This crate indexes blog articles stored as per-article directories
//! (`meta.json` + `index.md`) and answers catalog queries: listing,
//! lookup by id or slug, tag/category filtering, free-text search and
//! pagination. Article bodies are handed off as raw markdown; rendering
//! is left to the consumer.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod i18n;

use anyhow::Result;
use std::path::Path;

use catalog::Catalog;
use content::FsSource;
use i18n::I18n;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory (holds `posts/` and an optional manifest)
    pub content_dir: std::path::PathBuf,
    /// Locale dictionaries directory
    pub locales_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let locales_dir = base_dir.join(&config.locales_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            locales_dir,
        })
    }

    /// Build a catalog over this blog's content directory
    pub fn catalog(&self) -> Catalog<FsSource> {
        Catalog::new(FsSource::new(&self.content_dir))
    }

    /// Load the locale dictionaries, selecting `locale` (or the
    /// configured default when `None`)
    pub fn i18n(&self, locale: Option<&str>) -> Result<I18n> {
        let lang = locale.unwrap_or(&self.config.default_locale);
        let mut i18n = I18n::new(lang, &self.config.default_locale);
        i18n.load_locales(&self.locales_dir)?;
        Ok(i18n)
    }
}
