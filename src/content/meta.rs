//! Article metadata records (meta.json)

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::Article;

/// Failure to materialize one article from its source unit
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid metadata record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unparsable date {0:?}")]
    BadDate(String),
}

/// Custom deserializer accepting either a single string or a list
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(tag)) => vec![tag],
        Some(OneOrMany::Many(tags)) => tags,
    })
}

/// The per-article metadata record, one `meta.json` per article
/// directory. Required fields are enforced at deserialization time;
/// a record missing any of them is rejected as a whole and the
/// article is skipped by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// Defaults to the article directory name
    pub id: Option<String>,
    /// Defaults to `id`
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    /// ISO-ish date string, validated by [`ArticleMeta::parse_date`]
    pub date: String,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    #[serde(rename = "readTime")]
    pub read_time: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

impl ArticleMeta {
    /// Parse a metadata record from JSON text
    pub fn parse(json: &str) -> Result<Self, MetaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the date string into a NaiveDate
    pub fn parse_date(&self) -> Result<NaiveDate, MetaError> {
        let s = self.date.trim();

        let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
        for fmt in formats {
            if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                return Ok(d);
            }
        }

        // Accept a full timestamp and keep the date part
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
            return Ok(dt.date_naive());
        }

        Err(MetaError::BadDate(self.date.clone()))
    }

    /// Materialize an Article from this record plus its raw markdown body.
    /// `fallback_id` is the article directory name, used when the record
    /// carries no explicit id.
    pub fn into_article(self, fallback_id: &str, body: String) -> Result<Article, MetaError> {
        let date = self.parse_date()?;
        let id = self.id.unwrap_or_else(|| fallback_id.to_string());
        let slug = self.slug.unwrap_or_else(|| id.clone());

        Ok(Article {
            id,
            slug,
            title: self.title,
            excerpt: self.excerpt,
            content: body,
            date,
            tags: self.tags,
            read_time: self.read_time,
            author: self.author,
            category: self.category,
            featured: self.featured,
        })
    }
}
