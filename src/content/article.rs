//! Article model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique, stable identifier
    pub id: String,

    /// URL-safe identifier (defaults to `id`)
    pub slug: String,

    /// Article title
    pub title: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Raw markdown body
    pub content: String,

    /// Publication date
    pub date: NaiveDate,

    /// Tags in authored order
    pub tags: Vec<String>,

    /// Display string for estimated reading time
    pub read_time: String,

    /// Article author
    pub author: String,

    /// Single category
    pub category: String,

    /// Whether the article is featured on the home page
    pub featured: bool,
}

impl Article {
    /// Check whether the article carries `tag` (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Check whether the article belongs to `category` (case-insensitive)
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }

    /// Check whether `query` appears (case-insensitive) in the title,
    /// excerpt, body or any tag
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.excerpt.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            id: "rust-ownership".to_string(),
            slug: "rust-ownership".to_string(),
            title: "Understanding Ownership".to_string(),
            excerpt: "Why the borrow checker exists".to_string(),
            content: "Ownership is Rust's most distinctive feature.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            tags: vec!["Rust".to_string(), "memory".to_string()],
            read_time: "8 min".to_string(),
            author: "yukang".to_string(),
            category: "Programming".to_string(),
            featured: false,
        }
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let article = sample();
        assert!(article.has_tag("rust"));
        assert!(article.has_tag("MEMORY"));
        assert!(!article.has_tag("go"));
    }

    #[test]
    fn test_in_category_case_insensitive() {
        let article = sample();
        assert!(article.in_category("programming"));
        assert!(!article.in_category("life"));
    }

    #[test]
    fn test_matches_query() {
        let article = sample();
        assert!(article.matches_query("ownership"));
        assert!(article.matches_query("BORROW"));
        assert!(article.matches_query("distinctive"));
        assert!(article.matches_query("memo"));
        assert!(!article.matches_query("javascript"));
    }
}
