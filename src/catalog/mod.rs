//! Article catalog - discovery, indexing, filtering and pagination
//!
//! Every query re-scans the content source, so results always reflect
//! the on-disk state. Failures never surface to the caller: a source
//! that cannot be enumerated yields an empty catalog and an article
//! that cannot be read is skipped, both logged at warn level.

use std::collections::BTreeSet;

use crate::content::{Article, ArticleSourceRef, ContentSource, MetaError};

/// One page of catalog results
#[derive(Debug, Clone)]
pub struct Paginated {
    /// Articles on the requested page, at most `page_size` of them
    pub items: Vec<Article>,
    /// Total article count across all pages
    pub total: usize,
    /// Number of pages at the requested page size
    pub total_pages: usize,
}

impl Paginated {
    /// Slice one page out of an already-ordered article list.
    /// An out-of-range page yields empty items, not an error.
    pub fn slice(articles: Vec<Article>, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = articles.len();
        let total_pages = total.div_ceil(page_size);

        let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);

        Self {
            items: articles[start..end].to_vec(),
            total,
            total_pages,
        }
    }
}

/// Read-only catalog over a content source
#[derive(Debug, Clone)]
pub struct Catalog<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load every readable article, newest first.
    ///
    /// The returned order is the canonical catalog order; all filtered
    /// views inherit it. Ties on the date sort keep enumeration order.
    pub async fn load_all(&self) -> Vec<Article> {
        let sources = match self.source.enumerate() {
            Ok(sources) => sources,
            Err(e) => {
                tracing::warn!("failed to enumerate article sources: {:#}", e);
                return Vec::new();
            }
        };

        let mut articles = Vec::with_capacity(sources.len());
        for source in &sources {
            match self.load_one(source).await {
                Ok(article) => articles.push(article),
                Err(e) => {
                    tracing::warn!("skipping article {}: {}", source.id, e);
                }
            }
        }

        // Stable sort, newest first
        articles.sort_by(|a, b| b.date.cmp(&a.date));

        articles
    }

    async fn load_one(&self, source: &ArticleSourceRef) -> Result<Article, MetaError> {
        let meta = self.source.read_meta(source).await?;
        let body = self.source.read_body(source).await?;
        meta.into_article(&source.id, body)
    }

    /// Find one article by id or slug (case-sensitive exact match)
    pub async fn load_by_id(&self, id: &str) -> Option<Article> {
        self.load_all()
            .await
            .into_iter()
            .find(|a| a.id == id || a.slug == id)
    }

    /// Articles carrying `tag`, compared case-insensitively
    pub async fn load_by_tag(&self, tag: &str) -> Vec<Article> {
        self.load_all()
            .await
            .into_iter()
            .filter(|a| a.has_tag(tag))
            .collect()
    }

    /// Articles in `category`, compared case-insensitively
    pub async fn load_by_category(&self, category: &str) -> Vec<Article> {
        self.load_all()
            .await
            .into_iter()
            .filter(|a| a.in_category(category))
            .collect()
    }

    /// Articles whose title, excerpt, body or tags contain `query`
    /// (case-insensitive substring). An empty query returns the full
    /// catalog.
    pub async fn search(&self, query: &str) -> Vec<Article> {
        let query = query.trim();
        let articles = self.load_all().await;
        if query.is_empty() {
            return articles;
        }
        articles
            .into_iter()
            .filter(|a| a.matches_query(query))
            .collect()
    }

    /// All distinct tags across the catalog, sorted ascending
    pub async fn all_tags(&self) -> Vec<String> {
        let mut tags = BTreeSet::new();
        for article in self.load_all().await {
            tags.extend(article.tags);
        }
        tags.into_iter().collect()
    }

    /// All distinct categories, sorted ascending
    pub async fn all_categories(&self) -> Vec<String> {
        let categories: BTreeSet<String> = self
            .load_all()
            .await
            .into_iter()
            .map(|a| a.category)
            .collect();
        categories.into_iter().collect()
    }

    /// One page of the full catalog in canonical order
    pub async fn paginate(&self, page: usize, page_size: usize) -> Paginated {
        Paginated::slice(self.load_all().await, page, page_size)
    }
}
