//! List blog content

use anyhow::Result;
use indexmap::IndexMap;

use crate::catalog::Paginated;
use crate::content::Article;
use crate::i18n::I18n;
use crate::Blog;

/// Filters applied when listing posts
#[derive(Debug, Default)]
pub struct ListFilter {
    /// Free-text search query
    pub query: Option<String>,
    /// Tag label; the localized "all tags" sentinel means no filter
    pub tag: Option<String>,
    /// Category label; the localized "all categories" sentinel means
    /// no filter
    pub category: Option<String>,
    /// 1-based page number
    pub page: usize,
    /// Page size, defaults to the configured per_page
    pub page_size: Option<usize>,
}

/// List blog content by type
pub async fn run(blog: &Blog, content_type: &str, filter: &ListFilter, i18n: &I18n) -> Result<()> {
    let catalog = blog.catalog();

    match content_type {
        "post" | "posts" => {
            let articles = match filter.query.as_deref() {
                Some(query) => catalog.search(query).await,
                None => catalog.load_all().await,
            };

            let articles = apply_filters(articles, filter, i18n);

            let page_size = filter.page_size.unwrap_or(blog.config.per_page);
            let page = Paginated::slice(articles, filter.page.max(1), page_size);

            println!("{}", i18n.count_message("articles.list.total_count", page.total));
            if page.items.is_empty() {
                println!("{}", i18n.get("articles.no_results.title"));
                return Ok(());
            }

            for article in &page.items {
                print_article_line(article);
            }
            if page.total_pages > 1 {
                println!(
                    "  -- {} {}/{} --",
                    i18n.get("articles.pagination.page"),
                    filter.page.max(1),
                    page.total_pages
                );
            }
        }
        "tag" | "tags" => {
            let articles = catalog.load_all().await;
            let mut counts: IndexMap<String, usize> = IndexMap::new();
            for tag in catalog.all_tags().await {
                counts.insert(tag, 0);
            }
            for article in &articles {
                for tag in &article.tags {
                    *counts.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("{} ({}):", i18n.get("tags.title"), counts.len());
            for (tag, count) in counts {
                println!("  {} ({})", tag, count);
            }
        }
        "category" | "categories" => {
            let articles = catalog.load_all().await;
            let mut counts: IndexMap<String, usize> = IndexMap::new();
            for category in catalog.all_categories().await {
                counts.insert(category, 0);
            }
            for article in &articles {
                *counts.entry(article.category.clone()).or_insert(0) += 1;
            }
            println!("{} ({}):", i18n.get("categories.title"), counts.len());
            for (category, count) in counts {
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, category",
                content_type
            );
        }
    }

    Ok(())
}

/// Apply sentinel-aware category and tag filters to an article list
fn apply_filters(mut articles: Vec<Article>, filter: &ListFilter, i18n: &I18n) -> Vec<Article> {
    if let Some(category) = filter.category.as_deref().and_then(|l| i18n.category_filter(l)) {
        articles.retain(|a| a.in_category(category));
    }
    if let Some(tag) = filter.tag.as_deref().and_then(|l| i18n.tag_filter(l)) {
        articles.retain(|a| a.has_tag(tag));
    }
    articles
}

/// Print one listing line for an article
pub(crate) fn print_article_line(article: &Article) {
    let tags = if article.tags.is_empty() {
        String::new()
    } else {
        format!(" #{}", article.tags.join(" #"))
    };
    println!(
        "  {} - {} [{}]{} ({})",
        article.date.format("%Y-%m-%d"),
        article.title,
        article.category,
        tags,
        article.id
    );
}
