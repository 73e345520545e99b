//! Search articles

use anyhow::Result;

use crate::i18n::I18n;
use crate::Blog;

/// Search articles by free-text query
pub async fn run(blog: &Blog, query: &str, i18n: &I18n) -> Result<()> {
    let catalog = blog.catalog();
    let results = catalog.search(query).await;

    println!(
        "{}",
        i18n.count_message("articles.list.total_count", results.len())
    );
    if results.is_empty() {
        println!("{}", i18n.get("articles.no_results.title"));
        println!("{}", i18n.get("articles.no_results.description"));
        return Ok(());
    }

    for article in &results {
        super::list::print_article_line(article);
    }

    Ok(())
}
