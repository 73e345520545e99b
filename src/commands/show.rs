//! Show one article

use anyhow::Result;

use crate::i18n::I18n;
use crate::Blog;

/// Print one article (metadata header plus raw markdown body) by id
/// or slug
pub async fn run(blog: &Blog, id: &str, i18n: &I18n) -> Result<()> {
    let catalog = blog.catalog();

    let Some(article) = catalog.load_by_id(id).await else {
        println!("{}", i18n.get("articles.no_results.title"));
        println!("{}", i18n.get("articles.no_results.description"));
        return Ok(());
    };

    println!("{}", article.title);
    println!(
        "{} | {} | {} | {} {}",
        article.date.format("%Y-%m-%d"),
        article.author,
        article.category,
        article.read_time,
        i18n.get("articles.article.read_time")
    );
    if !article.tags.is_empty() {
        println!("#{}", article.tags.join(" #"));
    }
    println!();
    // Raw markdown, rendering is up to the consumer
    println!("{}", article.content);

    Ok(())
}
