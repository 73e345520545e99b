//! Create a new article

use anyhow::Result;
use std::fs;

use crate::content::ArticleMeta;
use crate::Blog;

/// Scaffold a new article directory with a metadata record and an
/// empty markdown body
pub fn create_article(blog: &Blog, title: &str, category: Option<&str>) -> Result<()> {
    let id = slug::slugify(title);
    if id.is_empty() {
        anyhow::bail!("title {:?} produces an empty article id", title);
    }

    let article_dir = blog.content_dir.join("posts").join(&id);
    if article_dir.exists() {
        anyhow::bail!("article already exists: {:?}", article_dir);
    }
    fs::create_dir_all(&article_dir)?;

    let meta = ArticleMeta {
        id: Some(id.clone()),
        slug: Some(id.clone()),
        title: title.to_string(),
        excerpt: String::new(),
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        tags: Vec::new(),
        read_time: "1 min".to_string(),
        author: blog.config.author.clone(),
        category: category.unwrap_or("uncategorized").to_string(),
        featured: false,
    };

    let meta_path = article_dir.join("meta.json");
    fs::write(&meta_path, serde_json::to_string_pretty(&meta)?)?;

    let body_path = article_dir.join("index.md");
    fs::write(&body_path, format!("# {}\n", title))?;

    println!("Created: {:?}", article_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_article_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        create_article(&blog, "My First Post", Some("Life")).unwrap();

        let article_dir = blog.content_dir.join("posts").join("my-first-post");
        let meta = ArticleMeta::parse(
            &fs::read_to_string(article_dir.join("meta.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(meta.title, "My First Post");
        assert_eq!(meta.category, "Life");
        assert!(meta.parse_date().is_ok());
        assert!(article_dir.join("index.md").exists());

        // Creating the same article twice fails
        assert!(create_article(&blog, "My First Post", None).is_err());
    }
}
