//! Content sources - where article source units come from
//!
//! The catalog only depends on the [`ContentSource`] trait: an enumerable
//! list of per-article source units plus accessors for the metadata record
//! and the raw markdown body of each unit. [`FsSource`] is the filesystem
//! implementation over the `content/posts/<id>/` layout.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ArticleMeta, MetaError};

/// A reference to one article source unit, keyed by article id
#[derive(Debug, Clone)]
pub struct ArticleSourceRef {
    /// Article id (the directory name under `posts/`)
    pub id: String,
    /// Path of the metadata record
    pub meta_path: PathBuf,
    /// Path of the markdown body
    pub body_path: PathBuf,
}

/// Abstract capability the catalog consumes: list article source units,
/// read the metadata record and raw body of each
pub trait ContentSource {
    /// Enumerate every article source unit
    fn enumerate(&self) -> Result<Vec<ArticleSourceRef>>;

    /// Read and parse the metadata record of one unit
    fn read_meta(
        &self,
        source: &ArticleSourceRef,
    ) -> impl std::future::Future<Output = Result<ArticleMeta, MetaError>> + Send;

    /// Read the raw markdown body of one unit
    fn read_body(
        &self,
        source: &ArticleSourceRef,
    ) -> impl std::future::Future<Output = Result<String, MetaError>> + Send;
}

/// Manifest file listing article ids, generated at build time as an
/// alternative to walking the posts directory
const MANIFEST_FILE: &str = "manifest.json";

/// Filesystem content source over `<root>/posts/<id>/{meta.json,index.md}`
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn source_ref(&self, id: &str) -> ArticleSourceRef {
        let dir = self.root.join("posts").join(id);
        ArticleSourceRef {
            id: id.to_string(),
            meta_path: dir.join("meta.json"),
            body_path: dir.join("index.md"),
        }
    }

    /// Enumerate ids from the manifest file
    fn enumerate_manifest(&self, manifest_path: &Path) -> Result<Vec<ArticleSourceRef>> {
        let content = std::fs::read_to_string(manifest_path)
            .with_context(|| format!("failed to read manifest {:?}", manifest_path))?;
        let ids: Vec<String> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse manifest {:?}", manifest_path))?;

        Ok(ids.iter().map(|id| self.source_ref(id)).collect())
    }

    /// Enumerate ids by walking the posts directory: every direct
    /// subdirectory containing a metadata record is an article
    fn enumerate_walk(&self, posts_dir: &Path) -> Result<Vec<ArticleSourceRef>> {
        let mut refs = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| format!("failed to walk {:?}", posts_dir))?;
            if !entry.path().is_dir() {
                continue;
            }
            let Some(id) = entry.file_name().to_str() else {
                tracing::warn!("skipping non-utf8 article directory {:?}", entry.path());
                continue;
            };
            let source = self.source_ref(id);
            if source.meta_path.exists() {
                refs.push(source);
            } else {
                tracing::debug!("ignoring {:?}: no meta.json", entry.path());
            }
        }

        Ok(refs)
    }
}

impl ContentSource for FsSource {
    fn enumerate(&self) -> Result<Vec<ArticleSourceRef>> {
        let manifest_path = self.root.join(MANIFEST_FILE);
        if manifest_path.exists() {
            return self.enumerate_manifest(&manifest_path);
        }

        let posts_dir = self.root.join("posts");
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }
        self.enumerate_walk(&posts_dir)
    }

    async fn read_meta(&self, source: &ArticleSourceRef) -> Result<ArticleMeta, MetaError> {
        let content = tokio::fs::read_to_string(&source.meta_path).await?;
        ArticleMeta::parse(&content)
    }

    async fn read_body(&self, source: &ArticleSourceRef) -> Result<String, MetaError> {
        Ok(tokio::fs::read_to_string(&source.body_path).await?)
    }
}
