//! Content module - article model, metadata records and content sources

mod article;
mod meta;
mod source;

pub use article::Article;
pub use meta::{ArticleMeta, MetaError};
pub use source::{ArticleSourceRef, ContentSource, FsSource};
