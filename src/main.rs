//! CLI entry point for inkpost

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpost::commands::list::ListFilter;

#[derive(Parser)]
#[command(name = "inkpost")]
#[command(author = "Yukang Chen")]
#[command(version)]
#[command(about = "A markdown article catalog for file-based personal blogs", long_about = None)]
struct Cli {
    /// Set the blog directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Locale for messages and filter sentinels
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List articles, tags or categories
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, tag, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Free-text search query
        #[arg(short, long)]
        query: Option<String>,

        /// Only articles carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only articles in this category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Articles per page (defaults to site config)
        #[arg(short = 's', long, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: Option<u32>,
    },

    /// Search articles by free-text query
    Search {
        /// Query matched against title, excerpt, body and tags
        query: String,
    },

    /// Show one article by id or slug
    Show {
        /// Article id or slug
        id: String,
    },

    /// Create a new article directory
    New {
        /// Title of the new article
        title: String,

        /// Category of the new article
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpost=debug,info"
    } else {
        "inkpost=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine blog directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let blog = inkpost::Blog::new(&base_dir)?;
    let i18n = blog.i18n(cli.locale.as_deref())?;

    match cli.command {
        Commands::List {
            r#type,
            query,
            tag,
            category,
            page,
            page_size,
        } => {
            let filter = ListFilter {
                query,
                tag,
                category,
                page: page as usize,
                page_size: page_size.map(|s| s as usize),
            };
            inkpost::commands::list::run(&blog, &r#type, &filter, &i18n).await?;
        }

        Commands::Search { query } => {
            inkpost::commands::search::run(&blog, &query, &i18n).await?;
        }

        Commands::Show { id } => {
            inkpost::commands::show::run(&blog, &id, &i18n).await?;
        }

        Commands::New { title, category } => {
            tracing::info!("Creating new article: {}", title);
            inkpost::commands::new::create_article(&blog, &title, category.as_deref())?;
        }
    }

    Ok(())
}
