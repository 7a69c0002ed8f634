//! CLI administration tool for sentiment-blog.
//!
//! Inspects blogs and purges entries by keyword directly against the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List blogs with their entry counts
//! cargo run --bin blog-admin -- blogs list
//!
//! # Delete every entry mentioning "spam" or "scam"
//! cargo run --bin blog-admin -- entries purge --keyword spam --keyword scam
//!
//! # Same, limited to blog 3, without confirmation
//! cargo run --bin blog-admin -- entries purge --keyword spam --blog 3 --yes
//!
//! # Check database connection
//! cargo run --bin blog-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use sentiment_blog::application::services::BlogService;
use sentiment_blog::config::load_database_url;
use sentiment_blog::infrastructure::persistence::{PgBlogRepository, PgEntryRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// CLI tool for managing sentiment-blog.
#[derive(Parser)]
#[command(name = "blog-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect blogs
    Blogs {
        #[command(subcommand)]
        action: BlogAction,
    },

    /// Manage entries
    Entries {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum BlogAction {
    /// List all blogs with entry counts
    List,
}

#[derive(Subcommand)]
enum EntryAction {
    /// Delete entries containing any of the given keywords
    Purge {
        /// Keyword to match as a whole, case-sensitive token (repeatable)
        #[arg(short, long = "keyword", required = true)]
        keywords: Vec<String>,

        /// Only purge entries of this blog
        #[arg(short, long)]
        blog: Option<i64>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type PgBlogService = BlogService<PgBlogRepository, PgEntryRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let pool_arc = Arc::new(pool.clone());
    let service = BlogService::new(
        Arc::new(PgBlogRepository::new(pool_arc.clone())),
        Arc::new(PgEntryRepository::new(pool_arc)),
    );

    match cli.command {
        Commands::Blogs {
            action: BlogAction::List,
        } => list_blogs(&service, &pool).await?,
        Commands::Entries {
            action: EntryAction::Purge {
                keywords,
                blog,
                yes,
            },
        } => purge_entries(&service, keywords, blog, yes).await?,
        Commands::Db {
            action: DbAction::Check,
        } => check_db(&pool).await?,
    }

    Ok(())
}

/// Lists all blogs with their polarity and entry count.
///
/// # Output Format
///
/// ```text
/// Blogs
///
///   ID  Name                           Polarity   Entries
///   ─────────────────────────────────────────────────────
///   1   Sunny side                     positive   12
///   2   Rainy days                     negative   3
/// ```
async fn list_blogs(service: &PgBlogService, pool: &PgPool) -> Result<()> {
    println!("{}", "Blogs".bright_blue().bold());
    println!();

    let blogs = service
        .find_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list blogs: {}", e))?;

    if blogs.is_empty() {
        println!("{}", "  No blogs found".yellow());
        return Ok(());
    }

    let counts: HashMap<i64, i64> =
        sqlx::query_as::<_, (i64, i64)>("SELECT blog_id, COUNT(*) FROM entries GROUP BY blog_id")
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect();

    println!(
        "  {:<3} {:<30} {:<10} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Polarity".bright_white().bold(),
        "Entries".bright_white().bold()
    );
    println!("  {}", "─".repeat(55).bright_black());

    let (mut positive, mut negative) = (0, 0);
    for blog in &blogs {
        let entries = counts.get(&blog.id).copied().unwrap_or(0);
        let polarity = if blog.is_positive {
            positive += entries;
            "positive".green()
        } else {
            negative += entries;
            "negative".red()
        };

        println!(
            "  {:<3} {:<30} {:<10} {}",
            blog.id.to_string().bright_black(),
            blog.name.cyan(),
            polarity,
            entries
        );
    }

    println!();
    println!(
        "  Total: {} blogs, {} positive entries, {} negative entries",
        blogs.len().to_string().bright_white().bold(),
        positive.to_string().green(),
        negative.to_string().red()
    );
    println!();

    Ok(())
}

/// Runs the keyword purge, globally or for one blog.
///
/// Requires confirmation (default: No) unless `--yes` is given.
async fn purge_entries(
    service: &PgBlogService,
    keywords: Vec<String>,
    blog: Option<i64>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Purge entries".bright_blue().bold());
    println!();

    let keywords: HashSet<String> = keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    if keywords.is_empty() {
        anyhow::bail!("At least one non-empty keyword is required");
    }

    let mut listed: Vec<&str> = keywords.iter().map(String::as_str).collect();
    listed.sort_unstable();

    println!("  Keywords: {}", listed.join(", ").cyan());
    match blog {
        Some(id) => println!("  Scope:    blog {}", id.to_string().cyan()),
        None => println!("  Scope:    {}", "all blogs".cyan()),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every matching entry?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let deleted = match blog {
        Some(id) => service.delete_entries_by_blog_and_keyword(id, &keywords).await,
        None => service.delete_entries_by_keyword(&keywords).await,
    }
    .map_err(|e| anyhow::anyhow!("Failed to purge entries: {}", e))?;

    println!();
    if deleted.is_empty() {
        println!("{}", "No matching entries".yellow());
    } else {
        let ids: Vec<String> = deleted.iter().map(i64::to_string).collect();
        println!(
            "{} {}",
            format!("Deleted {} entries:", deleted.len()).green().bold(),
            ids.join(", ").bright_black()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn check_db(pool: &PgPool) -> Result<()> {
    println!("{}", "Checking database connection...".bright_blue());

    sqlx::query("SELECT 1").fetch_one(pool).await?;

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;

    println!("{}", "Database connection OK".green().bold());
    println!("  PostgreSQL: {}", version.bright_white());

    Ok(())
}
