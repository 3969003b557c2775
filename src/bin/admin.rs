//! CLI administration tool for link-dashboard.
//!
//! Manages links and checks the database directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Create a link (code generated unless --code is given)
//! cargo run --bin admin -- links create https://example.com/docs --code docs2025
//!
//! # Delete a link
//! cargo run --bin admin -- links delete docs2025
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required, `DB_URL` accepted as fallback): PostgreSQL connection string

use link_dashboard::application::services::LinkService;
use link_dashboard::config::load_database_url;
use link_dashboard::domain::errors::LinkError;
use link_dashboard::infrastructure::database::MIGRATOR;
use link_dashboard::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-dashboard.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a short link
    Create {
        /// Target URL (scheme optional, https:// is assumed)
        url: String,

        /// Custom code, 6-8 letters or digits
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a short link permanently
    Delete {
        /// Code of the link to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await,
        LinkAction::Create { url, code } => create_link(&service, &url, code.as_deref()).await,
        LinkAction::Delete { code, yes } => delete_link(&service, &code, yes).await,
    }
}

/// Prints every link as a table.
///
/// ```text
///   Code      Clicks  Created           Target
///   ─────────────────────────────────────────────────────────────────
///   docs2025  12      2025-01-15 10:30  https://example.com/docs
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<9} {:<7} {:<17} {}",
            link.code.cyan(),
            link.total_clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn create_link(service: &LinkService, url: &str, code: Option<&str>) -> Result<()> {
    println!("{}", "✨ Create Link".bright_blue().bold());
    println!();

    let link = match service.create_link(url, code).await {
        Ok(link) => link,
        Err(e @ LinkError::Unexpected(_)) => {
            return Err(anyhow::anyhow!("Failed to create link: {}", e));
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            return Ok(());
        }
    };

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Code:   {}", link.code.bright_yellow().bold());
    println!("  Target: {}", link.target_url.cyan());
    println!();

    Ok(())
}

async fn delete_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = match service.get_link(code).await {
        Ok(link) => link,
        Err(LinkError::NotFound(_)) => {
            println!("{}", format!("⚠️  No link found for code {code}").yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.target_url);
    println!("  Clicks: {}", link.total_clicks.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            MIGRATOR
                .run(pool)
                .await
                .context("Failed to run database migrations")?;

            println!("{}", "✅ Schema is up to date".green().bold());
        }
    }

    Ok(())
}
