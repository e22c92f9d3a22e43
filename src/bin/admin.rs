//! CLI administration tool for tinylink.
//!
//! Provides operator commands that work directly against the database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the most shortened domains
//! cargo run --bin admin -- top-domains --limit 10
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`DATABASE_URL` or `DB_*`, see `tinylink::config`).

use tinylink::application::services::UrlService;
use tinylink::config;
use tinylink::domain::repositories::UrlRepository;
use tinylink::infrastructure::persistence::PgUrlRepository;
use tinylink::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show domains with the most shortened links
    TopDomains {
        /// Number of domains to show
        #[arg(short, long, default_value_t = 3)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = Arc::new(connect_pool(&config).await?);
    let repository: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(pool.clone()));
    let service = UrlService::new(repository, config.short_code_length);

    match cli.command {
        Commands::TopDomains { limit } => show_top_domains(&service, limit).await?,
        Commands::Db {
            action: DbAction::Check,
        } => check_database(&service).await?,
    }

    pool.close().await;

    Ok(())
}

/// Prints the top domains report.
///
/// # Output Format
///
/// ```text
/// 📊 Top Domains
///
///   #   Domain                                   Links
///   ───────────────────────────────────────────────────
///   1   example.com                              5
///   2   test.com                                 3
/// ```
async fn show_top_domains(service: &UrlService<dyn UrlRepository>, limit: i64) -> Result<()> {
    println!("{}", "📊 Top Domains".bright_blue().bold());
    println!();

    let metrics = service
        .get_top_domains(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get top domains: {}", e))?;

    if metrics.is_empty() {
        println!("{}", "  No links shortened yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<40} {}",
        "#".bright_white().bold(),
        "Domain".bright_white().bold(),
        "Links".bright_white().bold()
    );
    println!("  {}", "─".repeat(51).bright_black());

    for (rank, metric) in metrics.iter().enumerate() {
        println!(
            "  {:<3} {:<40} {}",
            (rank + 1).to_string().bright_black(),
            metric.domain.cyan(),
            metric.count.to_string().bright_white().bold()
        );
    }

    println!();

    Ok(())
}

/// Checks that the database answers queries.
async fn check_database(service: &UrlService<dyn UrlRepository>) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    match service.health_check().await {
        Ok(()) => {
            println!("{}", "✅ Database connection OK".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", "❌ Database connection failed".red().bold());
            Err(anyhow::anyhow!("Database check failed: {}", e))
        }
    }
}
