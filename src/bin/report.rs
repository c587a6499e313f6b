//! Operator CLI for inspecting board reports without the HTTP server.
//!
//! Reads the same environment configuration as the server, so it shows
//! exactly what the report page would.
//!
//! # Usage
//!
//! ```bash
//! # Today's top 20
//! cargo run --bin report -- show --limit 20
//!
//! # A specific day from an explicit file
//! cargo run --bin report -- show --date 2024/01/02 --counts ./2024_01_02.json
//!
//! # Diagnose an empty or unmapped report
//! cargo run --bin report -- check --date 2024/01/02
//! ```
//!
//! # Environment Variables
//!
//! See [`board_report::config`]; `.env` files are honoured.

use board_report::application::services::ReportService;
use board_report::config::{self, Config};
use board_report::domain::entities::Report;
use board_report::domain::report_date::ReportDate;
use board_report::domain::repositories::DirectoryRepository;
use board_report::infrastructure::cache::NullDirectoryCache;
use board_report::infrastructure::persistence::{FileCountRepository, FileDirectoryRepository};
use board_report::utils::number_format::format_thousands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for inspecting board reports.
#[derive(Parser)]
#[command(name = "report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the ranked report
    Show {
        /// Day to report on, YYYY/MM/DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Only print the first N boards
        #[arg(short, long)]
        limit: Option<usize>,

        /// Read counts from this file instead of the dated path
        #[arg(long)]
        counts: Option<PathBuf>,

        /// Read the board directory from this file
        #[arg(long)]
        directory: Option<PathBuf>,
    },

    /// Explain what the report inputs contain
    Check {
        /// Day to check, YYYY/MM/DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Show {
            date,
            limit,
            counts,
            directory,
        } => show(&config, date, limit, counts, directory).await?,
        Commands::Check { date } => check(&config, date).await?,
    }

    Ok(())
}

fn parse_date(date: Option<String>) -> Result<ReportDate> {
    match date {
        Some(raw) => ReportDate::parse(&raw)
            .with_context(|| format!("Date must be formatted as YYYY/MM/DD, got '{}'", raw)),
        None => Ok(ReportDate::today()),
    }
}

fn directory_repository(config: &Config) -> Result<Arc<FileDirectoryRepository>> {
    Ok(Arc::new(FileDirectoryRepository::new(
        config.directory_pattern()?,
        Arc::new(NullDirectoryCache::new()),
    )))
}

/// Prints the ranking with the same tiers the report page highlights.
async fn show(
    config: &Config,
    date: Option<String>,
    limit: Option<usize>,
    counts: Option<PathBuf>,
    directory: Option<PathBuf>,
) -> Result<()> {
    let date = parse_date(date)?;
    let sources = config.report_sources();
    let counts_path = counts.unwrap_or_else(|| sources.count_path(&date));
    let directory_path = directory.unwrap_or_else(|| sources.directory_path.clone());

    let service = ReportService::new(
        Arc::new(FileCountRepository::new()),
        directory_repository(config)?,
        sources,
    );
    let report = service
        .assemble(Some(&counts_path), &directory_path)
        .await;

    println!(
        "{} {}",
        "📊 Board activity".bright_blue().bold(),
        date.to_string().bright_white()
    );
    println!("  Source: {}", counts_path.display().to_string().dimmed());
    println!();

    print_table(&report, limit);

    println!();
    println!(
        "  Total posts: {}",
        format_thousands(report.grand_total).bright_cyan().bold()
    );
    for notice in &report.notices {
        println!("  {}", notice.message().yellow());
    }

    Ok(())
}

fn print_table(report: &Report, limit: Option<usize>) {
    if report.entries.is_empty() {
        return;
    }

    println!(
        "{:>5}  {:<24} {:>12} {:>10} {:>8}  {}",
        "Rank".bold(),
        "Board".bold(),
        "Posts".bold(),
        "Posters".bold(),
        "Threads".bold(),
        "Server".bold()
    );

    for entry in report.entries.iter().take(limit.unwrap_or(usize::MAX)) {
        let rank = format!("{:>5}", entry.rank);
        let rank = match entry.rank {
            1..=5 => rank.bright_red().bold(),
            6..=10 => rank.bright_yellow(),
            11..=20 => rank.green(),
            _ => rank.normal(),
        };
        let server = if entry.server_host.is_empty() {
            "?".dimmed()
        } else {
            entry.server_host.yellow()
        };

        println!(
            "{}  {:<24} {:>12} {:>10} {:>8}  {}",
            rank,
            entry.board_id,
            format_thousands(entry.post_count),
            format_thousands(entry.unique_poster_count),
            format_thousands(entry.new_thread_count),
            server
        );
    }
}

/// Reports paths, detected format, record counts and unmapped boards.
async fn check(config: &Config, date: Option<String>) -> Result<()> {
    let date = parse_date(date)?;
    let sources = config.report_sources();
    let counts_path = sources.count_path(&date);

    println!("{}", "🔍 Report inputs".bright_blue().bold());
    println!();

    println!("{}", "Count data:".bright_white().bold());
    println!("  Path: {}", counts_path.display().to_string().cyan());
    let records = match FileCountRepository::new().read_counts(&counts_path).await {
        Ok((format, records)) => {
            println!("  Format: {}", format.name().green());
            println!("  Boards: {}", records.len().to_string().green());
            println!(
                "  Posts: {}",
                format_thousands(records.iter().map(|r| r.post_count).sum()).green()
            );
            records
        }
        Err(e) => {
            println!("  {}", format!("❌ {}", e).red());
            Vec::new()
        }
    };
    println!();

    println!("{}", "Board directory:".bright_white().bold());
    println!(
        "  Path: {}",
        sources.directory_path.display().to_string().cyan()
    );
    let directory = directory_repository(config)?
        .load_directory(&sources.directory_path)
        .await;
    if directory.is_empty() {
        println!("  {}", "❌ No board mappings found".red());
    } else {
        println!("  Boards mapped: {}", directory.len().to_string().green());
    }

    let mut unmapped: Vec<&str> = records
        .iter()
        .map(|r| r.board_id.as_str())
        .filter(|board| !directory.contains(board))
        .collect();
    unmapped.sort_unstable();

    if unmapped.is_empty() {
        println!("  {}", "✅ Every board has a server".green());
    } else {
        println!(
            "  {} {}",
            "⚠️  Boards without a server:".yellow(),
            unmapped.len()
        );
        for board in unmapped {
            println!("    - {}", board);
        }
    }

    Ok(())
}
