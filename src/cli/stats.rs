// ============================================================================
// TsCat - CLI Stats Command
// ============================================================================
//
// File: src/cli/stats.rs
// Responsibility: translation progress report for one catalog or a tree
// Boundaries:
//   - ✅ Stats argument definition
//   - ✅ Calling the scanner and formatting output (table/JSON)
//   - ❌ Should not contain directory walking or parsing logic
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::load_catalog;
use crate::core::CatalogScanner;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Show translation progress
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Catalog file or directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// Per-context breakdown (single catalog only)
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub async fn handle_stats(args: StatsArgs) -> Result<()> {
    if args.detail && args.path.is_file() {
        return context_breakdown(&args);
    }

    if Config::get_verbose() {
        Logger::info(tf!("stats.scanning", args.path.display()));
    }

    let scanner = CatalogScanner::new(args.path.clone())
        .with_ignore_patterns(&Config::get_ignore_patterns())
        .with_max_concurrency(Config::get_max_concurrency());
    let results = scanner.scan().await?;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        "table" | _ => {
            if results.is_empty() {
                Logger::warn(t!("stats.no_catalogs"));
            } else {
                summary::render_file_stats(&results);
            }
        }
    }

    Ok(())
}

fn context_breakdown(args: &StatsArgs) -> Result<()> {
    let catalog = load_catalog(&args.path)?;
    let contexts = catalog.context_stats();

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&contexts)?);
        }
        "table" | _ => {
            summary::render_context_stats(&contexts);
            summary::render_totals(&catalog.stats());
        }
    }
    Ok(())
}
