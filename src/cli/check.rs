// ============================================================================
// TsCat - CLI Check Command
// ============================================================================
//
// File: src/cli/check.rs
// Responsibility: catalog hygiene check CLI layer
// Boundaries:
//   - ✅ Check argument definition
//   - ✅ Calling the checker and formatting output (table/JSON)
//   - ✅ Exit status on errors
//   - ❌ Should not contain check rules
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::load_catalog;
use crate::core::CatalogChecker;
use crate::models::config::Config;
use crate::models::report::Severity;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Check catalog hygiene
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Catalog file
    pub file: PathBuf,

    /// Output format (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    if Config::get_verbose() {
        Logger::info(tf!("cli.check.start", args.file.display()));
    }

    let catalog = load_catalog(&args.file)?;
    let diagnostics = CatalogChecker::new(Config::get_check_config()).check(&catalog);

    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics.len() - errors;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        }
        "table" | _ => {
            summary::render_diagnostics(&diagnostics);
        }
    }

    if errors > 0 || (args.strict && warnings > 0) {
        anyhow::bail!(tf!("check.failed", errors, warnings));
    }

    if diagnostics.is_empty() {
        Logger::success(t!("check.all_good"));
    } else {
        Logger::success(tf!("check.passed_with_warnings", warnings));
    }
    Ok(())
}
