// ============================================================================
// TsCat - CLI Merge Command
// ============================================================================
//
// File: src/cli/merge.rs
// Responsibility: merge an extracted catalog into an existing one
// Boundaries:
//   - ✅ Merge argument definition
//   - ✅ Reading inputs, writing the merged catalog
//   - ❌ Should not contain merge rules
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::load_catalog;
use crate::core::{CatalogMerger, MergeOptions};
use crate::models::catalog::CatalogBuilder;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Merge extracted strings into a translated catalog
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Existing translated catalog (created when missing)
    pub existing: PathBuf,

    /// Catalog produced by string extraction
    pub extracted: PathBuf,

    /// Output file (defaults to overwriting the existing catalog)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Remove strings that are no longer extracted instead of marking them obsolete
    #[arg(long)]
    pub drop_obsolete: bool,
}

pub fn handle_merge(args: MergeArgs) -> Result<()> {
    let extracted = load_catalog(&args.extracted)?;
    let existing = if args.existing.exists() {
        load_catalog(&args.existing)?
    } else {
        Logger::info(tf!("merge.new_catalog", args.existing.display()));
        CatalogBuilder::new(extracted.version()).build()
    };

    let options = MergeOptions {
        drop_obsolete: args.drop_obsolete || Config::get_drop_obsolete(),
    };
    let (merged, report) = CatalogMerger::new(options).merge(&existing, &extracted);

    let output = args.output.unwrap_or(args.existing);
    merged
        .save(&output)
        .with_context(|| tf!("error.write_catalog", output.display()))?;

    summary::render_merge_report(&report);
    Logger::success(tf!("merge.written", output.display()));
    if report.added > 0 {
        Logger::info(t!("merge.translate_hint"));
    }
    Ok(())
}
