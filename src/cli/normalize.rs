// ============================================================================
// TsCat - CLI Normalize Command
// ============================================================================
//
// File: src/cli/normalize.rs
// Responsibility: rewrite a catalog in canonical layout
// Boundaries:
//   - ✅ Normalize argument definition
//   - ✅ Load, serialize, compare or write
//   - ❌ Should not contain XML formatting rules
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::models::catalog::Catalog;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Rewrite a catalog in canonical layout
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Catalog file
    pub file: PathBuf,

    /// Output file (defaults to rewriting the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only report whether the file is already normalized
    #[arg(long)]
    pub check: bool,
}

pub fn handle_normalize(args: NormalizeArgs) -> Result<()> {
    let original = std::fs::read(&args.file)
        .with_context(|| tf!("error.load_catalog", args.file.display()))?;
    let catalog =
        Catalog::load(&original).with_context(|| tf!("error.load_catalog", args.file.display()))?;
    let normalized = catalog.to_ts_string();

    if args.check {
        if normalized.as_bytes() != original.as_slice() {
            anyhow::bail!(tf!("normalize.would_change", args.file.display()));
        }
        Logger::success(t!("normalize.already_normalized"));
        return Ok(());
    }

    let output = args.output.unwrap_or(args.file);
    std::fs::write(&output, normalized)
        .with_context(|| tf!("error.write_catalog", output.display()))?;
    Logger::success(tf!("normalize.written", output.display()));
    Ok(())
}
