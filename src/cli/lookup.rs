// ============================================================================
// TsCat - CLI Lookup Command
// ============================================================================
//
// File: src/cli/lookup.rs
// Responsibility: resolve one source string against a catalog
// Boundaries:
//   - ✅ Lookup argument definition
//   - ✅ Printing the resolved string and, in verbose mode, its entry
//   - ❌ Should not contain lookup rules
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::load_catalog;
use crate::models::config::Config;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Resolve a source string
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Catalog file
    pub file: PathBuf,

    /// Context name, e.g. the dialog class
    pub context: String,

    /// Source text as written in the code
    pub source: String,

    /// Disambiguating comment
    #[arg(short = 'c', long)]
    pub comment: Option<String>,

    /// Count used to select a plural form
    #[arg(short = 'n', long)]
    pub count: Option<u64>,
}

pub fn handle_lookup(args: LookupArgs) -> Result<()> {
    let catalog = load_catalog(&args.file)?;
    let comment = args.comment.as_deref();

    let text = match args.count {
        Some(count) => catalog.lookup_plural(&args.context, &args.source, comment, count),
        None => catalog.lookup(&args.context, &args.source, comment),
    };
    Logger::plain(text);

    if Config::get_verbose() {
        let entry = catalog
            .context(&args.context)
            .and_then(|ctx| ctx.resolve(&args.source, comment));
        match entry {
            Some(message) => {
                Logger::info(tf!("lookup.status", message.status));
                for location in &message.locations {
                    Logger::info(format!(
                        "  {} {}",
                        icons::ARROW,
                        Colors::muted(&format!(
                            "{}:{}",
                            location.file.as_deref().unwrap_or("?"),
                            location.line.as_deref().unwrap_or_default()
                        ))
                    ));
                }
                if let Some(note) = &message.extra_comment {
                    Logger::info(tf!("lookup.developer_note", note));
                }
            }
            None => Logger::warn(t!("lookup.not_found")),
        }
    }

    Ok(())
}
