// ============================================================================
// TsCat - CLI Module
// ============================================================================
//
// File: src/cli/mod.rs
// Responsibility: CLI entry, command enumeration and routing
// Boundaries:
//   - ✅ CLI structure and command enum
//   - ✅ Global option parsing and config overrides
//   - ✅ Command dispatch
//   - ❌ Should not contain command implementations
//   - ❌ Should not contain catalog logic
//
// ============================================================================

pub mod check;
pub mod init;
pub mod lookup;
pub mod merge;
pub mod normalize;
pub mod stats;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::models::catalog::Catalog;
use crate::models::config::{Config, RuntimeArgs};
use crate::tf;
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use lookup::{handle_lookup, LookupArgs};
use merge::{handle_merge, MergeArgs};
use normalize::{handle_normalize, NormalizeArgs};
use stats::{handle_stats, StatsArgs};

/// TsCat - Qt Linguist translation catalog tool
#[derive(Debug, Parser)]
#[command(name = "tscat")]
#[command(about = "Inspect, check and maintain Qt Linguist .ts translation catalogs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (en_us, es_es)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Configuration file (defaults to ./tscat.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum catalogs parsed concurrently
    #[arg(short = 'j', long, global = true)]
    pub max_concurrency: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a source string the way the application would
    Lookup(LookupArgs),
    /// Show translation progress of a catalog or a directory of catalogs
    Stats(StatsArgs),
    /// Check catalog hygiene
    Check(CheckArgs),
    /// Merge freshly extracted strings into an existing catalog
    Merge(MergeArgs),
    /// Rewrite a catalog in canonical layout
    Normalize(NormalizeArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    Logger::init_tracing(cli.verbose);
    Config::initialize(cli.config.as_deref())?;
    Config::merge_runtime_args(build_runtime_args(&cli))?;
    Colors::configure(Config::get_colored());

    match cli.command {
        Commands::Lookup(args) => handle_lookup(args),
        Commands::Stats(args) => handle_stats(args).await,
        Commands::Check(args) => handle_check(args),
        Commands::Merge(args) => handle_merge(args),
        Commands::Normalize(args) => handle_normalize(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
        max_concurrency: cli.max_concurrency,
    }
}

/// Load a catalog file, naming the file in the error
pub(crate) fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::from_path(path).with_context(|| tf!("error.load_catalog", path.display()))
}
