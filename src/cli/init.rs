// ============================================================================
// TsCat - Init Command
// ============================================================================
//
// File: src/cli/init.rs
// Responsibility: configuration file initialization
// Boundaries:
//   - ✅ Init argument parsing
//   - ✅ Default configuration file generation
//   - ✅ Existing file check
//   - ❌ Should not contain configuration format definition
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::models::config::Config;
use crate::utils::constants::CONFIG_FILE;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Init command arguments
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Configuration file to create
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

pub fn handle_init(args: InitArgs) -> Result<()> {
    Logger::info(t!("init.start"));

    if args.output.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", args.output.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    match Config::create_default_config_file(&args.output) {
        Ok(_) => {
            Logger::info(tf!("init.config_created", args.output.display()));
        }
        Err(e) => {
            Logger::error(tf!("init.create_failed", e));
            return Err(e);
        }
    }

    Ok(())
}
