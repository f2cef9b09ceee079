// ============================================================================
// TsCat - Configuration Model
// ============================================================================
//
// File: src/models/config.rs
// Responsibility: configuration file structures and global access
// Boundaries:
//   - ✅ Configuration data structures
//   - ✅ TOML serialization/deserialization
//   - ✅ Defaults and runtime overrides
//   - ✅ Configuration file reading and writing
//   - ❌ Should not contain CLI argument parsing
//   - ❌ Should not contain catalog logic
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

use crate::utils::constants::CONFIG_FILE;

/// Global configuration, set once at startup
static GLOBAL_CONFIG: OnceLock<Arc<RwLock<Config>>> = OnceLock::new();

/// `tscat.toml` structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog discovery and merge settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Directory scan settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// Enabled hygiene checks
    #[serde(default)]
    pub check: CheckConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Tool message language
    #[serde(default)]
    pub i18n: I18nConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Glob patterns of paths never scanned
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Remove messages no longer extracted instead of keeping them obsolete
    #[serde(default)]
    pub drop_obsolete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Maximum catalogs parsed at once
    #[serde(default)]
    pub max_concurrency: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default = "default_true")]
    pub duplicates: bool,
    #[serde(default = "default_true")]
    pub empty_translations: bool,
    #[serde(default = "default_true")]
    pub placeholders: bool,
    #[serde(default = "default_true")]
    pub whitespace: bool,
    #[serde(default = "default_true")]
    pub punctuation: bool,
    #[serde(default = "default_true")]
    pub numerus: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_true")]
    pub colored: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Interface language (en_us, es_es)
    #[serde(default)]
    pub language: String,
}

fn default_true() -> bool {
    true
}

/// CLI overrides applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
    pub max_concurrency: Option<usize>,
}

/// Default values that do not require an initialized global config
pub trait ConfigDefaults {
    fn default_ignore_patterns() -> Vec<String> {
        vec![
            ".git".to_string(),
            "node_modules".to_string(),
            "target".to_string(),
        ]
    }

    fn default_max_concurrency() -> usize {
        num_cpus::get()
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// Initialize the global configuration (called once at startup)
    pub fn initialize(path: Option<&Path>) -> anyhow::Result<()> {
        let config = Self::load_config(path)?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// Load an explicit path, or `tscat.toml` in the working directory when present
    fn load_config(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = PathBuf::from(CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply CLI overrides to the global configuration
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        if let Some(verbose) = args.verbose {
            config.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            config.output.colored = colored;
        }
        if let Some(language) = args.language {
            config.i18n.language = language;
        }
        if let Some(max_concurrency) = args.max_concurrency {
            config.scan.max_concurrency = max_concurrency;
        }

        Ok(())
    }

    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// Run `f` against the global configuration
    fn read<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }

    /// Interface language
    pub fn get_language() -> anyhow::Result<String> {
        Self::read(|config| config.i18n.language.clone())
    }

    pub fn get_verbose() -> bool {
        Self::read(|config| config.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    pub fn get_colored() -> bool {
        Self::read(|config| config.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    pub fn get_ignore_patterns() -> Vec<String> {
        Self::read(|config| config.catalog.ignore.clone())
            .unwrap_or_else(|_| Self::default_ignore_patterns())
    }

    pub fn get_drop_obsolete() -> bool {
        Self::read(|config| config.catalog.drop_obsolete).unwrap_or(false)
    }

    /// Zero in the file means "one per CPU"
    pub fn get_max_concurrency() -> usize {
        match Self::read(|config| config.scan.max_concurrency) {
            Ok(0) | Err(_) => Self::default_max_concurrency(),
            Ok(n) => n,
        }
    }

    pub fn get_check_config() -> CheckConfig {
        Self::read(|config| config.check).unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            scan: ScanConfig::default(),
            check: CheckConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ignore: Config::default_ignore_patterns(),
            drop_obsolete: false,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_concurrency: Config::default_max_concurrency(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            duplicates: true,
            empty_translations: true,
            placeholders: true,
            whitespace: true,
            punctuation: true,
            numerus: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
