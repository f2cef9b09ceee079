// ============================================================================
// TsCat - Constants
// ============================================================================
//
// File: src/utils/constants.rs
// Responsibility: application constants
// Boundaries:
//   - ✅ Application name and file name constants
//   - ✅ Console icon characters
//   - ❌ Should not contain dynamic configuration
//   - ❌ Should not contain business logic
//
// ============================================================================

/// Application name
pub const APP_NAME: &str = "TSCAT";

/// Default configuration file name
pub const CONFIG_FILE: &str = "tscat.toml";

/// Catalog file extension
pub const CATALOG_EXTENSION: &str = "ts";

/// Pixel style icons
pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "!";
    /// Catalog file
    pub const CATALOG: &str = "●";
    /// Context
    pub const CONTEXT: &str = "▪";
    pub const ARROW: &str = "→";
    pub const SUMMARY: &str = "◈";
}

/// Progress bar characters
pub mod progress_chars {
    pub const FILLED: &str = "█";
    pub const EMPTY: &str = "░";
}
