// ============================================================================
// TsCat - Logger
// ============================================================================
//
// File: src/utils/logger.rs
// Responsibility: console output and diagnostic log setup
// Boundaries:
//   - ✅ User-facing console lines with level prefixes
//   - ✅ tracing subscriber initialization
//   - ❌ Should not contain business logic
//   - ❌ Should not contain file log writing
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::APP_NAME;

/// Console output for users; diagnostics go through `tracing`
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::info(&format!("[{}]", APP_NAME)), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::warn("[WARN]"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Colors::error("[ERROR]"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::success(&format!("[{}]", APP_NAME)), msg.as_ref());
    }

    /// Plain line without prefix, for tables and raw values
    pub fn plain<S: AsRef<str>>(msg: S) {
        println!("{}", msg.as_ref());
    }

    /// Install the tracing subscriber on stderr. `RUST_LOG` wins over `verbose`.
    pub fn init_tracing(verbose: bool) {
        let default_level = if verbose { "tscat=debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        // a second call (tests, embedding) keeps the first subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}
