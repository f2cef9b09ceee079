// ============================================================================
// TsCat - Binary Entry
// ============================================================================
//
// File: src/main.rs
// Responsibility: process entry and exit code
// Boundaries:
//   - ✅ Runtime startup
//   - ✅ Top-level error reporting
//   - ❌ Should not contain command logic
//
// ============================================================================

use tscat::cli::run_cli;
use tscat::utils::logger::Logger;

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        Logger::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
