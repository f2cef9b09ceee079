// ============================================================================
// TsCat - Core Module
// ============================================================================
//
// File: src/core/mod.rs
// Responsibility: core catalog processing entry and exports
// Boundaries:
//   - ✅ Core submodule exports
//   - ✅ Re-export of commonly used types
//   - ❌ Should not contain concrete implementations
//   - ❌ Should not contain CLI or console output logic
//
// ============================================================================

pub mod checker;
pub mod merger;
pub mod parser;
pub mod scanner;
pub mod writer;

pub use checker::CatalogChecker;
pub use merger::{CatalogMerger, MergeOptions};
pub use parser::load;
pub use scanner::CatalogScanner;
pub use writer::serialize;
