// ============================================================================
// TsCat - Data Models
// ============================================================================
//
// File: src/models/mod.rs
// Responsibility: data model module entry and re-exports
//
// ============================================================================

pub mod catalog;
pub mod config;
pub mod plural;
pub mod report;

pub use catalog::{Catalog, CatalogBuilder, Context, DuplicateKey, Location, Message, Status};
pub use report::{
    CatalogStats, ContextStats, Diagnostic, DiagnosticKind, FileStats, MergeReport, Severity,
};
