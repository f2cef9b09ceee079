// ============================================================================
// TsCat - Library Entry
// ============================================================================
//
// File: src/lib.rs
// Responsibility: crate module tree and public API re-exports
// Boundaries:
//   - ✅ Module declarations
//   - ✅ Re-export of the catalog API
//   - ❌ Should not contain implementations
//
// ============================================================================

//! Loader, lookup and maintenance tooling for Qt Linguist `.ts` catalogs.
//!
//! ```no_run
//! use tscat::Catalog;
//!
//! let catalog = Catalog::from_path("licq_es.ts")?;
//! assert_eq!(catalog.lookup("Examples::Dlg", "OK", None), "Aceptar");
//! # Ok::<(), tscat::CatalogError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

pub use error::{CatalogError, ParseError};
pub use models::catalog::{Catalog, CatalogBuilder, Context, Location, Message, Status};
