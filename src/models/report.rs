// ============================================================================
// TsCat - Report Data Model
// ============================================================================
//
// File: src/models/report.rs
// Responsibility: result structures produced by stats, check, scan and merge
// Boundaries:
//   - ✅ Statistics, diagnostics and merge summary structures
//   - ✅ Serialization for JSON output
//   - ❌ Should not contain the checks themselves
//   - ❌ Should not contain rendering
//
// ============================================================================

use serde::Serialize;
use std::path::PathBuf;

use crate::models::catalog::{Message, Status};

/// Message counts by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub finished: usize,
    pub unfinished: usize,
    /// Obsolete and vanished entries.
    pub obsolete: usize,
}

impl CatalogStats {
    pub fn record(&mut self, message: &Message) {
        match message.status {
            Status::Finished => self.finished += 1,
            Status::Unfinished => self.unfinished += 1,
            Status::Obsolete | Status::Vanished => self.obsolete += 1,
        }
    }

    pub fn add(&mut self, other: &CatalogStats) {
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.obsolete += other.obsolete;
    }

    /// Messages still present in the UI.
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Finished share of active messages; an empty catalog counts as complete.
    pub fn completion(&self) -> f64 {
        if self.active() == 0 {
            1.0
        } else {
            self.finished as f64 / self.active() as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextStats {
    pub name: String,
    pub stats: CatalogStats,
}

/// Outcome of loading one file during a directory scan.
#[derive(Debug, Clone, Serialize)]
pub struct FileStats {
    pub path: PathBuf,
    pub language: Option<String>,
    pub stats: Option<CatalogStats>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    DuplicateKey,
    EmptyTranslation,
    PlaceholderMismatch,
    WhitespaceMismatch,
    PunctuationMismatch,
    NumerusFormCount,
}

impl DiagnosticKind {
    /// i18n key of the human-readable description.
    pub fn message_key(&self) -> &'static str {
        match self {
            DiagnosticKind::DuplicateKey => "diagnostic.duplicate_key",
            DiagnosticKind::EmptyTranslation => "diagnostic.empty_translation",
            DiagnosticKind::PlaceholderMismatch => "diagnostic.placeholder_mismatch",
            DiagnosticKind::WhitespaceMismatch => "diagnostic.whitespace_mismatch",
            DiagnosticKind::PunctuationMismatch => "diagnostic.punctuation_mismatch",
            DiagnosticKind::NumerusFormCount => "diagnostic.numerus_form_count",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::EmptyTranslation | DiagnosticKind::PlaceholderMismatch => {
                Severity::Error
            }
            _ => Severity::Warning,
        }
    }
}

/// One hygiene finding for a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
    /// Extra data, e.g. the differing placeholder sets.
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, context: &str, message: &Message) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            context: context.to_string(),
            source: message.source.clone(),
            comment: message.comment.clone(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Counters from merging an extracted catalog into an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Messages present on both sides; translations carried over.
    pub kept: usize,
    /// New messages from extraction, left unfinished.
    pub added: usize,
    /// Messages no longer extracted, kept as obsolete.
    pub obsoleted: usize,
    /// Messages no longer extracted and removed.
    pub dropped: usize,
}
