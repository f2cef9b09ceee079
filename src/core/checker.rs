// ============================================================================
// TsCat - Catalog Checker
// ============================================================================
//
// File: src/core/checker.rs
// Responsibility: catalog hygiene diagnostics
// Boundaries:
//   - ✅ Duplicate key reporting
//   - ✅ Source/translation consistency rules
//   - ✅ Numerus form count against the catalog language
//   - ❌ Should not contain rendering
//   - ❌ Should not modify the catalog
//
// Only finished messages are compared with their source; unfinished and
// retired ones are displayed as source text anyway.
//
// ============================================================================

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::models::catalog::{Catalog, Message, Status};
use crate::models::config::CheckConfig;
use crate::models::plural;
use crate::models::report::{Diagnostic, DiagnosticKind};

/// `%1`..`%99`, localized `%L1`, and the numerus count `%n`.
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"%L?(\d{1,2}|n)").expect("placeholder pattern is valid"))
}

fn placeholders(text: &str, skip_count: bool) -> BTreeSet<&str> {
    placeholder_pattern()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| !(skip_count && token.ends_with('n')))
        .collect()
}

fn join(tokens: &BTreeSet<&str>) -> String {
    tokens.iter().copied().collect::<Vec<_>>().join(" ")
}

const TERMINATORS: [&str; 4] = ["...", ":", "?", "!"];

/// Trailing punctuation class of a string; `...` is checked before `.`.
fn terminator(text: &str) -> Option<&'static str> {
    let text = text.trim_end();
    TERMINATORS
        .iter()
        .copied()
        .find(|t| text.ends_with(t))
        .or_else(|| text.ends_with('.').then_some("."))
}

fn edge_whitespace(text: &str) -> (bool, bool) {
    (
        text.starts_with(char::is_whitespace),
        text.ends_with(char::is_whitespace),
    )
}

/// Runs the enabled checks over a catalog.
pub struct CatalogChecker {
    config: CheckConfig,
}

impl CatalogChecker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, catalog: &Catalog) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.config.duplicates {
            for duplicate in catalog.duplicates() {
                let message = Message {
                    source: duplicate.source.clone(),
                    comment: duplicate.comment.clone(),
                    ..Default::default()
                };
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::DuplicateKey,
                    &duplicate.context,
                    &message,
                ));
            }
        }

        let expected_forms = catalog.language().map(plural::form_count);
        for context in catalog.contexts() {
            for message in context.messages() {
                if message.status == Status::Finished {
                    self.check_message(context.name(), message, expected_forms, &mut diagnostics);
                }
            }
        }

        tracing::debug!(count = diagnostics.len(), "catalog check finished");
        diagnostics
    }

    fn check_message(
        &self,
        context: &str,
        message: &Message,
        expected_forms: Option<usize>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let texts: Vec<&str> = if message.numerus_forms.is_empty() {
            vec![message.translation.as_str()]
        } else {
            message.numerus_forms.iter().map(String::as_str).collect()
        };

        if self.config.empty_translations && !message.is_translated() {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::EmptyTranslation,
                context,
                message,
            ));
            return;
        }

        if self.config.placeholders {
            let expected = placeholders(&message.source, message.numerus);
            for text in &texts {
                let found = placeholders(text, message.numerus);
                if found != expected {
                    diagnostics.push(
                        Diagnostic::new(DiagnosticKind::PlaceholderMismatch, context, message)
                            .with_detail(format!("[{}] -> [{}]", join(&expected), join(&found))),
                    );
                    break;
                }
            }
        }

        if self.config.whitespace
            && texts
                .iter()
                .any(|t| edge_whitespace(t) != edge_whitespace(&message.source))
        {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::WhitespaceMismatch,
                context,
                message,
            ));
        }

        if self.config.punctuation {
            let expected = terminator(&message.source);
            if let Some(text) = texts.iter().find(|t| terminator(t) != expected) {
                diagnostics.push(
                    Diagnostic::new(DiagnosticKind::PunctuationMismatch, context, message)
                        .with_detail(format!(
                            "{:?} -> {:?}",
                            expected.unwrap_or(""),
                            terminator(text).unwrap_or("")
                        )),
                );
            }
        }

        if self.config.numerus && message.numerus {
            if let Some(expected) = expected_forms {
                if message.numerus_forms.len() != expected {
                    diagnostics.push(
                        Diagnostic::new(DiagnosticKind::NumerusFormCount, context, message)
                            .with_detail(format!(
                                "{} -> {}",
                                expected,
                                message.numerus_forms.len()
                            )),
                    );
                }
            }
        }
    }
}
