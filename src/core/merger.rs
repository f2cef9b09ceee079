// ============================================================================
// TsCat - Catalog Merger
// ============================================================================
//
// File: src/core/merger.rs
// Responsibility: fold freshly extracted strings into an existing catalog
// Boundaries:
//   - ✅ Carrying translations over to re-extracted messages
//   - ✅ Adding new messages as unfinished
//   - ✅ Retiring or dropping messages that are no longer extracted
//   - ❌ Should not contain XML handling
//   - ❌ Should not contain fuzzy matching of changed source strings
//
// Algorithm:
// 1. Walk the extracted catalog in order; each message either matches an
//    existing key (translation carried) or is new (unfinished)
// 2. Append existing messages that were not extracted, as obsolete
// 3. Append existing contexts that vanished entirely, same rule
//
// ============================================================================

use crate::models::catalog::{Catalog, CatalogBuilder, Context, Message, Status};
use crate::models::report::MergeReport;

/// Merge behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Remove messages that are no longer extracted instead of retiring them.
    pub drop_obsolete: bool,
}

/// Combines an existing (translated) catalog with a newly extracted one.
pub struct CatalogMerger {
    options: MergeOptions,
}

impl CatalogMerger {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Produce a new catalog; neither input is modified.
    pub fn merge(&self, existing: &Catalog, extracted: &Catalog) -> (Catalog, MergeReport) {
        let mut report = MergeReport::default();
        let mut builder = CatalogBuilder::new(extracted.version())
            .language(
                existing
                    .language()
                    .or(extracted.language())
                    .map(str::to_string),
            )
            .source_language(
                existing
                    .source_language()
                    .or(extracted.source_language())
                    .map(str::to_string),
            );

        for context in extracted.contexts() {
            let previous = existing.context(context.name());
            let comment = context
                .comment()
                .or_else(|| previous.and_then(Context::comment))
                .map(str::to_string);
            builder.context(context.name(), comment);

            for message in context.messages() {
                let carried = previous
                    .and_then(|prev| prev.find(&message.source, message.comment.as_deref()));
                let merged = match carried {
                    Some(old) => {
                        report.kept += 1;
                        carry_translation(old, message)
                    }
                    None => {
                        report.added += 1;
                        untranslated(message)
                    }
                };
                builder.message(context.name(), merged);
            }

            if let Some(previous) = previous {
                self.retire_missing(&mut builder, previous, Some(context), &mut report);
            }
        }

        for previous in existing.contexts() {
            if extracted.context(previous.name()).is_none() {
                self.retire_missing(&mut builder, previous, None, &mut report);
            }
        }

        tracing::debug!(
            kept = report.kept,
            added = report.added,
            obsoleted = report.obsoleted,
            dropped = report.dropped,
            "merge finished"
        );
        (builder.build(), report)
    }

    fn retire_missing(
        &self,
        builder: &mut CatalogBuilder,
        previous: &Context,
        extracted: Option<&Context>,
        report: &mut MergeReport,
    ) {
        let missing: Vec<&Message> = previous
            .messages()
            .iter()
            .filter(|old| {
                extracted
                    .and_then(|ctx| ctx.find(&old.source, old.comment.as_deref()))
                    .is_none()
            })
            .collect();
        if missing.is_empty() {
            return;
        }

        if self.options.drop_obsolete {
            report.dropped += missing.len();
            return;
        }

        if extracted.is_none() {
            builder.context(previous.name(), previous.comment().map(str::to_string));
        }
        for old in missing {
            let mut retired = old.clone();
            retired.locations.clear();
            if !retired.status.is_retired() {
                retired.status = Status::Obsolete;
            }
            report.obsoleted += 1;
            builder.message(previous.name(), retired);
        }
    }
}

/// Keep the translator's work, take everything describing the code from extraction.
fn carry_translation(old: &Message, extracted: &Message) -> Message {
    let mut merged = extracted.clone();
    merged.translation = old.translation.clone();
    merged.numerus_forms = old.numerus_forms.clone();
    merged.translator_comment = old.translator_comment.clone();
    merged.status = match old.status {
        Status::Obsolete | Status::Vanished if has_text(old) => Status::Finished,
        Status::Obsolete | Status::Vanished => Status::Unfinished,
        status => status,
    };
    merged
}

fn untranslated(extracted: &Message) -> Message {
    let mut message = extracted.clone();
    message.translation.clear();
    message.numerus_forms.clear();
    message.status = Status::Unfinished;
    message
}

/// Carries some non-empty text, regardless of status.
fn has_text(message: &Message) -> bool {
    !message.translation.is_empty() || message.numerus_forms.iter().any(|form| !form.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Catalog {
        let mut builder = CatalogBuilder::new("2.0").language(Some("es".to_string()));
        builder
            .message(
                "MainWindow",
                Message::new("System")
                    .with_translation("Sistema")
                    .with_location("mainwin.cpp", 10),
            )
            .message("MainWindow", Message::new("Away").with_translation("Ausente"))
            .message(
                "MainWindow",
                Message::new("Occupied")
                    .with_translation("Ocupado")
                    .with_status(Status::Obsolete),
            )
            .message("OldDlg", Message::new("Bye").with_translation("Adiós"));
        builder.build()
    }

    fn extracted() -> Catalog {
        let mut builder = CatalogBuilder::new("2.1");
        builder
            .message(
                "MainWindow",
                Message::new("System").with_location("mainwin.cpp", 42),
            )
            .message("MainWindow", Message::new("Occupied"))
            .message("MainWindow", Message::new("Invisible"));
        builder.build()
    }

    #[test]
    fn carries_translations_and_takes_new_locations() {
        let merger = CatalogMerger::new(MergeOptions::default());
        let (merged, report) = merger.merge(&existing(), &extracted());

        let system = merged.find("MainWindow", "System", None).expect("kept");
        assert_eq!(system.translation, "Sistema");
        assert_eq!(system.status, Status::Finished);
        assert_eq!(system.locations[0].line.as_deref(), Some("42"));
        assert_eq!(merged.language(), Some("es"));
        assert_eq!(merged.version(), "2.1");
        assert_eq!(report.kept, 2);
        assert_eq!(report.added, 1);
    }

    #[test]
    fn revived_obsolete_translation_becomes_finished() {
        let merger = CatalogMerger::new(MergeOptions::default());
        let (merged, _) = merger.merge(&existing(), &extracted());
        let occupied = merged.find("MainWindow", "Occupied", None).expect("revived");
        assert_eq!(occupied.status, Status::Finished);
        assert_eq!(merged.lookup("MainWindow", "Occupied", None), "Ocupado");
    }

    #[test]
    fn new_messages_are_unfinished() {
        let merger = CatalogMerger::new(MergeOptions::default());
        let (merged, _) = merger.merge(&existing(), &extracted());
        let invisible = merged.find("MainWindow", "Invisible", None).expect("added");
        assert_eq!(invisible.status, Status::Unfinished);
        assert_eq!(merged.lookup("MainWindow", "Invisible", None), "Invisible");
    }

    #[test]
    fn missing_messages_are_retired_after_extracted_ones() {
        let merger = CatalogMerger::new(MergeOptions::default());
        let (merged, report) = merger.merge(&existing(), &extracted());

        let sources: Vec<&str> = merged
            .context("MainWindow")
            .expect("context")
            .messages()
            .iter()
            .map(|m| m.source.as_str())
            .collect();
        assert_eq!(sources, ["System", "Occupied", "Invisible", "Away"]);

        let away = merged.find("MainWindow", "Away", None).expect("retired");
        assert_eq!(away.status, Status::Obsolete);
        assert_eq!(away.translation, "Ausente");
        assert_eq!(merged.lookup("MainWindow", "Away", None), "Away");

        let bye = merged.find("OldDlg", "Bye", None).expect("context kept");
        assert_eq!(bye.status, Status::Obsolete);
        assert_eq!(report.obsoleted, 2);
    }

    #[test]
    fn drop_obsolete_removes_missing_messages() {
        let options = MergeOptions { drop_obsolete: true };
        let (merged, report) = CatalogMerger::new(options).merge(&existing(), &extracted());

        assert!(merged.find("MainWindow", "Away", None).is_none());
        assert!(merged.context("OldDlg").is_none());
        assert_eq!(report.dropped, 2);
        assert_eq!(report.obsoleted, 0);
    }
}
