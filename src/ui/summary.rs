// ============================================================================
// TsCat - Report Rendering
// ============================================================================
//
// File: src/ui/summary.rs
// Responsibility: console rendering of stats, diagnostics and merge results
// Boundaries:
//   - ✅ Table style console output
//   - ✅ Progress bars
//   - ✅ Localized labels
//   - ❌ Should not compute statistics or run checks
//   - ❌ Should not contain file operations
//
// ============================================================================

use crate::models::report::{
    CatalogStats, ContextStats, Diagnostic, FileStats, MergeReport, Severity,
};
use crate::utils::colors::Colors;
use crate::utils::constants::{icons, progress_chars};
use crate::utils::logger::Logger;
use crate::{t, tf};

const BAR_WIDTH: usize = 20;
const RULE: &str = "───────────────────────────────────────";

/// `███████░░░` for a ratio in 0.0..=1.0
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!(
        "{}{}",
        progress_chars::FILLED.repeat(filled),
        progress_chars::EMPTY.repeat(width - filled)
    )
}

fn colored_bar(stats: &CatalogStats) -> String {
    let ratio = stats.completion();
    let bar = progress_bar(ratio, BAR_WIDTH);
    if ratio >= 1.0 {
        Colors::success(&bar)
    } else if ratio >= 0.5 {
        Colors::warn(&bar)
    } else {
        Colors::error(&bar)
    }
}

fn stats_line(stats: &CatalogStats) -> String {
    format!(
        "{} {:>5.1}%  {}",
        colored_bar(stats),
        stats.completion() * 100.0,
        tf!(
            "summary.counts",
            stats.finished,
            stats.unfinished,
            stats.obsolete
        )
    )
}

/// One line per scanned file
pub fn render_file_stats(results: &[FileStats]) {
    Logger::info(format!("{} {}", icons::SUMMARY, t!("summary.catalog_stats")));
    Logger::info(RULE);

    let mut total = CatalogStats::default();
    let mut failed = 0;
    for file in results {
        let language = file.language.as_deref().unwrap_or("-");
        match (&file.stats, &file.error) {
            (Some(stats), _) => {
                total.add(stats);
                Logger::plain(format!(
                    "{} {} [{}]",
                    icons::CATALOG,
                    Colors::bold(&file.path.display().to_string()),
                    language
                ));
                Logger::plain(format!("    {}", stats_line(stats)));
            }
            (None, error) => {
                failed += 1;
                Logger::plain(format!(
                    "{} {} {}",
                    Colors::error(icons::ERROR),
                    Colors::bold(&file.path.display().to_string()),
                    Colors::error(&tf!(
                        "summary.load_failed",
                        error.as_deref().unwrap_or_default()
                    ))
                ));
            }
        }
    }

    if results.len() > 1 {
        Logger::info(RULE);
        render_totals(&total);
    }
    if failed > 0 {
        Logger::warn(tf!("summary.failed_files", failed));
    }
}

/// One line per context of a single catalog
pub fn render_context_stats(contexts: &[ContextStats]) {
    Logger::info(format!("{} {}", icons::SUMMARY, t!("summary.context_stats")));
    Logger::info(RULE);

    let width = contexts.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for context in contexts {
        Logger::plain(format!(
            "{} {:<width$}  {}",
            icons::CONTEXT,
            context.name,
            stats_line(&context.stats),
            width = width
        ));
    }
}

pub fn render_totals(stats: &CatalogStats) {
    Logger::info(format!("{} {}", t!("summary.total"), stats_line(stats)));
}

/// Diagnostics grouped by context, in catalog order
pub fn render_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    Logger::info(format!("{} {}", icons::SUMMARY, t!("summary.diagnostics")));
    Logger::info(RULE);

    let mut current_context: Option<&str> = None;
    for diagnostic in diagnostics {
        if current_context != Some(diagnostic.context.as_str()) {
            Logger::plain(format!(
                "{} {}",
                icons::CONTEXT,
                Colors::bold(&diagnostic.context)
            ));
            current_context = Some(diagnostic.context.as_str());
        }

        let marker = match diagnostic.severity {
            Severity::Error => Colors::error(icons::ERROR),
            Severity::Warning => Colors::warn(icons::WARNING),
        };
        let mut line = format!(
            "  {} {:?} {} {}",
            marker,
            diagnostic.source,
            icons::ARROW,
            t!(diagnostic.kind.message_key())
        );
        if let Some(comment) = &diagnostic.comment {
            line.push_str(&format!(" {}", Colors::muted(&format!("({})", comment))));
        }
        if let Some(detail) = &diagnostic.detail {
            line.push_str(&format!(" {}", Colors::muted(detail)));
        }
        Logger::plain(line);
    }
}

pub fn render_merge_report(report: &MergeReport) {
    Logger::info(format!("{} {}", icons::SUMMARY, t!("summary.merge")));
    Logger::info(RULE);
    Logger::info(tf!("summary.merge_kept", report.kept));
    Logger::info(tf!("summary.merge_added", report.added));
    if report.dropped > 0 {
        Logger::info(tf!("summary.merge_dropped", report.dropped));
    } else {
        Logger::info(tf!("summary.merge_obsoleted", report.obsoleted));
    }
}
