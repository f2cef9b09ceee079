// ============================================================================
// TsCat - English Translation Table
// ============================================================================
//
// File: src/i18n/en_us.rs
// Responsibility: English console message definitions
// Boundaries:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Errors
    ("error.load_catalog", "Failed to load catalog: {}"),
    ("error.write_catalog", "Failed to write catalog: {}"),
    // Lookup
    ("lookup.status", "Status: {}"),
    ("lookup.developer_note", "Developer note: {}"),
    (
        "lookup.not_found",
        "No entry found, showing the source text",
    ),
    // Stats
    ("stats.scanning", "Scanning for catalogs in {}"),
    ("stats.no_catalogs", "No translation catalogs found"),
    // Check
    ("cli.check.start", "Checking catalog: {}"),
    ("check.failed", "Check failed: {} errors, {} warnings"),
    ("check.all_good", "Catalog is clean"),
    (
        "check.passed_with_warnings",
        "Check passed with {} warnings",
    ),
    // Merge
    (
        "merge.new_catalog",
        "{} does not exist yet, starting a new catalog",
    ),
    ("merge.written", "Merged catalog written to {}"),
    (
        "merge.translate_hint",
        "New messages are marked unfinished and need translating",
    ),
    // Normalize
    ("normalize.would_change", "{} is not in canonical layout"),
    ("normalize.already_normalized", "Catalog is already normalized"),
    ("normalize.written", "Normalized catalog written to {}"),
    // Init
    ("init.start", "Creating configuration file..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Configuration file created: {}"),
    ("init.create_failed", "Failed to create configuration file: {}"),
    // Diagnostics
    (
        "diagnostic.duplicate_key",
        "duplicate entry, the last one wins",
    ),
    ("diagnostic.empty_translation", "finished but empty"),
    ("diagnostic.placeholder_mismatch", "placeholders differ"),
    (
        "diagnostic.whitespace_mismatch",
        "leading or trailing whitespace differs",
    ),
    ("diagnostic.punctuation_mismatch", "ending punctuation differs"),
    ("diagnostic.numerus_form_count", "wrong number of plural forms"),
    // Summary
    ("summary.catalog_stats", "Catalog statistics"),
    ("summary.context_stats", "Per-context statistics"),
    ("summary.total", "Total"),
    (
        "summary.counts",
        "{} finished, {} unfinished, {} obsolete",
    ),
    ("summary.load_failed", "could not be read: {}"),
    ("summary.failed_files", "{} files could not be read"),
    ("summary.diagnostics", "Diagnostics"),
    ("summary.merge", "Merge result"),
    ("summary.merge_kept", "Kept translations: {}"),
    ("summary.merge_added", "New messages: {}"),
    ("summary.merge_obsoleted", "Marked obsolete: {}"),
    ("summary.merge_dropped", "Dropped: {}"),
];
