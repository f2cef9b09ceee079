// ============================================================================
// TsCat - Catalog Scanner
// ============================================================================
//
// File: src/core/scanner.rs
// Responsibility: find catalogs below a directory and summarize each one
// Boundaries:
//   - ✅ Directory walking with ignore patterns
//   - ✅ Concurrent, bounded catalog loading
//   - ✅ Per-file error isolation
//   - ❌ Should not contain parsing details
//   - ❌ Should not contain rendering
//
// ============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use walkdir::WalkDir;

use crate::core::parser::is_catalog_document;
use crate::models::catalog::Catalog;
use crate::models::report::FileStats;
use crate::utils::constants::CATALOG_EXTENSION;

/// Walks a directory tree for translation catalogs.
pub struct CatalogScanner {
    root: PathBuf,
    ignore: Vec<glob::Pattern>,
    max_concurrency: usize,
}

impl CatalogScanner {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore: Vec::new(),
            max_concurrency: 1,
        }
    }

    /// Invalid glob patterns are skipped with a warning.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore = patterns
            .iter()
            .filter_map(|pattern| match glob::Pattern::new(pattern) {
                Ok(compiled) => Some(compiled),
                Err(err) => {
                    tracing::warn!(pattern = pattern.as_str(), %err, "ignoring invalid glob pattern");
                    None
                }
            })
            .collect();
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let text = relative.to_string_lossy();
        self.ignore.iter().any(|pattern| {
            pattern.matches(&text)
                || relative
                    .components()
                    .any(|part| pattern.matches(&part.as_os_str().to_string_lossy()))
        })
    }

    /// Candidate files in path order. A file root is returned as-is.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }
        if !self.root.exists() {
            anyhow::bail!("path does not exist: {}", self.root.display());
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_ignored(entry.path()));
        for entry in walker {
            let entry = entry.with_context(|| format!("failed to walk {}", self.root.display()))?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(CATALOG_EXTENSION)
            {
                files.push(path.to_path_buf());
            }
        }
        Ok(files)
    }

    /// Load every discovered catalog; failures are reported per file.
    pub async fn scan(&self) -> Result<Vec<FileStats>> {
        let files = self.discover()?;
        tracing::debug!(count = files.len(), root = %self.root.display(), "scanning catalogs");

        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();
        for path in files {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .context("scan semaphore closed")?;
            tasks.spawn_blocking(move || {
                let _permit = permit;
                summarize(path)
            });
        }

        let mut results = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            if let Some(stats) = joined.context("catalog task panicked")? {
                results.push(stats);
            }
        }
        results.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(results)
    }
}

/// Stats for one file, or `None` when it is not a catalog at all.
fn summarize(path: PathBuf) -> Option<FileStats> {
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return Some(FileStats {
                path,
                language: None,
                stats: None,
                error: Some(err.to_string()),
            })
        }
    };
    if !is_catalog_document(&bytes) {
        tracing::debug!(path = %path.display(), "skipping non-catalog .ts file");
        return None;
    }

    Some(match Catalog::load(&bytes) {
        Ok(catalog) => FileStats {
            language: catalog.language().map(str::to_string),
            stats: Some(catalog.stats()),
            error: None,
            path,
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load catalog");
            FileStats {
                path,
                language: None,
                stats: None,
                error: Some(err.to_string()),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="es">
<context>
    <name>Dlg</name>
    <message>
        <source>OK</source>
        <translation>Aceptar</translation>
    </message>
    <message>
        <source>Cancel</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

    fn workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("i18n")).expect("mkdir");
        fs::create_dir_all(dir.path().join("node_modules/pkg")).expect("mkdir");
        fs::write(dir.path().join("i18n/licq_es.ts"), CATALOG).expect("write");
        fs::write(dir.path().join("i18n/broken_de.ts"), "<TS><context>").expect("write");
        fs::write(dir.path().join("i18n/app.ts"), "export const x = 1;\n").expect("write");
        fs::write(dir.path().join("node_modules/pkg/other.ts"), CATALOG).expect("write");
        fs::write(dir.path().join("README.md"), "docs").expect("write");
        dir
    }

    #[test]
    fn discover_honors_ignore_patterns() {
        let dir = workspace();
        let scanner = CatalogScanner::new(dir.path().to_path_buf())
            .with_ignore_patterns(&["node_modules".to_string()]);
        let files = scanner.discover().expect("discover");

        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["app.ts", "broken_de.ts", "licq_es.ts"]);
    }

    #[tokio::test]
    async fn scan_isolates_failures_and_skips_typescript() {
        let dir = workspace();
        let scanner = CatalogScanner::new(dir.path().to_path_buf())
            .with_ignore_patterns(&["node_modules".to_string()])
            .with_max_concurrency(2);
        let results = scanner.scan().await.expect("scan");

        assert_eq!(results.len(), 2);
        let broken = &results[0];
        assert!(broken.path.ends_with("broken_de.ts"));
        assert!(broken.error.is_some());

        let good = &results[1];
        assert_eq!(good.language.as_deref(), Some("es"));
        let stats = good.stats.expect("stats");
        assert_eq!(stats.finished, 1);
        assert_eq!(stats.unfinished, 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let scanner = CatalogScanner::new(PathBuf::from("/definitely/not/here"));
        assert!(scanner.discover().is_err());
    }

    #[tokio::test]
    async fn long_license_header_does_not_hide_a_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let header = format!("<!--\n{}-->\n", "Licensed under the GPL.\n".repeat(60));
        let catalog = CATALOG.replacen("<!DOCTYPE TS>", &format!("{}<!DOCTYPE TS>", header), 1);
        fs::write(dir.path().join("licq_es.ts"), catalog).expect("write");
        fs::write(
            dir.path().join("query.ts"),
            "export function first<TSource>(items: Array<TSource>): TSource {\n  return items[0];\n}\n",
        )
        .expect("write");

        let results = CatalogScanner::new(dir.path().to_path_buf())
            .scan()
            .await
            .expect("scan");

        assert_eq!(results.len(), 1);
        assert!(results[0].path.ends_with("licq_es.ts"));
        assert!(results[0].error.is_none());
        assert_eq!(results[0].stats.map(|s| s.finished), Some(1));
    }
}
