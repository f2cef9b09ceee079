// ============================================================================
// TsCat - Catalog Data Model
// ============================================================================
//
// File: src/models/catalog.rs
// Responsibility: Context/Message model and read-only lookup
// Boundaries:
//   - ✅ Catalog, context and message data structures
//   - ✅ Lookup with source-text fallback
//   - ✅ Builder used by the parser and the merger
//   - ✅ Progress statistics
//   - ❌ Should not contain XML parsing or writing
//   - ❌ Should not contain merge policy
//
// Lookup keys are (context name, source text, disambiguating comment). An
// absent comment and an empty comment are the same key.
//
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CatalogError, Result};
use crate::models::plural;
use crate::models::report::{CatalogStats, ContextStats};

/// Completion state of a translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// No `type` attribute: the translation is ready to display.
    Finished,
    #[default]
    Unfinished,
    /// The source string no longer exists in the UI code.
    Obsolete,
    /// Newer spelling of `Obsolete` written by recent extraction tools.
    Vanished,
}

impl Status {
    /// Value of the `type` attribute on `<translation>`, `None` for finished.
    pub fn type_attribute(&self) -> Option<&'static str> {
        match self {
            Status::Finished => None,
            Status::Unfinished => Some("unfinished"),
            Status::Obsolete => Some("obsolete"),
            Status::Vanished => Some("vanished"),
        }
    }

    /// Obsolete and vanished entries are kept for history only.
    pub fn is_retired(&self) -> bool {
        matches!(self, Status::Obsolete | Status::Vanished)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "unfinished" => Ok(Status::Unfinished),
            "obsolete" => Ok(Status::Obsolete),
            "vanished" => Ok(Status::Vanished),
            _ => Err(format!("unknown translation type: {}", s)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_attribute().unwrap_or("finished"))
    }
}

/// Provenance of a message in the UI sources. Advisory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: Option<String>,
    /// Raw `line` attribute: absolute (`52`) or relative to the previous
    /// location (`+12`, `-5`), as lupdate wrote it.
    pub line: Option<String>,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line.to_string()),
        }
    }
}

/// One translatable unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub id: Option<String>,
    /// Plural message; its translation lives in `numerus_forms`.
    pub numerus: bool,
    pub locations: Vec<Location>,
    pub source: String,
    pub old_source: Option<String>,
    /// Disambiguating comment.
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    /// Note left by the developer for translators.
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub translation: String,
    pub numerus_forms: Vec<String>,
    pub status: Status,
}

impl Message {
    /// A new, untranslated message.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Set a translation and mark the message finished.
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self.status = Status::Finished;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.locations.push(Location::new(file, line));
        self
    }

    /// Plural message with the given forms, marked finished.
    pub fn with_numerus_forms<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numerus = true;
        self.numerus_forms = forms.into_iter().map(Into::into).collect();
        self.status = Status::Finished;
        self
    }

    /// The comment as used in lookup keys.
    pub fn disambiguator(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Finished and carrying non-empty text.
    pub fn is_translated(&self) -> bool {
        if self.status != Status::Finished {
            return false;
        }
        if self.numerus_forms.is_empty() {
            !self.translation.is_empty()
        } else {
            self.numerus_forms.iter().all(|form| !form.is_empty())
        }
    }

    /// The string the UI should show for this message.
    pub fn display_text(&self) -> &str {
        if self.status != Status::Finished {
            return &self.source;
        }
        let text = match self.numerus_forms.first() {
            Some(form) => form,
            None => &self.translation,
        };
        if text.is_empty() {
            &self.source
        } else {
            text
        }
    }

    /// The string to show for `form`, falling back to the source text.
    pub fn display_form(&self, form: usize) -> &str {
        if self.numerus_forms.is_empty() {
            return self.display_text();
        }
        match self.numerus_forms.get(form) {
            Some(text) if self.status == Status::Finished && !text.is_empty() => text,
            _ => &self.source,
        }
    }
}

/// A named scope of messages, generally one per dialog or widget class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    name: String,
    comment: Option<String>,
    messages: Vec<Message>,
    /// source -> disambiguator -> position in `messages`
    index: HashMap<String, HashMap<String, usize>>,
}

impl Context {
    pub(crate) fn new(name: impl Into<String>, comment: Option<String>) -> Self {
        Self {
            name: name.into(),
            comment,
            messages: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Messages in the order they were encountered.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Exact key match, no comment fallback.
    pub fn find(&self, source: &str, disambiguator: Option<&str>) -> Option<&Message> {
        let position = self
            .index
            .get(source)?
            .get(disambiguator.unwrap_or(""))?;
        self.messages.get(*position)
    }

    /// Qt resolution order: the exact comment first, then the comment-less entry.
    pub fn resolve(&self, source: &str, disambiguator: Option<&str>) -> Option<&Message> {
        match disambiguator {
            Some(comment) if !comment.is_empty() => self
                .find(source, Some(comment))
                .or_else(|| self.find(source, None)),
            _ => self.find(source, None),
        }
    }

    /// Insert a message, replacing (in place) any message with the same key.
    pub(crate) fn insert(&mut self, message: Message) -> Option<Message> {
        let slot = self.index.entry(message.source.clone()).or_default();
        match slot.get(message.disambiguator()) {
            Some(&position) => Some(std::mem::replace(&mut self.messages[position], message)),
            None => {
                slot.insert(message.disambiguator().to_string(), self.messages.len());
                self.messages.push(message);
                None
            }
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for message in &self.messages {
            stats.record(message);
        }
        stats
    }
}

/// A key that appeared more than once while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
}

/// A loaded translation catalog. Immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    language: Option<String>,
    source_language: Option<String>,
    contexts: Vec<Context>,
    index: HashMap<String, usize>,
    duplicates: Vec<DuplicateKey>,
}

impl PartialEq for Catalog {
    /// Structural equality; load diagnostics are not part of the content.
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.language == other.language
            && self.source_language == other.source_language
            && self.contexts == other.contexts
    }
}

impl Eq for Catalog {}

impl Catalog {
    /// Parse a `.ts` document.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        crate::core::parser::load(bytes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::load(&bytes)
    }

    /// Render back into `.ts` XML.
    pub fn to_ts_string(&self) -> String {
        crate::core::writer::serialize(self)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_ts_string()).map_err(CatalogError::from)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    /// All contexts in first-encounter order.
    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.index.get(name).and_then(|&i| self.contexts.get(i))
    }

    /// Keys overwritten while loading (last one wins).
    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(Context::len).sum()
    }

    pub fn find(
        &self,
        context: &str,
        source: &str,
        disambiguator: Option<&str>,
    ) -> Option<&Message> {
        self.context(context)?.find(source, disambiguator)
    }

    /// Resolve a UI string.
    ///
    /// Returns the translation when the message is finished and non-empty,
    /// otherwise `source` itself. Unknown contexts and keys are not errors.
    pub fn lookup<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguator: Option<&str>,
    ) -> &'a str {
        self.context(context)
            .and_then(|ctx| ctx.resolve(source, disambiguator))
            .map_or(source, Message::display_text)
    }

    /// Resolve a plural UI string for `count` using the catalog language's rule.
    pub fn lookup_plural<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguator: Option<&str>,
        count: u64,
    ) -> &'a str {
        let form = plural::plural_form(self.language().unwrap_or(""), count);
        self.context(context)
            .and_then(|ctx| ctx.resolve(source, disambiguator))
            .map_or(source, |message| message.display_form(form))
    }

    /// Totals over every message.
    pub fn stats(&self) -> CatalogStats {
        let mut total = CatalogStats::default();
        for context in &self.contexts {
            total.add(&context.stats());
        }
        total
    }

    pub fn context_stats(&self) -> Vec<ContextStats> {
        self.contexts
            .iter()
            .map(|context| ContextStats {
                name: context.name.clone(),
                stats: context.stats(),
            })
            .collect()
    }
}

/// Assembles a catalog; the only way to mutate one before it is published.
#[derive(Debug)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            catalog: Catalog {
                version: version.into(),
                language: None,
                source_language: None,
                contexts: Vec::new(),
                index: HashMap::new(),
                duplicates: Vec::new(),
            },
        }
    }

    pub fn language(mut self, language: Option<String>) -> Self {
        self.catalog.language = language;
        self
    }

    pub fn source_language(mut self, source_language: Option<String>) -> Self {
        self.catalog.source_language = source_language;
        self
    }

    /// Open (or reopen) a context. A repeated name folds into the first one.
    pub fn context(&mut self, name: &str, comment: Option<String>) -> &mut Self {
        match self.catalog.index.get(name) {
            Some(&position) => {
                tracing::debug!(context = name, "folding repeated context block");
                let existing = &mut self.catalog.contexts[position];
                if existing.comment.is_none() {
                    existing.comment = comment;
                }
            }
            None => {
                self.catalog
                    .index
                    .insert(name.to_string(), self.catalog.contexts.len());
                self.catalog.contexts.push(Context::new(name, comment));
            }
        }
        self
    }

    /// Add a message; a repeated key replaces the earlier one and is recorded.
    pub fn message(&mut self, context: &str, message: Message) -> &mut Self {
        if !self.catalog.index.contains_key(context) {
            self.context(context, None);
        }
        let position = self.catalog.index[context];
        let comment = message.comment.clone();
        if let Some(replaced) = self.catalog.contexts[position].insert(message) {
            tracing::warn!(
                context,
                source = replaced.source.as_str(),
                comment = replaced.disambiguator(),
                "duplicate message key, keeping the last one"
            );
            self.catalog.duplicates.push(DuplicateKey {
                context: context.to_string(),
                source: replaced.source,
                comment,
            });
        }
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}
