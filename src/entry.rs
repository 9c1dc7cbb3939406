//! The translation entry entity.
//!
//! A [`TranslationEntry`] is one localizable message of a gettext-style
//! catalog: its source strings, its translated forms and the bookkeeping
//! that extraction tools and translators attach to it. The catalog itself
//! (lookup, uniqueness, file formats) lives outside this crate.

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::reference::Reference;

/// Separator between context and original in a catalog lookup key (EOT),
/// the byte gettext uses between `msgctxt` and `msgid`.
const CONTEXT_SEPARATOR: char = '\u{4}';

/// The flag marking a translation that needs review.
const FUZZY_FLAG: &str = "fuzzy";

/// A single localizable message with its translations and metadata.
///
/// The identity of an entry is the `(context, original, plural)` triple;
/// empty strings are valid values, so an entry constructed with
/// [`TranslationEntry::default`] is a not-yet-populated message rather
/// than an invalid one. Two entries with equal triples describe the same
/// logical message even when their translations or metadata differ —
/// combining those is what [`merge_from`](Self::merge_from) is for.
///
/// All mutators accept their input unconditionally; no operation on this
/// type fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationEntry {
    /// Disambiguating context (`msgctxt`). Empty means no context.
    pub(crate) context: String,
    /// Singular source string (`msgid`).
    pub(crate) original: String,
    /// Singular translation (`msgstr`). Empty means untranslated.
    pub(crate) translation: String,
    /// Plural source string (`msgid_plural`). Empty means no plural form.
    pub(crate) plural: String,
    /// Sparse plural translations keyed by form index (`msgstr[N]`).
    pub(crate) plural_translations: BTreeMap<usize, String>,
    /// Source locations, deduplicated by the `(file, line)` pair.
    pub(crate) references: Vec<Reference>,
    /// Translator comments (`#`), duplicates suppressed.
    pub(crate) comments: Vec<String>,
    /// Comments extracted from source code (`#.`), duplicates suppressed.
    pub(crate) extracted_comments: Vec<String>,
    /// Flags (`#,`) such as `fuzzy` or `c-format`, duplicates suppressed.
    pub(crate) flags: Vec<String>,
}

/// Appends `value` unless the sequence already contains it.
fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

impl TranslationEntry {
    /// Creates an entry from its identity triple.
    ///
    /// Translation, plural table and all bookkeeping collections start
    /// empty; a parser or editor populates them through the setters.
    #[must_use]
    pub fn new(
        context: impl Into<String>,
        original: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            original: original.into(),
            plural: plural.into(),
            ..Self::default()
        }
    }

    /// Returns true iff all three identity fields equal the given values.
    ///
    /// This is the predicate catalogs use to locate the entry for a freshly
    /// parsed occurrence. Comparison is exact and case-sensitive; an empty
    /// string only matches an empty field.
    #[must_use]
    pub fn matches(&self, context: &str, original: &str, plural: &str) -> bool {
        self.context == context && self.original == original && self.plural == plural
    }

    /// The catalog lookup key: context and original joined by EOT when a
    /// context is present, the bare original otherwise.
    #[must_use]
    pub fn catalog_key(&self) -> String {
        if self.has_context() {
            let mut key = self.context.clone();
            key.push(CONTEXT_SEPARATOR);
            key.push_str(&self.original);
            key
        } else {
            self.original.clone()
        }
    }

    /// The disambiguating context.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Overwrites the context.
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    /// Returns true iff a non-empty context is set.
    #[must_use]
    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }

    /// The singular source string.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Overwrites the singular source string.
    pub fn set_original(&mut self, original: impl Into<String>) {
        self.original = original.into();
    }

    /// Returns true iff the singular source string is non-empty.
    #[must_use]
    pub fn has_original(&self) -> bool {
        !self.original.is_empty()
    }

    /// The singular translation; empty while untranslated.
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Overwrites the singular translation.
    pub fn set_translation(&mut self, translation: impl Into<String>) {
        self.translation = translation.into();
    }

    /// Returns true iff the singular translation is non-empty.
    #[must_use]
    pub fn has_translation(&self) -> bool {
        !self.translation.is_empty()
    }

    /// The plural source string; empty when the message has no plural form.
    #[must_use]
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Overwrites the plural source string.
    pub fn set_plural(&mut self, plural: impl Into<String>) {
        self.plural = plural.into();
    }

    /// Returns true iff a non-empty plural source string is set.
    #[must_use]
    pub fn has_plural(&self) -> bool {
        !self.plural.is_empty()
    }

    /// Stores the translation for one plural form, overwriting any value
    /// already held at that index. Indices may be set in any order and may
    /// leave gaps.
    pub fn set_plural_translation(&mut self, index: usize, value: impl Into<String>) {
        self.plural_translations.insert(index, value.into());
    }

    /// Stores a plural translation at the next implicit index, which is the
    /// current size of the table.
    ///
    /// On a gap-free table this appends. On a sparse table the size can
    /// coincide with an occupied index, in which case that form is
    /// overwritten instead; callers filling specific forms should use
    /// [`set_plural_translation`](Self::set_plural_translation).
    pub fn push_plural_translation(&mut self, value: impl Into<String>) {
        let index = self.plural_translations.len();
        self.plural_translations.insert(index, value.into());
    }

    /// The translation for the plural form at `index`, or `""` when that
    /// form has no translation yet.
    #[must_use]
    pub fn plural_translation(&self, index: usize) -> &str {
        self.plural_translations.get(&index).map_or("", String::as_str)
    }

    /// The full sparse plural table, keyed by form index.
    #[must_use]
    pub const fn plural_translations(&self) -> &BTreeMap<usize, String> {
        &self.plural_translations
    }

    /// Returns true iff the plural form at index `0` has a translation.
    ///
    /// Only index `0` is examined: plural forms are expected to start
    /// there, and a table holding only higher indices still reports false.
    /// [`merge_from`](Self::merge_from) relies on this exact behavior when
    /// deciding whether to adopt another entry's plural table.
    #[must_use]
    pub fn has_plural_translation(&self) -> bool {
        self.plural_translations.contains_key(&0)
    }

    /// Records a source location, deduplicated by the `(file, line)` pair.
    ///
    /// Adding a pair that is already present leaves the collection
    /// unchanged, so its size is bounded by the number of distinct
    /// locations rather than by how often the extractor reports them.
    /// First-seen insertion order is preserved.
    pub fn add_reference(&mut self, file: impl Into<String>, line: Option<u32>) {
        let reference = Reference::new(file, line);
        if !self.references.contains(&reference) {
            self.references.push(reference);
        }
    }

    /// The recorded source locations, in first-seen order.
    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Returns true iff at least one source location is recorded.
    #[must_use]
    pub fn has_references(&self) -> bool {
        !self.references.is_empty()
    }

    /// Removes all recorded source locations.
    pub fn clear_references(&mut self) {
        self.references.clear();
    }

    /// Adds a translator comment unless an identical one is present.
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        push_unique(&mut self.comments, comment.into());
    }

    /// The translator comments, in insertion order.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Returns true iff at least one translator comment is present.
    #[must_use]
    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }

    /// Adds an extracted comment unless an identical one is present.
    pub fn add_extracted_comment(&mut self, comment: impl Into<String>) {
        push_unique(&mut self.extracted_comments, comment.into());
    }

    /// The comments extracted from source code, in insertion order.
    #[must_use]
    pub fn extracted_comments(&self) -> &[String] {
        &self.extracted_comments
    }

    /// Returns true iff at least one extracted comment is present.
    #[must_use]
    pub fn has_extracted_comments(&self) -> bool {
        !self.extracted_comments.is_empty()
    }

    /// Adds a flag unless an identical one is present.
    pub fn add_flag(&mut self, flag: impl Into<String>) {
        push_unique(&mut self.flags, flag.into());
    }

    /// The flags, in insertion order.
    #[must_use]
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Returns true iff at least one flag is present.
    #[must_use]
    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }

    /// Returns true iff the `fuzzy` flag is set.
    #[must_use]
    pub fn is_fuzzy(&self) -> bool {
        self.flags.iter().any(|flag| flag == FUZZY_FLAG)
    }

    /// Sets or removes the `fuzzy` flag, leaving other flags untouched.
    pub fn set_fuzzy(&mut self, fuzzy: bool) {
        if fuzzy {
            self.add_flag(FUZZY_FLAG);
        } else {
            self.flags.retain(|flag| flag != FUZZY_FLAG);
        }
    }

    /// Returns true iff the entry carries a usable translation: a non-empty
    /// singular translation and, when a plural form is defined, a
    /// translation for plural index `0`.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        if !self.has_translation() {
            return false;
        }
        !self.has_plural() || self.has_plural_translation()
    }
}
