//! Combining two entries that describe the same logical message.
//!
//! The typical caller is a catalog combining a fresh extraction pass with
//! an existing translated catalog: the extraction side carries up-to-date
//! references and extracted comments, the translated side carries work a
//! human has already done. The merge rules are asymmetric on purpose so
//! that the human-authored side is never clobbered.

use serde::{
    Deserialize,
    Serialize,
};

use crate::entry::TranslationEntry;

/// Selects which bookkeeping collections [`TranslationEntry::merge_from`]
/// combines. Translation precedence is not optional and always applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeOptions {
    /// Combine the other entry's source references.
    pub references: bool,
    /// Combine the other entry's comments, extracted comments and flags.
    pub comments: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { references: true, comments: true }
    }
}

/// Union of `first` and `second` keeping the first occurrence of each
/// value, in order.
fn union_first_seen(first: &[String], second: &[String]) -> Vec<String> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    for value in first.iter().chain(second) {
        if !merged.contains(value) {
            merged.push(value.clone());
        }
    }
    merged
}

impl TranslationEntry {
    /// Merges `other` into `self`; `other` is left untouched.
    ///
    /// Rules, in order:
    ///
    /// 1. The singular translation is adopted from `other` only while
    ///    `self` is untranslated. A non-empty translation on `self` is
    ///    never overwritten.
    /// 2. The plural table is adopted wholesale from `other` only when
    ///    `self` lacks a translation at plural index `0` and `other` has
    ///    one. Tables are never merged index by index; when `self` already
    ///    has index `0`, `other`'s table is ignored even for indices `self`
    ///    lacks.
    /// 3. With [`MergeOptions::references`], every reference of `other` is
    ///    upserted under the usual `(file, line)` deduplication.
    /// 4. With [`MergeOptions::comments`], each of the comment, extracted
    ///    comment and flag sequences becomes the deduplicated union of
    ///    `other`'s entries followed by `self`'s, first occurrence winning.
    ///
    /// # Examples
    ///
    /// ```
    /// use po_message::{MergeOptions, TranslationEntry};
    ///
    /// let mut translated = TranslationEntry::new("", "Hello", "");
    /// translated.set_translation("Bonjour");
    ///
    /// let mut extracted = TranslationEntry::new("", "Hello", "");
    /// extracted.set_translation("Hallo");
    /// extracted.add_reference("src/app.rs", Some(3));
    ///
    /// translated.merge_from(&extracted, MergeOptions::default());
    /// assert_eq!(translated.translation(), "Bonjour");
    /// assert_eq!(translated.references().len(), 1);
    /// ```
    pub fn merge_from(&mut self, other: &Self, options: MergeOptions) {
        if !self.has_translation() && other.has_translation() {
            tracing::debug!(original = %self.original, "adopting translation from merged entry");
            self.translation.clone_from(&other.translation);
        }

        if !self.has_plural_translation() && other.has_plural_translation() {
            tracing::debug!(
                original = %self.original,
                forms = other.plural_translations.len(),
                "adopting plural table from merged entry"
            );
            self.plural_translations.clone_from(&other.plural_translations);
        }

        if options.references {
            for reference in &other.references {
                self.add_reference(reference.file.clone(), reference.line);
            }
        }

        if options.comments {
            self.comments = union_first_seen(&other.comments, &self.comments);
            self.extracted_comments =
                union_first_seen(&other.extracted_comments, &self.extracted_comments);
            self.flags = union_first_seen(&other.flags, &self.flags);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::entry_with_translation;

    /// Options with both collections disabled.
    const fn neither() -> MergeOptions {
        MergeOptions { references: false, comments: false }
    }

    #[googletest::test]
    fn test_empty_translation_adopts_other() {
        let mut entry = entry_with_translation("Hello", "");
        let other = entry_with_translation("Hello", "hola");

        entry.merge_from(&other, MergeOptions::default());

        expect_that!(entry.translation(), eq("hola"));
    }

    #[googletest::test]
    fn test_existing_translation_is_never_overwritten() {
        let mut entry = entry_with_translation("Hello", "bonjour");
        let other = entry_with_translation("Hello", "hola");

        entry.merge_from(&other, MergeOptions::default());

        expect_that!(entry.translation(), eq("bonjour"));
    }

    #[googletest::test]
    fn test_plural_table_adopted_wholesale() {
        let mut entry = TranslationEntry::new("", "%d file", "%d files");
        entry.set_plural_translation(2, "kept nowhere");

        let mut other = TranslationEntry::new("", "%d file", "%d files");
        other.set_plural_translation(0, "%d fichier");
        other.set_plural_translation(1, "%d fichiers");

        entry.merge_from(&other, neither());

        // The old sparse table is replaced, not merged into.
        expect_that!(entry.plural_translation(0), eq("%d fichier"));
        expect_that!(entry.plural_translation(1), eq("%d fichiers"));
        expect_that!(entry.plural_translation(2), eq(""));
        expect_that!(entry.plural_translations().len(), eq(2));
    }

    #[googletest::test]
    fn test_plural_table_with_index_zero_ignores_other() {
        let mut entry = TranslationEntry::new("", "%d file", "%d files");
        entry.set_plural_translation(0, "%d fichier");

        let mut other = TranslationEntry::new("", "%d file", "%d files");
        other.set_plural_translation(0, "%d archivo");
        other.set_plural_translation(1, "%d archivos");

        entry.merge_from(&other, MergeOptions::default());

        expect_that!(entry.plural_translation(0), eq("%d fichier"));
        expect_that!(entry.plural_translation(1), eq(""));
        expect_that!(entry.plural_translations().len(), eq(1));
    }

    #[googletest::test]
    fn test_sparse_other_table_is_not_adopted() {
        let mut entry = TranslationEntry::new("", "%d file", "%d files");

        let mut other = TranslationEntry::new("", "%d file", "%d files");
        other.set_plural_translation(1, "%d fichiers");

        entry.merge_from(&other, MergeOptions::default());

        // `other` lacks index 0, so it does not count as having plural
        // translations at all.
        expect_that!(entry.plural_translations().is_empty(), eq(true));
    }

    #[googletest::test]
    fn test_references_merge_deduplicates() {
        let mut entry = entry_with_translation("Hello", "");
        entry.add_reference("a.rs", Some(10));

        let mut other = entry_with_translation("Hello", "");
        other.add_reference("a.rs", Some(10));
        other.add_reference("b.rs", None);

        entry.merge_from(&other, MergeOptions::default());

        let rendered: Vec<String> =
            entry.references().iter().map(ToString::to_string).collect();
        assert_that!(rendered, elements_are![eq("a.rs:10"), eq("b.rs")]);
    }

    #[googletest::test]
    fn test_references_not_merged_when_disabled() {
        let mut entry = entry_with_translation("Hello", "");
        entry.add_reference("a.rs", Some(10));

        let mut other = entry_with_translation("Hello", "");
        other.add_reference("b.rs", Some(20));

        entry.merge_from(&other, MergeOptions { references: false, comments: true });

        let rendered: Vec<String> =
            entry.references().iter().map(ToString::to_string).collect();
        assert_that!(rendered, elements_are![eq("a.rs:10")]);
    }

    #[googletest::test]
    fn test_comment_union_is_other_first_with_dedup() {
        let mut entry = entry_with_translation("Hello", "");
        entry.add_comment("x");

        let mut other = entry_with_translation("Hello", "");
        other.add_comment("y");
        other.add_comment("x");

        entry.merge_from(&other, MergeOptions::default());

        assert_that!(entry.comments(), elements_are![eq("y"), eq("x")]);
    }

    #[googletest::test]
    fn test_all_three_sequences_use_the_same_union() {
        let mut entry = entry_with_translation("Hello", "");
        entry.add_extracted_comment("from main.rs");
        entry.add_flag("fuzzy");

        let mut other = entry_with_translation("Hello", "");
        other.add_extracted_comment("from lib.rs");
        other.add_extracted_comment("from main.rs");
        other.add_flag("c-format");

        entry.merge_from(&other, MergeOptions::default());

        expect_that!(
            entry.extracted_comments(),
            elements_are![eq("from lib.rs"), eq("from main.rs")]
        );
        expect_that!(entry.flags(), elements_are![eq("c-format"), eq("fuzzy")]);
    }

    #[googletest::test]
    fn test_comments_not_merged_when_disabled() {
        let mut entry = entry_with_translation("Hello", "");
        entry.add_comment("mine");

        let mut other = entry_with_translation("Hello", "");
        other.add_comment("theirs");

        entry.merge_from(&other, MergeOptions { references: true, comments: false });

        assert_that!(entry.comments(), elements_are![eq("mine")]);
    }

    #[googletest::test]
    fn test_other_is_unchanged_by_merge() {
        let mut entry = entry_with_translation("Hello", "");
        let mut other = entry_with_translation("Hello", "hola");
        other.add_comment("theirs");
        let snapshot = other.clone();

        entry.merge_from(&other, MergeOptions::default());

        assert_that!(&other, eq(&snapshot));
    }

    #[rstest]
    #[case::defaults(MergeOptions::default(), true, true)]
    #[case::neither(neither(), false, false)]
    #[case::references_only(MergeOptions { references: true, comments: false }, true, false)]
    #[case::comments_only(MergeOptions { references: false, comments: true }, false, true)]
    fn test_option_gating(
        #[case] options: MergeOptions,
        #[case] expect_references: bool,
        #[case] expect_comments: bool,
    ) {
        let mut entry = entry_with_translation("Hello", "");

        let mut other = entry_with_translation("Hello", "");
        other.add_reference("a.rs", Some(1));
        other.add_comment("note");

        entry.merge_from(&other, options);

        assert_that!(entry.has_references(), eq(expect_references));
        assert_that!(entry.has_comments(), eq(expect_comments));
    }
}
