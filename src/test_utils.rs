//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::entry::TranslationEntry;

/// コンテキストと複数形を持たない単数形エントリを作成する
pub(crate) fn entry_with_translation(original: &str, translation: &str) -> TranslationEntry {
    let mut entry = TranslationEntry::new("", original, "");
    entry.set_translation(translation);
    entry
}

/// 全コレクションを網羅した翻訳済みエントリを作成する
pub(crate) fn translated_entry() -> TranslationEntry {
    let mut entry = TranslationEntry::new("menu", "%d file", "%d files");
    entry.set_translation("%d fichier");
    entry.set_plural_translation(0, "%d fichier");
    entry.set_plural_translation(1, "%d fichiers");
    entry.add_reference("src/app.rs", Some(42));
    entry.add_reference("src/lib.rs", None);
    entry.add_comment("translated by hand");
    entry.add_extracted_comment("label of the file counter");
    entry.add_flag("c-format");
    entry
}
