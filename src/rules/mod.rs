//! Compiled transliteration rule sets.
//!
//! Each rule set is a [`Trie`] built once from the static tables in
//! `table.rs`:
//!
//! 1. base syllabary
//! 2. contracted sounds (きゃ, しゅ, ...)
//! 3. moraic nasal disambiguation (ん + vowel/glide)
//! 4. gemination (っ + mora)
//! 5. long vowel mark (katakana ー)
//! 6. punctuation
//!
//! Kana -> romaji sets build a hiragana and a katakana sub-trie through
//! steps 1-5, merge them, then add punctuation. Published sets only hand out
//! `&Trie`, so they stay immutable once built.

mod kana;
mod romaji;
mod table;
#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use crate::converter::RomanizationMethod;
use crate::matcher::{fold_symbol, Matcher};
use crate::trie::{Trie, TrieError};
use crate::unicode::hiragana_to_katakana_char;

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error(transparent)]
    Trie(#[from] TrieError),
    #[error("no base mora for {0:?}")]
    MissingMora(char),
    #[error("mora {0:?} has an empty token")]
    EmptyToken(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    /// Map a hiragana char from the tables into this script.
    pub fn kana(self, hiragana: char) -> char {
        match self {
            Script::Hiragana => hiragana,
            Script::Katakana => hiragana_to_katakana_char(hiragana),
        }
    }

    pub fn kana_str(self, hiragana: &str) -> String {
        hiragana.chars().map(|c| self.kana(c)).collect()
    }

    /// Katakana spells long vowels with ー; hiragana has no such mark.
    pub fn prolonged_sound_mark(self) -> Option<char> {
        match self {
            Script::Hiragana => None,
            Script::Katakana => Some(table::PROLONGED),
        }
    }
}

/// An immutable compiled rule trie.
#[derive(Debug)]
pub struct RuleSet {
    trie: Trie,
    fold_case: bool,
}

impl RuleSet {
    /// Compile the kana -> romaji rules for `method`.
    pub fn compile_romaji(method: RomanizationMethod) -> Result<Self, RuleError> {
        Ok(Self {
            trie: romaji::compile(method)?,
            fold_case: false,
        })
    }

    /// Compile the romaji -> kana rules producing `script`.
    pub fn compile_kana(script: Script) -> Result<Self, RuleError> {
        Ok(Self {
            trie: kana::compile(script)?,
            fold_case: true,
        })
    }

    /// Process-wide kana -> romaji rules, compiled on first use.
    pub fn romaji(method: RomanizationMethod) -> &'static RuleSet {
        static SETS: [OnceLock<RuleSet>; RomanizationMethod::COUNT] = [
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
        ];
        SETS[method.index()].get_or_init(|| {
            Self::compile_romaji(method).expect("built-in romaji tables must compile")
        })
    }

    /// Process-wide romaji -> kana rules, compiled on first use.
    pub fn kana(script: Script) -> &'static RuleSet {
        static HIRAGANA: OnceLock<RuleSet> = OnceLock::new();
        static KATAKANA: OnceLock<RuleSet> = OnceLock::new();
        let cell = match script {
            Script::Hiragana => &HIRAGANA,
            Script::Katakana => &KATAKANA,
        };
        cell.get_or_init(|| Self::compile_kana(script).expect("built-in kana tables must compile"))
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Whether keys match case-insensitively (Latin-keyed sets).
    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    /// A matcher over these rules, merged with `overlay` when given. For
    /// case-folding rules the overlay keys are lowercased first so they are
    /// reachable from any input case.
    pub fn matcher<'a>(&'a self, overlay: Option<&Trie>) -> Matcher<'a> {
        let folded;
        let overlay = match overlay {
            Some(overlay) if self.fold_case => {
                folded = overlay.map_symbols(fold_symbol);
                Some(&folded)
            }
            other => other,
        };
        Matcher::new(&self.trie, overlay).fold_case(self.fold_case)
    }
}
