//! Kana <-> romaji conversion facade.
//!
//! Picks the compiled [`RuleSet`] for the request, layers an optional
//! caller overlay on top of it, and runs the longest-match scan.

mod mapping;
mod method;
#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::cell::OnceCell;

use tracing::debug_span;

pub use mapping::{mapping_from_pairs, parse_mapping_toml, MappingError};
pub use method::RomanizationMethod;

use crate::rules::{RuleSet, Script};
use crate::settings::Settings;
use crate::trie::Trie;
use crate::unicode::is_katakana_str;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("unsupported romanization method: {0}")]
    UnsupportedMethod(String),
}

/// Options for [`to_romaji`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RomajiOptions<'a> {
    pub method: RomanizationMethod,
    /// Uppercase tokens whose source span is entirely katakana.
    pub upcase_katakana: bool,
    /// Extra rules keyed by kana; they win over the built-in ones.
    pub custom_mapping: Option<&'a Trie>,
}

impl RomajiOptions<'static> {
    pub fn from_settings(settings: &'static Settings) -> Self {
        Self {
            method: settings.romaji.method(),
            upcase_katakana: settings.romaji.upcase_katakana,
            custom_mapping: settings.romaji.overlay(),
        }
    }
}

/// Options for [`to_kana`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaOptions<'a> {
    /// Extra rules keyed by Latin text; they win over the built-in ones.
    pub custom_mapping: Option<&'a Trie>,
}

impl KanaOptions<'static> {
    pub fn from_settings(settings: &'static Settings) -> Self {
        Self {
            custom_mapping: settings.kana.overlay(),
        }
    }
}

/// Romanize kana. Anything without a rule (kanji, Latin, unknown symbols)
/// passes through unchanged.
pub fn to_romaji(input: &str, options: &RomajiOptions<'_>) -> String {
    if input.is_empty() {
        return String::new();
    }
    let _span = debug_span!("to_romaji", method = options.method.name(), len = input.len())
        .entered();
    let matcher = RuleSet::romaji(options.method).matcher(options.custom_mapping);
    matcher.convert(input, |input, token| {
        if options.upcase_katakana && is_katakana_str(token.source(input)) {
            Cow::Owned(token.text.to_uppercase())
        } else {
            Cow::Borrowed(token.text)
        }
    })
}

/// Compose kana from romaji. Lowercase input gives hiragana; a span typed
/// entirely in uppercase gives katakana.
pub fn to_kana(input: &str, options: &KanaOptions<'_>) -> String {
    if input.is_empty() {
        return String::new();
    }
    let _span = debug_span!("to_kana", len = input.len()).entered();
    let hiragana = RuleSet::kana(Script::Hiragana).matcher(options.custom_mapping);
    // built on the first uppercase span only
    let katakana = OnceCell::new();

    let mut out = String::with_capacity(input.len() * 3);
    let mut pos = 0;
    while let Some(token) = hiragana.longest_match(input, pos) {
        let token = if token.matched && is_uppercase(token.source(input)) {
            katakana
                .get_or_init(|| RuleSet::kana(Script::Katakana).matcher(options.custom_mapping))
                .longest_match(input, pos)
                .unwrap_or(token)
        } else {
            token
        };
        out.push_str(token.text);
        pos = token.end;
    }
    out
}

fn is_uppercase(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_uppercase)
}

/// [`to_romaji`] with options taken from the global settings.
pub fn romanize(input: &str) -> String {
    to_romaji(input, &RomajiOptions::from_settings(crate::settings::settings()))
}

/// [`to_kana`] with options taken from the global settings.
pub fn kanaize(input: &str) -> String {
    to_kana(input, &KanaOptions::from_settings(crate::settings::settings()))
}
