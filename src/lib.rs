//! Japanese kana <-> romaji transliteration.
//!
//! Rules are compiled once into tries ([`rules::RuleSet`]) and applied with a
//! greedy longest-match scan ([`matcher::Matcher`]). The [`converter`]
//! functions are the usual entry points:
//!
//! ```
//! use kana_engine::converter::{to_kana, to_romaji, KanaOptions, RomajiOptions};
//!
//! assert_eq!(to_romaji("おんよみ", &RomajiOptions::default()), "on'yomi");
//! assert_eq!(to_kana("kin'you", &KanaOptions::default()), "きんよう");
//! ```

pub mod converter;
pub mod matcher;
pub mod rules;
pub mod settings;
pub mod trace_init;
pub mod trie;
pub mod unicode;

pub use converter::{
    kanaize, romanize, to_kana, to_romaji, ConvertError, KanaOptions, RomajiOptions,
    RomanizationMethod,
};
pub use trie::{NodeId, Trie, TrieError};
