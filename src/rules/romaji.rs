//! Kana -> romaji rule compiler.

use std::collections::HashSet;

use tracing::{debug, debug_span};

use super::table::{
    macron, Contraction, AFFRICATE, GEMINATION_EXCLUDED, GLIDES, HEPBURN_CONTRACTIONS, KUNREI_SPELLINGS,
    MORAE, NASAL, NASAL_FOLLOWERS, NIHON_SPELLINGS, PUNCTUATION, SOKUON,
    SYSTEMATIC_CONTRACTIONS, VOWELS,
};
use super::{RuleError, Script};
use crate::converter::RomanizationMethod;
use crate::trie::{NodeId, Trie};

/// How a katakana mora followed by ー is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LongVowel {
    /// `スー` -> `suu`
    Double,
    /// `スー` -> `su-`
    Hyphen,
    /// `スー` -> `sū`
    Macron,
}

impl LongVowel {
    pub(super) fn extend(self, token: &str) -> String {
        let Some(last) = token.chars().last() else {
            return String::new();
        };
        match self {
            LongVowel::Double => format!("{token}{last}"),
            LongVowel::Hyphen => format!("{token}-"),
            LongVowel::Macron => match macron(last) {
                Some(long) => format!("{}{long}", &token[..token.len() - last.len_utf8()]),
                None => format!("{token}{last}"),
            },
        }
    }
}

/// Per-method knobs for the shared compiler.
pub(super) struct Scheme {
    spellings: &'static [(char, &'static str)],
    contractions: &'static [Contraction],
    long_vowel: LongVowel,
}

impl Scheme {
    pub(super) fn for_method(method: RomanizationMethod) -> Self {
        let (spellings, contractions, long_vowel): (&[(char, &str)], _, _) = match method {
            RomanizationMethod::Hepburn => (&[], HEPBURN_CONTRACTIONS, LongVowel::Double),
            RomanizationMethod::HepburnMacron => (&[], HEPBURN_CONTRACTIONS, LongVowel::Macron),
            RomanizationMethod::Wapuro => (&[], HEPBURN_CONTRACTIONS, LongVowel::Hyphen),
            RomanizationMethod::Kunrei => {
                (KUNREI_SPELLINGS, SYSTEMATIC_CONTRACTIONS, LongVowel::Double)
            }
            RomanizationMethod::Nihon => {
                (NIHON_SPELLINGS, SYSTEMATIC_CONTRACTIONS, LongVowel::Double)
            }
        };
        Self {
            spellings,
            contractions,
            long_vowel,
        }
    }

    fn spelling(&self, kana: char, default: &'static str) -> &'static str {
        self.spellings
            .iter()
            .find(|&&(k, _)| k == kana)
            .map_or(default, |&(_, s)| s)
    }
}

/// Double the leading consonant of a token: `ka` -> `kka`, `cha` -> `tcha`.
/// Empty tokens stay empty.
pub(super) fn geminate(token: &str) -> String {
    let (digraph, substitute) = AFFRICATE;
    match token.chars().next() {
        None => String::new(),
        Some(_) if token.starts_with(digraph) => format!("{substitute}{token}"),
        Some(first) => format!("{first}{token}"),
    }
}

/// Whether `token` starts with a consonant that [`geminate`] can double.
/// Kunrei spells を as a bare `o`, so kana alone cannot decide this.
fn has_consonant_onset(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() && !VOWELS.contains(&c))
}

pub(super) fn compile(method: RomanizationMethod) -> Result<Trie, RuleError> {
    let _span = debug_span!("compile_romaji", method = method.name()).entered();
    let scheme = Scheme::for_method(method);

    let hiragana = ScriptRules::new(&scheme, Script::Hiragana).build()?;
    let katakana = ScriptRules::new(&scheme, Script::Katakana).build()?;
    let mut trie = Trie::merged(&hiragana, &katakana);

    let root = trie.root();
    for &(kana, ascii) in PUNCTUATION {
        trie.insert_child(root, kana, ascii.to_string())?;
    }
    debug!(nodes = trie.len(), "romaji rules compiled");
    Ok(trie)
}

/// Builds the sub-trie for one script.
struct ScriptRules<'s> {
    scheme: &'s Scheme,
    script: Script,
    trie: Trie,
}

impl<'s> ScriptRules<'s> {
    fn new(scheme: &'s Scheme, script: Script) -> Self {
        Self {
            scheme,
            script,
            trie: Trie::new(),
        }
    }

    fn build(mut self) -> Result<Trie, RuleError> {
        self.insert_morae()?;
        self.insert_contractions()?;
        let nasal = self.insert_nasal_apostrophes()?;
        let marker = self.insert_gemination()?;
        if let Some(mark) = self.script.prolonged_sound_mark() {
            self.insert_long_vowels(mark, &[nasal, marker])?;
        }
        debug!(script = ?self.script, nodes = self.trie.len(), "script rules built");
        Ok(self.trie)
    }

    fn mora(&self, hiragana: char) -> Result<NodeId, RuleError> {
        let kana = self.script.kana(hiragana);
        self.trie
            .get_child(self.trie.root(), kana)
            .ok_or(RuleError::MissingMora(kana))
    }

    /// First letter of the mora's token, used as the prefix of derived tokens.
    fn onset(&self, node: NodeId) -> Result<char, RuleError> {
        self.trie
            .value(node)
            .chars()
            .next()
            .ok_or_else(|| RuleError::EmptyToken(self.trie.symbol(node).unwrap_or_default()))
    }

    fn insert_morae(&mut self) -> Result<(), RuleError> {
        let root = self.trie.root();
        for &(kana, token) in MORAE {
            let token = self.scheme.spelling(kana, token);
            self.trie
                .insert_child(root, self.script.kana(kana), token.to_string())?;
        }
        Ok(())
    }

    fn insert_contractions(&mut self) -> Result<(), RuleError> {
        for contraction in self.scheme.contractions {
            for &kana in contraction.kana {
                let node = self.mora(kana)?;
                let onset = self.onset(node)?;
                for (glide, suffix) in GLIDES.iter().zip(contraction.suffixes) {
                    self.trie.insert_child(
                        node,
                        self.script.kana(*glide),
                        format!("{onset}{suffix}"),
                    )?;
                }
            }
        }
        Ok(())
    }

    fn insert_nasal_apostrophes(&mut self) -> Result<NodeId, RuleError> {
        let nasal = self.mora(NASAL)?;
        let onset = self.onset(nasal)?;
        for &follower in NASAL_FOLLOWERS {
            let token = self.trie.value(self.mora(follower)?).clone();
            self.trie.insert_child(
                nasal,
                self.script.kana(follower),
                format!("{onset}'{token}"),
            )?;
        }
        Ok(nasal)
    }

    /// Copy every geminable root entry under the sokuon and double the
    /// leading consonant of each copied token.
    fn insert_gemination(&mut self) -> Result<NodeId, RuleError> {
        let root = self.trie.root();
        let excluded: HashSet<char> = GEMINATION_EXCLUDED
            .iter()
            .map(|&c| self.script.kana(c))
            .collect();
        let siblings: Vec<NodeId> = self
            .trie
            .children(root)
            .filter(|(symbol, _)| !excluded.contains(symbol))
            .filter(|&(_, id)| has_consonant_onset(self.trie.value(id)))
            .map(|(_, id)| id)
            .collect();

        let marker = self
            .trie
            .insert_child(root, self.script.kana(SOKUON), String::new())?;
        for id in siblings {
            let copy = self.trie.duplicate(id, true);
            self.trie.attach(marker, copy)?;
        }
        self.trie.traverse_children(marker, None, |trie, id| {
            let doubled = geminate(trie.value(id));
            trie.set_value(id, doubled);
        });
        Ok(marker)
    }

    fn insert_long_vowels(&mut self, mark: char, skip: &[NodeId]) -> Result<(), RuleError> {
        let root = self.trie.root();
        let mut blocked: HashSet<NodeId> = skip.iter().copied().collect();
        for &node in skip {
            blocked.extend(self.trie.descendants(node, None));
        }
        let targets: Vec<NodeId> = self
            .trie
            .descendants(root, None)
            .into_iter()
            .filter(|id| !blocked.contains(id) && !self.trie.value(*id).is_empty())
            .collect();
        for id in targets {
            let token = self.scheme.long_vowel.extend(self.trie.value(id));
            self.trie.insert_child(id, mark, token)?;
        }
        Ok(())
    }
}
