//! Romaji -> kana rule compiler.

use tracing::{debug, debug_span};

use super::table::{
    macron, DIGRAPHS, KANA_AFFRICATE, KANA_GEMINATION_EXCLUDED, KANA_MORAE, MACRONS,
    NASAL, NASAL_ALIAS_PREFIX, NASAL_APOSTROPHE, NASAL_LATIN, PALATAL_ONSETS, PUNCTUATION,
    SMALL_Y, SOKUON,
};
use super::{RuleError, Script};
use crate::trie::{NodeId, Trie};

pub(super) fn compile(script: Script) -> Result<Trie, RuleError> {
    let _span = debug_span!("compile_kana", script = ?script).entered();
    let mut rules = KanaRules {
        script,
        trie: Trie::new(),
    };
    rules.insert_morae();
    rules.insert_contractions();
    rules.insert_nasal_aliases()?;
    rules.insert_gemination()?;
    rules.insert_long_vowels()?;
    rules.insert_punctuation()?;
    debug!(nodes = rules.trie.len(), "kana rules compiled");
    Ok(rules.trie)
}

struct KanaRules {
    script: Script,
    trie: Trie,
}

impl KanaRules {
    fn letter(&self, latin: char) -> Result<NodeId, RuleError> {
        self.trie
            .get_child(self.trie.root(), latin)
            .ok_or(RuleError::MissingMora(latin))
    }

    fn insert_morae(&mut self) {
        for &(latin, kana) in KANA_MORAE {
            self.trie.insert(latin.chars(), self.script.kana_str(kana));
        }
    }

    fn insert_contractions(&mut self) {
        for &(onset, mora) in PALATAL_ONSETS {
            for &(glide, small) in SMALL_Y {
                let kana: String = [mora, small].iter().map(|&c| self.script.kana(c)).collect();
                self.trie.insert(std::iter::once(onset).chain(glide.chars()), kana);
            }
        }
        for &(prefix, mora, glides) in DIGRAPHS {
            for &(vowel, small) in glides {
                let kana: String = [mora, small].iter().map(|&c| self.script.kana(c)).collect();
                self.trie.insert(prefix.chars().chain([vowel]), kana);
            }
        }
    }

    /// `n'` closes a nasal explicitly; `xn` is a childless copy of `n`.
    fn insert_nasal_aliases(&mut self) -> Result<(), RuleError> {
        let nasal = self.letter(NASAL_LATIN)?;
        self.trie
            .insert_child(nasal, NASAL_APOSTROPHE, self.script.kana(NASAL).to_string())?;
        let prefix = self.letter(NASAL_ALIAS_PREFIX)?;
        let alias = self.trie.duplicate(nasal, false);
        self.trie.attach(prefix, alias)?;
        Ok(())
    }

    /// A doubled consonant repeats that consonant's subtree with a leading っ.
    fn insert_gemination(&mut self) -> Result<(), RuleError> {
        let root = self.trie.root();
        let sokuon = self.script.kana(SOKUON);
        let mut onsets: Vec<NodeId> = self
            .trie
            .children(root)
            .filter(|(c, _)| c.is_ascii_lowercase() && !KANA_GEMINATION_EXCLUDED.contains(c))
            .map(|(_, id)| id)
            .collect();
        onsets.sort_unstable();

        // Copied before any doubling so the affricate path holds no `cc` branch.
        let (stop, affricate) = KANA_AFFRICATE;
        let affricate_copy = {
            let node = self.letter(affricate)?;
            self.trie.duplicate(node, true)
        };

        for onset in onsets {
            let copy = self.trie.duplicate(onset, true);
            self.trie.attach(onset, copy)?;
            self.prefix_subtree(copy, sokuon);
        }
        let stop = self.letter(stop)?;
        self.trie.attach(stop, affricate_copy)?;
        self.prefix_subtree(affricate_copy, sokuon);
        Ok(())
    }

    fn prefix_subtree(&mut self, top: NodeId, sokuon: char) {
        let prefixed = format!("{sokuon}{}", self.trie.value(top));
        self.trie.set_value(top, prefixed);
        self.trie.traverse_children(top, None, |trie, id| {
            let prefixed = format!("{sokuon}{}", trie.value(id));
            trie.set_value(id, prefixed);
        });
    }

    /// Every mora ending in a plain vowel gets a macron sibling that spells
    /// the lengthened mora (`kō` -> こう / コー).
    fn insert_long_vowels(&mut self) -> Result<(), RuleError> {
        let root = self.trie.root();
        let targets: Vec<(NodeId, NodeId, char)> = self
            .trie
            .descendants(root, None)
            .into_iter()
            .filter(|&id| !self.trie.value(id).is_empty())
            .filter_map(|id| {
                let vowel = self.trie.symbol(id)?;
                let parent = self.trie.parent(id)?;
                macron(vowel).map(|long| (parent, id, long))
            })
            .collect();

        for (parent, id, long) in targets {
            let vowel = self.trie.symbol(id).unwrap_or_default();
            let token = format!("{}{}", self.trie.value(id), self.lengthener(vowel));
            self.trie.insert_child(parent, long, token)?;
        }
        Ok(())
    }

    fn lengthener(&self, vowel: char) -> char {
        match self.script.prolonged_sound_mark() {
            Some(mark) => mark,
            None => MACRONS
                .iter()
                .find(|&&(plain, _, _)| plain == vowel)
                .map_or(vowel, |&(_, _, kana)| kana),
        }
    }

    /// ASCII punctuation back to its full-width form. The space stays ASCII.
    fn insert_punctuation(&mut self) -> Result<(), RuleError> {
        let root = self.trie.root();
        for &(kana, ascii) in PUNCTUATION {
            if ascii == ' ' {
                continue;
            }
            self.trie.insert_child(root, ascii, kana.to_string())?;
        }
        Ok(())
    }
}
