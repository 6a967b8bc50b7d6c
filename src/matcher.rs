//! Greedy longest-match tokenizer over a [`Trie`].

use std::borrow::Cow;

use tracing::debug_span;

use crate::trie::Trie;

/// One step of the scan: the emitted text plus the byte range of the input
/// it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// False when the first symbol had no rule and was passed through.
    pub matched: bool,
}

impl Token<'_> {
    /// The slice of `input` this token consumed.
    pub fn source<'i>(&self, input: &'i str) -> &'i str {
        &input[self.start..self.end]
    }
}

/// Lowercase `c` when it maps to exactly one lowercase char.
pub(crate) fn fold_symbol(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Tokenizer bound to a rule trie, optionally merged with a caller overlay.
pub struct Matcher<'t> {
    trie: Cow<'t, Trie>,
    fold_case: bool,
}

impl<'t> Matcher<'t> {
    /// With an overlay the base is merged into a fresh trie first, overlay
    /// tokens winning. `base` itself is never written to.
    pub fn new(base: &'t Trie, overlay: Option<&Trie>) -> Self {
        let trie = match overlay {
            Some(overlay) => Cow::Owned(Trie::merged(base, overlay)),
            None => Cow::Borrowed(base),
        };
        Self {
            trie,
            fold_case: false,
        }
    }

    /// Match Latin keys case-insensitively (input is lowercased per symbol).
    pub fn fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    fn key(&self, c: char) -> char {
        if self.fold_case {
            fold_symbol(c)
        } else {
            c
        }
    }

    /// Longest match starting at byte offset `start`. `None` at end of input.
    ///
    /// The walk stops at the first symbol without a child and emits the value
    /// of the node it reached, even if that node is only a placeholder.
    pub fn longest_match<'a>(&'a self, input: &'a str, start: usize) -> Option<Token<'a>> {
        let rest = input.get(start..)?;
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let trie = self.trie();
        let mut end = start + first.len_utf8();

        let Some(mut node) = trie.get_child(trie.root(), self.key(first)) else {
            return Some(Token {
                text: &input[start..end],
                start,
                end,
                matched: false,
            });
        };
        for (offset, c) in chars {
            match trie.get_child(node, self.key(c)) {
                Some(next) => {
                    node = next;
                    end = start + offset + c.len_utf8();
                }
                None => break,
            }
        }
        Some(Token {
            text: trie.value(node),
            start,
            end,
            matched: true,
        })
    }

    pub fn tokens<'a>(&'a self, input: &'a str) -> Tokens<'a> {
        Tokens {
            matcher: self,
            input,
            pos: 0,
        }
    }

    /// Concatenate every token, letting `process` rewrite each one. The
    /// closure sees the whole input so it can inspect the consumed span.
    pub fn convert<F>(&self, input: &str, mut process: F) -> String
    where
        F: for<'a> FnMut(&'a str, &Token<'a>) -> Cow<'a, str>,
    {
        if input.is_empty() {
            return String::new();
        }
        let _span = debug_span!("match", len = input.len()).entered();
        let mut out = String::with_capacity(input.len() * 2);
        for token in self.tokens(input) {
            out.push_str(&process(input, &token));
        }
        out
    }
}

/// Iterator over successive longest matches. Every step consumes at least
/// one symbol.
pub struct Tokens<'a> {
    matcher: &'a Matcher<'a>,
    input: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.matcher.longest_match(self.input, self.pos)?;
        self.pos = token.end;
        Some(token)
    }
}
