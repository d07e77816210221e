//! Line tokenizer separating symbol runs from word runs.
//!
//! A word character is a Unicode letter, a Unicode number (including
//! superscripts, fractions and roman numerals) or `_`. Everything else,
//! marks and connector punctuation included, is a non-word character.
//!
//! A line is partitioned into alternating word and non-word runs. Each run
//! is then split on whitespace and empty pieces are dropped, so a run made
//! only of spaces contributes nothing.
//!
//! A token is a [`TokenKind::Symbol`] when it consists only of non-word
//! characters, otherwise it is a [`TokenKind::Word`].

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_]+").expect("valid regex"));

static LEADING_NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\p{L}\p{N}_]+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Symbol, // composed wholly of non-word characters
    Word,   // everything else
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    fn classify(text: &'a str) -> Self {
        let kind = if is_symbol(text) {
            TokenKind::Symbol
        } else {
            TokenKind::Word
        };
        Self { text, kind }
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Whitespace for splitting and trimming: Unicode `White_Space` plus the
/// ASCII information separators U+001C..=U+001F.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Returns true when the token consists only of non-word characters.
pub fn is_symbol(token: &str) -> bool {
    LEADING_NON_WORD_RUN
        .find(token)
        .is_some_and(|m| m.end() == token.len())
}

/// Tokenize a single line into ordered, non-empty tokens.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    partition(line)
        .flat_map(|span| span.split(is_blank).filter(|piece| !piece.is_empty()))
        .map(Token::classify)
        .collect()
}

/// Alternating word/non-word spans of the line, the same pieces a
/// capturing regex split would yield.
fn partition(line: &str) -> impl Iterator<Item = &str> {
    let mut spans = Vec::new();
    let mut last = 0;
    for m in NON_WORD_RUN.find_iter(line) {
        spans.push(&line[last..m.start()]);
        spans.push(m.as_str());
        last = m.end();
    }
    spans.push(&line[last..]);
    spans.into_iter().filter(|span| !span.is_empty())
}

/// Sum of character lengths of symbol tokens and word tokens on a line.
pub fn symbol_word_lengths(line: &str) -> (usize, usize) {
    tokenize(line)
        .iter()
        .fold((0, 0), |(syms, words), token| match token.kind {
            TokenKind::Symbol => (syms + token.char_len(), words),
            TokenKind::Word => (syms, words + token.char_len()),
        })
}
