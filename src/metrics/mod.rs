//! Metrics calculation module
//!
//! Lexical statistics over raw text: a tokenizer that separates symbol runs
//! from word runs, and the per-text line metrics built on top of it.

pub mod text;
pub mod tokenizer;

pub use text::{
    block_lengths, line_length, lines_per_block, lloc, split_lines, symbol_score,
};
pub use tokenizer::{is_blank, is_symbol, tokenize, Token, TokenKind};
