//! Readability scoring.
//!
//! A text's score is
//!
//! ```text
//! (symbol * 20 + lines_per_block * 1 + line_len * 1) * lloc * 1
//! ```
//!
//! The additive part measures density and shape; the `lloc` factor makes the
//! same density weigh more in a longer file. Higher scores read worse. The
//! weights are empirical and fixed so that scores stay comparable across runs.

pub mod raw_score;

pub use raw_score::{
    RawScore, LINES_PER_BLOCK_WEIGHT, LINE_LENGTH_WEIGHT, LLOC_WEIGHT, SYMBOL_WEIGHT,
};

/// Compute the four raw metrics of a text.
pub fn raw_score(text: &str) -> RawScore {
    RawScore::from_text(text)
}

/// Compute the final readability score of a text.
///
/// Total and pure: any input, including an empty string, yields a finite
/// value.
pub fn score(text: &str) -> f64 {
    raw_score(text).combine()
}
