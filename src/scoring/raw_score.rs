use crate::metrics::{line_length, lines_per_block, lloc, split_lines, symbol_score};
use serde::{Deserialize, Serialize};

/// Weight of the mean symbol ratio.
pub const SYMBOL_WEIGHT: f64 = 20.0;
/// Weight of the mean block length.
pub const LINES_PER_BLOCK_WEIGHT: f64 = 1.0;
/// Weight of the mean line length.
pub const LINE_LENGTH_WEIGHT: f64 = 1.0;
/// Weight of the log-scaled line count multiplier.
pub const LLOC_WEIGHT: f64 = 1.0;

/// The four per-text metrics a final score is combined from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawScore {
    pub symbol: f64,          // Mean symbol ratio per line (0-1)
    pub line_len: f64,        // Mean characters per line
    pub lloc: f64,            // log2(2 + lines)
    pub lines_per_block: f64, // Mean block length in lines
}

impl RawScore {
    pub fn from_text(text: &str) -> Self {
        let lines = split_lines(text);
        Self {
            symbol: symbol_score(&lines),
            line_len: line_length(&lines),
            lloc: lloc(&lines),
            lines_per_block: lines_per_block(&lines),
        }
    }

    /// Weighted sum of the shape metrics, scaled by the size factor.
    pub fn combine(&self) -> f64 {
        (self.symbol * SYMBOL_WEIGHT
            + self.lines_per_block * LINES_PER_BLOCK_WEIGHT
            + self.line_len * LINE_LENGTH_WEIGHT)
            * self.lloc
            * LLOC_WEIGHT
    }
}
