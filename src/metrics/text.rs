//! Surface statistics over the lines of a text.
//!
//! Every function here is pure and total. Denominators are floored at 1 so
//! that an empty or whitespace-only text still yields finite values.

use super::tokenizer::{is_blank, symbol_word_lengths};

/// Lines whose trimmed length is at most this many characters end a block.
const BLOCK_SEPARATOR_MAX_LEN: usize = 2;

/// Trim the whole text once and split it on `'\n'`.
///
/// The result always holds at least one line; an empty text yields `[""]`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.trim_matches(is_blank).split('\n').collect()
}

fn line_count(lines: &[&str]) -> f64 {
    lines.len().max(1) as f64
}

/// Mean per-line ratio of symbol characters to all token characters.
pub fn symbol_score(lines: &[&str]) -> f64 {
    let total: f64 = lines
        .iter()
        .map(|line| {
            let (syms, non_syms) = symbol_word_lengths(line);
            syms as f64 / (syms + non_syms).max(1) as f64
        })
        .sum();
    total / line_count(lines)
}

/// Mean line length in characters.
pub fn line_length(lines: &[&str]) -> f64 {
    let total: usize = lines.iter().map(|line| line.chars().count()).sum();
    total as f64 / line_count(lines)
}

/// Base-2 logarithm of `2 + line count`.
pub fn lloc(lines: &[&str]) -> f64 {
    (2.0 + lines.len() as f64).log2()
}

/// Lengths, in lines, of each maximal run of non-separator lines.
pub fn block_lengths(lines: &[&str]) -> Vec<usize> {
    let mut blocks = Vec::new();
    let mut current = 0;
    for line in lines {
        if line.trim_matches(is_blank).chars().count() <= BLOCK_SEPARATOR_MAX_LEN {
            if current > 0 {
                blocks.push(current);
            }
            current = 0;
        } else {
            current += 1;
        }
    }
    if current > 0 {
        blocks.push(current);
    }
    blocks
}

/// Average number of lines per block; 0 when there is no block at all.
pub fn lines_per_block(lines: &[&str]) -> f64 {
    let blocks = block_lengths(lines);
    let total: usize = blocks.iter().sum();
    total as f64 / blocks.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_split_lines_trims_once() {
        assert_eq!(split_lines("\n  a\nb  \n\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n  b"), vec!["a", "", "  b"]);
    }

    #[test]
    fn test_split_lines_never_empty() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines(" \n\t \n"), vec![""]);
    }

    #[test]
    fn test_information_separators_are_trimmed() {
        assert_eq!(split_lines("\u{1c}a\nb\u{1f}"), vec!["a", "b"]);
        assert_eq!(block_lengths(&["one line", "\u{1d}\u{1e}}\u{1f}", "two"]), vec![1, 1]);
    }

    #[test]
    fn test_symbol_score_extremes() {
        assert_eq!(symbol_score(&["((()))"]), 1.0);
        assert_eq!(symbol_score(&["hello world"]), 0.0);
        assert_eq!(symbol_score(&[""]), 0.0);
        assert_eq!(symbol_score(&[]), 0.0);
    }

    #[test]
    fn test_symbol_score_averages_lines() {
        let score = symbol_score(&["((()))", "hello world"]);
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_line_length_counts_chars() {
        assert_eq!(line_length(&["ab", "abcd"]), 3.0);
        assert_eq!(line_length(&["←→"]), 2.0);
        assert_eq!(line_length(&[]), 0.0);
    }

    #[test]
    fn test_lloc() {
        assert_eq!(lloc(&[]), 1.0);
        assert_eq!(lloc(&["a", "b"]), 2.0);
        assert!(lloc(&["a"; 7]) > lloc(&["a"; 6]));
    }

    #[test]
    fn test_block_lengths_split_on_short_lines() {
        let text = indoc! {"
            first line
            second line
            }

            third line
            {
            fourth line
            fifth line
            sixth line
        "};
        let lines = split_lines(text);
        assert_eq!(block_lengths(&lines), vec![2, 1, 3]);
        assert_eq!(lines_per_block(&lines), 2.0);
    }

    #[test]
    fn test_lines_per_block_without_separators_is_line_count() {
        let lines = ["alpha", "beta", "gamma", "delta"];
        assert_eq!(lines_per_block(&lines), 4.0);
    }

    #[test]
    fn test_lines_per_block_without_blocks_is_zero() {
        assert_eq!(lines_per_block(&["}", "", "fi"]), 0.0);
        assert_eq!(lines_per_block(&[]), 0.0);
    }
}
