//! CLI command implementations.
//!
//! - **score**: resolve patterns, score each file, print per-file lines and
//!   the average

pub mod score;

pub use score::{build_config, handle_score};
