// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod metrics;
pub mod progress;
pub mod scoring;

// Re-export commonly used types
pub use crate::analyzers::{score_file, BatchReport, BatchRunner, FileFailure, FileScore};
pub use crate::config::{IgnoreConfig, ParallelConfig, ReadabilityConfig};
pub use crate::errors::{ReadabilityError, Result};
pub use crate::io::{resolve_patterns, OutputFormat, ScoreSink};
pub use crate::scoring::{raw_score, score, RawScore};
