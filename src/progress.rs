//! Progress feedback for batch scoring.
//!
//! A single `indicatif` bar on stderr tracks scored files. It is hidden in
//! quiet mode (`--quiet` or the `READABILITY_QUIET` env var) and whenever
//! stderr is not a terminal, so piped output and CI logs stay clean.

use indicatif::{ProgressBar, ProgressStyle};

pub const TEMPLATE_FILE_SCORING: &str = "{spinner} {msg} {pos}/{len} files ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("READABILITY_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    /// Determine if progress bars should be displayed
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }

    /// Create the file-scoring bar, hidden when progress should not show.
    pub fn create_bar(&self, len: u64) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        match ProgressStyle::with_template(TEMPLATE_FILE_SCORING) {
            Ok(style) => pb.set_style(style),
            Err(e) => log::debug!("Invalid progress template: {}", e),
        }
        pb.set_message("Scoring");
        pb
    }
}
