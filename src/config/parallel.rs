//! Worker pool sizing for batch scoring.

use serde::{Deserialize, Serialize};

/// Default number of scoring workers
fn default_jobs() -> usize {
    4
}

/// Configuration for the bounded worker pool.
///
/// # Example
///
/// ```rust
/// use readability::config::ParallelConfig;
///
/// let config = ParallelConfig { jobs: 8 };
/// assert_eq!(config.effective_jobs(), 8);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of worker threads (default: 4, 0 = all available cores)
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
        }
    }
}

impl ParallelConfig {
    /// Get the effective worker count.
    pub fn effective_jobs(&self) -> usize {
        if self.jobs == 0 {
            num_cpus()
        } else {
            self.jobs
        }
    }
}

/// Returns the number of available CPU cores.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1)
}
