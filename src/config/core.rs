use serde::{Deserialize, Serialize};

use super::ignore::IgnoreConfig;
use super::parallel::ParallelConfig;

/// Run configuration, built once at startup and passed by reference.
///
/// ```toml
/// [ignore]
/// dirs = ["node_modules", "target"]
/// hidden = true
///
/// [parallel]
/// jobs = 8
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadabilityConfig {
    #[serde(default)]
    pub ignore: IgnoreConfig,

    #[serde(default)]
    pub parallel: ParallelConfig,
}
