// Sub-modules
mod core;
mod ignore;
mod loader;
mod parallel;

pub use self::core::ReadabilityConfig;
pub use ignore::{IgnoreConfig, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_EXTS};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
