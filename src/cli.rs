use crate::config::ReadabilityConfig;
use crate::io::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: readability <files, directories or glob patterns>...";

#[derive(Parser, Debug)]
#[command(name = "readability")]
#[command(about = "Heuristic readability scores for source-like text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Files, directories or glob patterns to score
    pub patterns: Vec<String>,

    /// Number of worker threads (0 = all cores)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .readability.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dirs: Vec<String>,

    /// Additional file extension to skip (repeatable)
    #[arg(long = "ignore-ext", value_name = "EXT")]
    pub ignore_exts: Vec<String>,

    /// Include dotfiles and dot-directories
    #[arg(long = "include-hidden")]
    pub include_hidden: bool,

    /// Print the raw metrics under each score
    #[arg(long)]
    pub explain: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    pub plain: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Layer command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, mut config: ReadabilityConfig) -> ReadabilityConfig {
        if let Some(jobs) = self.jobs {
            config.parallel.jobs = jobs;
        }
        config.ignore = config
            .ignore
            .with_extra_dirs(self.ignore_dirs.iter().cloned())
            .with_extra_extensions(self.ignore_exts.iter().cloned());
        if self.include_hidden {
            config.ignore.hidden = false;
        }
        config
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
