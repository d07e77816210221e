//! Paths and file types excluded when walking directories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Directory names pruned from every walk.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &["bower_components", "node_modules"];

/// Extensions of binary, generated and tool-state files. Matched
/// case-sensitively against the text after a file name's last `.`.
pub const DEFAULT_IGNORE_EXTS: &[&str] = &[
    "7z", "DS_Store", "a", "acn", "acr", "alg", "aux", "avi", "bak", "BAK", "bbl", "bcf", "blg",
    "brf", "bz2", "class", "classpath", "com", "crt", "dat", "db", "dll", "dmg", "dvi", "egg",
    "end", "eot", "eps", "exe", "fdb_latexmk", "fls", "flv", "gem", "gif", "glg", "glo", "gls",
    "gz", "ico", "idea", "ids", "idx", "ilg", "iml", "ind", "ipr", "iso", "ist", "iws", "jar",
    "jpg", "key", "loa", "lof", "log", "lol", "lot", "maf", "metadata", "mo", "mov", "mp3", "mp4",
    "mpg", "mtc", "mtc0", "mw", "nav", "nlo", "o", "ogg", "ogv", "otf", "out", "pdf", "pdfsync",
    "pem", "plist", "png", "pot", "project", "ps", "pyc", "pyd", "pyg", "pyo", "rar", "rbc",
    "repl_history", "scmd", "settings", "sm", "snm", "so", "sout", "spec", "sql", "sqlite", "svg",
    "swap", "swp", "sympy", "tar", "tdo", "thm", "toc", "ttf", "ttyrec", "vrb", "wav", "webm",
    "wma", "wmv", "woff", "xdy", "zip",
];

fn default_dirs() -> BTreeSet<String> {
    DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> BTreeSet<String> {
    DEFAULT_IGNORE_EXTS.iter().map(|s| s.to_string()).collect()
}

fn default_hidden() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IgnoreConfig {
    /// Directory names skipped during walks
    #[serde(default = "default_dirs")]
    pub dirs: BTreeSet<String>,

    /// File extensions skipped during walks (case-sensitive)
    #[serde(default = "default_extensions")]
    pub extensions: BTreeSet<String>,

    /// Skip dotfiles and dot-directories (default: true)
    #[serde(default = "default_hidden")]
    pub hidden: bool,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            dirs: default_dirs(),
            extensions: default_extensions(),
            hidden: default_hidden(),
        }
    }
}

impl IgnoreConfig {
    pub fn with_extra_dirs(mut self, dirs: impl IntoIterator<Item = String>) -> Self {
        self.dirs.extend(dirs);
        self
    }

    pub fn with_extra_extensions(mut self, extensions: impl IntoIterator<Item = String>) -> Self {
        self.extensions
            .extend(extensions.into_iter().map(|e| e.trim_start_matches('.').to_string()));
        self
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// True when the text after the last `.` of `file_name` is a listed
    /// extension. Names without a dot never match.
    pub fn is_ignored_extension(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| self.extensions.contains(ext))
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden && name.starts_with('.')
    }
}
