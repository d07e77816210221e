use crate::config::IgnoreConfig;
use crate::errors::{ReadabilityError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use glob::MatchOptions;
use walkdir::{DirEntry, WalkDir};

/// Recursively collects scoreable files below a directory.
pub struct FileWalker<'a> {
    root: PathBuf,
    ignore: &'a IgnoreConfig,
}

impl<'a> FileWalker<'a> {
    pub fn new(root: PathBuf, ignore: &'a IgnoreConfig) -> Self {
        Self { root, ignore }
    }

    /// Walk the tree, skipping entries that cannot be read. A failed entry
    /// is logged and the walk continues with its siblings.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| self.should_descend(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(&self.root);
                    log::warn!("Skipping unreadable path {}: {}", path.display(), e);
                    continue;
                }
            };

            if entry.file_type().is_file() && self.should_process(&entry) {
                files.push(entry.into_path());
            }
        }

        files
    }

    // The root itself is never filtered, so walking "." works.
    fn should_descend(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if self.ignore.is_hidden(&name) {
            log::debug!("Skipping hidden path: {}", entry.path().display());
            return false;
        }
        if entry.file_type().is_dir() && self.ignore.is_ignored_dir(&name) {
            log::debug!("Skipping ignored directory: {}", entry.path().display());
            return false;
        }
        true
    }

    fn should_process(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if self.ignore.is_ignored_extension(&name) {
            log::debug!("Skipping ignored extension: {}", entry.path().display());
            return false;
        }
        true
    }
}

/// Expand a glob pattern to the regular files it matches. Wildcards only
/// match a leading `.` when hidden paths are not ignored.
fn expand_glob(pattern: &str, ignore: &IgnoreConfig) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: ignore.hidden,
        ..MatchOptions::new()
    };
    let paths = glob::glob_with(pattern, options).map_err(|source| ReadabilityError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => log::debug!("Skipping non-file match: {}", path.display()),
            Err(e) => log::warn!("Cannot read {}: {}", e.path().display(), e.error()),
        }
    }
    if files.is_empty() {
        log::debug!("Pattern '{}' matched no files", pattern);
    }
    Ok(files)
}

/// Resolve command-line arguments to a sorted, de-duplicated file list.
///
/// Existing directories are walked with the ignore rules applied; any other
/// argument is treated as a glob pattern whose file matches are taken as
/// given.
pub fn resolve_patterns<S: AsRef<str>>(
    patterns: &[S],
    ignore: &IgnoreConfig,
) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let path = Path::new(pattern);
        if path.is_dir() {
            files.extend(FileWalker::new(path.to_path_buf(), ignore).walk());
        } else {
            files.extend(expand_glob(pattern, ignore)?);
        }
    }
    Ok(files.into_iter().collect())
}
