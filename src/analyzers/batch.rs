//! Batch file scoring over a bounded worker pool.
//!
//! Files are read and scored on a dedicated rayon pool sized from
//! [`ParallelConfig`]. Each result is handed to a [`ScoreSink`] as soon as it
//! is computed; read and decode failures are recorded per file and never
//! abort the batch.

use crate::config::ParallelConfig;
use crate::errors::{ReadabilityError, Result};
use crate::io::output::ScoreSink;
use crate::scoring::RawScore;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Score of a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileScore {
    pub path: PathBuf,
    pub score: f64,
    pub raw: RawScore,
}

impl FileScore {
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let raw = RawScore::from_text(text);
        Self {
            path: path.into(),
            score: raw.combine(),
            raw,
        }
    }
}

/// A file that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a batch run, both lists sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub scores: Vec<FileScore>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    /// Mean score over scored files, `None` when nothing was scored.
    pub fn average(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let total: f64 = self.scores.iter().map(|s| s.score).sum();
        Some(total / self.scores.len() as f64)
    }
}

/// Read a file as UTF-8 text and score it.
pub fn score_file(path: &Path) -> Result<FileScore> {
    let bytes = fs::read(path).map_err(|e| ReadabilityError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| ReadabilityError::Decode {
        path: path.to_path_buf(),
    })?;
    Ok(FileScore::from_text(path, &text))
}

pub struct BatchRunner {
    pool: rayon::ThreadPool,
    progress: ProgressBar,
}

impl BatchRunner {
    pub fn new(config: &ParallelConfig) -> Result<Self> {
        let jobs = config.effective_jobs();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|i| format!("readability-worker-{}", i))
            .build()?;
        log::debug!("Scoring with {} worker threads", jobs);
        Ok(Self {
            pool,
            progress: ProgressBar::hidden(),
        })
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn run(&self, files: &[PathBuf], sink: &dyn ScoreSink) -> BatchReport {
        self.progress.set_length(files.len() as u64);

        let results: Vec<Result<FileScore>> = self.pool.install(|| {
            files
                .par_iter()
                .progress_with(self.progress.clone())
                .map(|path| {
                    let result = score_file(path);
                    if let Ok(file_score) = &result {
                        if let Err(e) = sink.record(file_score) {
                            log::warn!("Failed to write result for {}: {}", path.display(), e);
                        }
                    }
                    result
                })
                .collect()
        });
        self.progress.finish_and_clear();

        let mut report = BatchReport::default();
        for (path, result) in files.iter().zip(results) {
            match result {
                Ok(file_score) => report.scores.push(file_score),
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    report.failures.push(FileFailure {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        report.scores.sort_by(|a, b| a.path.cmp(&b.path));
        report.failures.sort_by(|a, b| a.path.cmp(&b.path));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::NullSink;
    use tempfile::TempDir;

    #[test]
    fn test_average_of_empty_report_is_none() {
        assert_eq!(BatchReport::default().average(), None);
    }

    #[test]
    fn test_average() {
        let report = BatchReport {
            scores: vec![
                FileScore::from_text("a", "def f(x):\n  return x\n"),
                FileScore::from_text("b", ""),
            ],
            failures: vec![],
        };
        assert_eq!(report.average(), Some(15.25));
    }

    #[test]
    fn test_score_file_rejects_binary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        assert!(matches!(
            score_file(&path),
            Err(ReadabilityError::Decode { .. })
        ));
    }

    #[test]
    fn test_run_keeps_partial_results() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.py");
        let missing = temp.path().join("missing.py");
        fs::write(&good, "x = 1\ny = 2\n").unwrap();

        let runner = BatchRunner::new(&ParallelConfig { jobs: 2 }).unwrap();
        let report = runner.run(&[missing.clone(), good.clone()], &NullSink);

        assert_eq!(report.scores.len(), 1);
        assert_eq!(report.scores[0].path, good);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, missing);
    }

    #[test]
    fn test_run_sorts_by_path() {
        let temp = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = ["c.txt", "a.txt", "b.txt"]
            .iter()
            .map(|name| {
                let path = temp.path().join(name);
                fs::write(&path, "hello world").unwrap();
                path
            })
            .collect();

        let runner = BatchRunner::new(&ParallelConfig::default()).unwrap();
        let report = runner.run(&paths, &NullSink);
        let names: Vec<_> = report
            .scores
            .iter()
            .map(|s| s.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
