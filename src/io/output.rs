use crate::analyzers::batch::{BatchReport, FileFailure, FileScore};
use clap::ValueEnum;
use indicatif::ProgressBar;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<score> <path>` line per file, then the average
    Terminal,
    /// A single JSON document
    Json,
}

/// Receives each file score as soon as it is computed.
///
/// Implementations are shared across scoring workers.
pub trait ScoreSink: Sync {
    fn record(&self, score: &FileScore) -> io::Result<()>;
}

/// Discards every score.
pub struct NullSink;

impl ScoreSink for NullSink {
    fn record(&self, _score: &FileScore) -> io::Result<()> {
        Ok(())
    }
}

/// Writes `<score> <path>` lines through a mutex so that lines from
/// concurrent workers never interleave.
pub struct StreamSink<W: Write + Send> {
    writer: Mutex<W>,
    explain: bool,
    progress: Option<ProgressBar>,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            explain: false,
            progress: None,
        }
    }

    /// Also print the raw metrics under each score line.
    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// Suspend this bar while writing so output and bar do not collide.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_score(&self, score: &FileScore) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("output writer poisoned"))?;
        writeln!(writer, "{}", format_score_line(score))?;
        if self.explain {
            writeln!(writer, "  {}", format_raw_line(score))?;
        }
        writer.flush()
    }
}

impl<W: Write + Send> ScoreSink for StreamSink<W> {
    fn record(&self, score: &FileScore) -> io::Result<()> {
        match &self.progress {
            Some(bar) => bar.suspend(|| self.write_score(score)),
            None => self.write_score(score),
        }
    }
}

pub fn format_score_line(score: &FileScore) -> String {
    format!("{:.2} {}", score.score, score.path.display())
}

pub fn format_raw_line(score: &FileScore) -> String {
    let raw = &score.raw;
    format!(
        "symbol={:.4} line_len={:.4} lloc={:.4} lines_per_block={:.4}",
        raw.symbol, raw.line_len, raw.lloc, raw.lines_per_block
    )
}

/// Trailer printed after the streamed per-file lines.
pub fn write_terminal_summary<W: Write>(writer: &mut W, report: &BatchReport) -> io::Result<()> {
    if let Some(average) = report.average() {
        writeln!(writer, "\n----\nAverage score: {:.2}", average)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileScore],
    failures: &'a [FileFailure],
    average: Option<f64>,
}

pub fn write_json_report<W: Write>(writer: &mut W, report: &BatchReport) -> anyhow::Result<()> {
    let json = JsonReport {
        files: &report.scores,
        failures: &report.failures,
        average: report.average(),
    };
    serde_json::to_writer_pretty(&mut *writer, &json)?;
    writeln!(writer)?;
    Ok(())
}

/// Stdout, or a freshly created file when a path is given.
pub fn create_writer(output: Option<&Path>) -> io::Result<Box<dyn Write + Send>> {
    match output {
        Some(path) => Ok(Box::new(io::BufWriter::new(std::fs::File::create(path)?))),
        None => Ok(Box::new(io::stdout())),
    }
}
