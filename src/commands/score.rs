use crate::analyzers::batch::{BatchReport, BatchRunner};
use crate::cli::Cli;
use crate::config::{self, ReadabilityConfig};
use crate::errors::ReadabilityError;
use crate::formatting::Formatter;
use crate::io::output::{
    create_writer, write_json_report, write_terminal_summary, NullSink, OutputFormat, StreamSink,
};
use crate::io::walker::resolve_patterns;
use crate::progress::ProgressConfig;
use anyhow::{Context, Result};
use std::io::Write;

/// Configuration load, CLI overrides applied.
pub fn build_config(cli: &Cli) -> Result<ReadabilityConfig> {
    let config = config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    Ok(cli.apply_overrides(config))
}

/// Resolve, score and report every file named on the command line.
pub fn handle_score(cli: &Cli, formatter: &Formatter) -> Result<BatchReport> {
    let config = build_config(cli)?;

    let files = resolve_patterns(&cli.patterns, &config.ignore)?;
    if files.is_empty() {
        return Err(ReadabilityError::NoFilesMatched.into());
    }
    log::info!("Scoring {} files", files.len());

    let progress = ProgressConfig::from_env(cli.quiet).create_bar(files.len() as u64);
    let runner = BatchRunner::new(&config.parallel)?.with_progress(progress.clone());

    let writer = create_writer(cli.output.as_deref()).context("Failed to open output")?;
    let report = match cli.format {
        OutputFormat::Terminal => {
            let sink = StreamSink::new(writer)
                .with_explain(cli.explain)
                .with_progress(progress);
            let report = runner.run(&files, &sink);
            let mut writer = sink.into_inner();
            write_terminal_summary(&mut writer, &report)?;
            writer.flush()?;
            report
        }
        OutputFormat::Json => {
            let report = runner.run(&files, &NullSink);
            let mut writer = writer;
            write_json_report(&mut writer, &report)?;
            writer.flush()?;
            report
        }
    };

    for failure in &report.failures {
        eprintln!(
            "{} {}",
            formatter.warning("skipped"),
            formatter.dim(&format!("{}: {}", failure.path.display(), failure.error))
        );
    }

    if report.scores.is_empty() {
        anyhow::bail!("none of the {} matched files could be scored", files.len());
    }
    if let Some(output) = &cli.output {
        log::info!("Wrote report to {}", output.display());
    }
    Ok(report)
}

