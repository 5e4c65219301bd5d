use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::io::layout::{CorpusLayout, DistLayout};
use crate::io::report::{ExportOutcome, ExportReport};
use crate::models::TranscriptRecord;
use crate::transcode::FfmpegTranscoder;

/// Configuration for the audio export phase
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Show a progress bar while transcoding
    pub progress: bool,
    /// Write the machine-readable report next to the SQL output
    pub write_report: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            progress: true,
            write_report: true,
        }
    }
}

/// Result of the audio export phase
#[derive(Debug)]
pub struct ExportResult {
    pub report: ExportReport,
    pub report_file: Option<PathBuf>,
}

/// Transcode every retained utterance to an MP3 under the dist tree
///
/// Items are independent: a missing source file or a failed transcode is
/// recorded and warned, and the loop moves on. Only filesystem errors on
/// the output side (directory creation, report write) abort the run.
pub fn export_audio(
    transcripts: &[TranscriptRecord],
    corpus: &CorpusLayout,
    dist: &DistLayout,
    transcoder: &FfmpegTranscoder,
    config: &ExportConfig,
) -> Result<ExportResult> {
    let mut report = ExportReport::new();

    let bar = if config.progress {
        let bar = ProgressBar::new(transcripts.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    for record in transcripts {
        let source = corpus.audio_path(&record.key);
        let dest = dist.audio_path(&record.key);

        if !source.exists() {
            warn!("Missing source audio for {}", record.key);
            report.record(
                &record.key,
                ExportOutcome::MissingSource,
                format!("{:?} not found", source),
            );
        } else {
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
            }
            match transcoder.transcode(&source, &dest) {
                Ok(()) => report.record(&record.key, ExportOutcome::Converted, String::new()),
                Err(err) => {
                    warn!("Transcoding failed for {}: {}", record.key, err);
                    report.record(
                        &record.key,
                        ExportOutcome::TranscoderFailed,
                        err.to_string(),
                    );
                }
            }
        }

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    info!(
        "Export complete: {} converted, {} missing source, {} failed",
        report.converted, report.missing_source, report.transcoder_failed
    );

    let report_file = if config.write_report {
        let path = dist.export_report_file();
        report.write_json(&path)?;
        Some(path)
    } else {
        None
    };

    Ok(ExportResult {
        report,
        report_file,
    })
}
