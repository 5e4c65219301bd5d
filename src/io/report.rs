use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::UtteranceKey;

/// Outcome of one transcode attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportOutcome {
    /// Destination artifact written
    Converted,
    /// Source audio file was not on disk
    MissingSource,
    /// The transcoder could not be run, or exited non-zero
    TranscoderFailed,
}

/// One export item that did not produce an artifact
#[derive(Debug, Clone, Serialize)]
pub struct ExportFailure {
    pub key: UtteranceKey,
    pub outcome: ExportOutcome,
    pub detail: String,
}

/// Aggregated record of the export phase, written alongside the SQL output
///
/// Carries the run date so the SQL scripts themselves can stay
/// byte-deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub generated_on: String,
    pub converted: usize,
    pub missing_source: usize,
    pub transcoder_failed: usize,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn new() -> Self {
        Self {
            generated_on: chrono::Local::now().format("%Y-%m-%d").to_string(),
            converted: 0,
            missing_source: 0,
            transcoder_failed: 0,
            failures: Vec::new(),
        }
    }

    /// Record the outcome for one utterance
    pub fn record(&mut self, key: &UtteranceKey, outcome: ExportOutcome, detail: String) {
        match outcome {
            ExportOutcome::Converted => {
                self.converted += 1;
                return;
            }
            ExportOutcome::MissingSource => self.missing_source += 1,
            ExportOutcome::TranscoderFailed => self.transcoder_failed += 1,
        }
        self.failures.push(ExportFailure {
            key: key.clone(),
            outcome,
            detail,
        });
    }

    /// Total number of items processed
    pub fn total(&self) -> usize {
        self.converted + self.missing_source + self.transcoder_failed
    }

    /// True when every item produced an artifact
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write export report")?;
        Ok(())
    }
}

impl Default for ExportReport {
    fn default() -> Self {
        Self::new()
    }
}
