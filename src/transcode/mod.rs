use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// Configuration for the external audio transcoder
#[derive(Debug, Clone)]
pub struct TranscoderConfig {
    /// Executable to invoke
    pub program: String,
    /// VBR quality passed as -q:a (0 is best, 9 is smallest)
    pub quality: u32,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            quality: 4,
        }
    }
}

/// Subprocess wrapper around the external transcoder
pub struct FfmpegTranscoder {
    config: TranscoderConfig,
}

impl FfmpegTranscoder {
    pub fn new(config: TranscoderConfig) -> Self {
        Self { config }
    }

    /// Re-encode one audio file to MP3, blocking until the subprocess exits
    ///
    /// Returns an error both when the program cannot be spawned and when it
    /// exits non-zero. Callers treat a failed item as a per-item condition,
    /// never as a reason to stop the surrounding loop.
    pub fn transcode(&self, source: &Path, dest: &Path) -> Result<()> {
        let status = Command::new(&self.config.program)
            .arg("-i")
            .arg(source)
            .args(["-loglevel", "error", "-codec:a", "mp3"])
            .args(["-q:a", &self.config.quality.to_string()])
            .arg("-y")
            .arg(dest)
            .status()
            .with_context(|| format!("Failed to run transcoder {:?}", self.config.program))?;

        if !status.success() {
            anyhow::bail!("Transcoder {} for {:?}", status, source);
        }
        Ok(())
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new(TranscoderConfig::default())
    }
}
