use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::UtteranceKey;

/// Filename suffix selecting the first-microphone audio take
pub(crate) const AUDIO_SUFFIX: &str = "_mic1.flac";

static AUDIO_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<speaker>[^_]+)_(?P<sequence>[^_]+)_mic1\.flac$").unwrap());
static TRANSCRIPT_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<speaker>[^_]+)_(?P<sequence>[^_.]+)\.txt$").unwrap());

/// A file that does not follow the corpus naming convention
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("filename does not match the corpus pattern: {0:?}")]
    PatternMismatch(PathBuf),
    #[error("speaker id in filename ({in_name}) disagrees with its directory ({in_dir})")]
    SpeakerMismatch { in_name: String, in_dir: String },
}

/// Input corpus layout rooted at the staging directory
///
/// All input paths are derived here so the rest of the pipeline never
/// hard-codes directory names:
///
/// ```text
/// <root>/speaker-info.txt
/// <root>/wav48_silence_trimmed/<speaker>/<speaker>_<seq>_mic1.flac
/// <root>/txt/<speaker>/<speaker>_<seq>.txt
/// ```
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    root: PathBuf,
}

impl CorpusLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding per-speaker audio subdirectories
    pub fn audio_dir(&self) -> PathBuf {
        self.root.join("wav48_silence_trimmed")
    }

    /// Directory holding per-speaker transcript subdirectories
    pub fn transcript_dir(&self) -> PathBuf {
        self.root.join("txt")
    }

    /// The whitespace-column speaker metadata table
    pub fn speaker_table(&self) -> PathBuf {
        self.root.join("speaker-info.txt")
    }

    /// Source audio file for one utterance
    pub fn audio_path(&self, key: &UtteranceKey) -> PathBuf {
        self.audio_dir()
            .join(&key.speaker_id)
            .join(format!("{}_{}{}", key.speaker_id, key.sequence, AUDIO_SUFFIX))
    }

    /// Parse an audio filename into its utterance key
    pub fn parse_audio_file(path: &Path) -> Result<UtteranceKey, LayoutError> {
        parse_keyed_name(path, &AUDIO_FILE)
    }

    /// Parse a transcript filename into its utterance key
    pub fn parse_transcript_file(path: &Path) -> Result<UtteranceKey, LayoutError> {
        parse_keyed_name(path, &TRANSCRIPT_FILE)
    }
}

/// Extract the utterance key named in a corpus filename, cross-checking the
/// speaker id against the per-speaker directory the file sits in
fn parse_keyed_name(path: &Path, pattern: &Regex) -> Result<UtteranceKey, LayoutError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LayoutError::PatternMismatch(path.to_path_buf()))?;
    let caps = pattern
        .captures(name)
        .ok_or_else(|| LayoutError::PatternMismatch(path.to_path_buf()))?;
    let key = UtteranceKey::new(&caps["speaker"], &caps["sequence"]);

    if let Some(dir) = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
    {
        if dir != key.speaker_id {
            return Err(LayoutError::SpeakerMismatch {
                in_name: key.speaker_id,
                in_dir: dir.to_string(),
            });
        }
    }

    Ok(key)
}

/// Output layout rooted at the destination directory
///
/// SQL scripts are numbered so a lexicographic load order is also the
/// correct load order; transcoded audio mirrors the per-speaker tree.
#[derive(Debug, Clone)]
pub struct DistLayout {
    root: PathBuf,
}

impl DistLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Schema script: table definitions plus the batched speaker insert
    pub fn schema_file(&self) -> PathBuf {
        self.root.join("01_schema.sql")
    }

    /// One chunk of transcript inserts; 1-based, zero-padded
    pub fn transcript_chunk_file(&self, number: usize) -> PathBuf {
        self.root.join(format!("02_transcripts_{:03}.sql", number))
    }

    /// Index definition script
    pub fn index_file(&self) -> PathBuf {
        self.root.join("03_indexes.sql")
    }

    /// Transcoded audio artifact for one utterance
    pub fn audio_path(&self, key: &UtteranceKey) -> PathBuf {
        self.root
            .join(&key.speaker_id)
            .join(format!("{}.mp3", key.sequence))
    }

    /// Machine-readable record of the export phase
    pub fn export_report_file(&self) -> PathBuf {
        self.root.join("export_report.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_audio_file() {
        let path = Path::new("tmp/wav48_silence_trimmed/p225/p225_001_mic1.flac");
        let key = CorpusLayout::parse_audio_file(path).unwrap();

        assert_eq!(key, UtteranceKey::new("p225", "001"));
    }

    #[test]
    fn test_parse_audio_file_pattern_mismatch() {
        let path = Path::new("tmp/wav48_silence_trimmed/p225/p225_001.flac");
        assert!(matches!(
            CorpusLayout::parse_audio_file(path),
            Err(LayoutError::PatternMismatch(_))
        ));
    }

    #[test]
    fn test_parse_audio_file_speaker_mismatch() {
        let path = Path::new("tmp/wav48_silence_trimmed/p226/p225_001_mic1.flac");
        assert!(matches!(
            CorpusLayout::parse_audio_file(path),
            Err(LayoutError::SpeakerMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_transcript_file() {
        let path = Path::new("tmp/txt/p225/p225_014.txt");
        let key = CorpusLayout::parse_transcript_file(path).unwrap();

        assert_eq!(key, UtteranceKey::new("p225", "014"));
    }

    #[test]
    fn test_audio_path_round_trip() {
        let layout = CorpusLayout::new("tmp");
        let key = UtteranceKey::new("p225", "001");
        let path = layout.audio_path(&key);

        assert_eq!(CorpusLayout::parse_audio_file(&path).unwrap(), key);
    }

    #[test]
    fn test_dist_file_names() {
        let layout = DistLayout::new("dist");

        assert!(layout.schema_file().ends_with("01_schema.sql"));
        assert!(
            layout
                .transcript_chunk_file(7)
                .ends_with("02_transcripts_007.sql")
        );
        assert!(layout.index_file().ends_with("03_indexes.sql"));
        assert!(
            layout
                .audio_path(&UtteranceKey::new("p225", "001"))
                .ends_with("p225/001.mp3")
        );
    }
}
