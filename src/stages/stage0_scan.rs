use anyhow::{Context, Result};
use tracing::info;

use crate::io::layout::CorpusLayout;
use crate::io::scan::{scan_audio_keys, scan_transcript_files};
use crate::io::speaker_table::parse_speaker_table_file;
use crate::models::{SpeakerRecord, TranscriptRecord};
use crate::text::punctuate;

/// Result of the corpus scan
#[derive(Debug)]
pub struct ScanResult {
    /// Speaker metadata rows, in table order
    pub speakers: Vec<SpeakerRecord>,
    /// Normalized transcripts with matching audio, sorted by (speaker, sequence)
    pub transcripts: Vec<TranscriptRecord>,
    /// Number of distinct utterances with audio on disk
    pub audio_count: usize,
}

/// Read the corpus: audio keys, speaker table, transcript files
///
/// A transcript is kept only when an audio file exists for the same
/// (speaker, sequence) key; everything else is dropped without error.
/// Retained transcripts are punctuation-repaired and sorted by key, so the
/// emitted dataset does not depend on filesystem enumeration order.
pub fn scan_corpus(layout: &CorpusLayout) -> Result<ScanResult> {
    let audio_keys = scan_audio_keys(layout);
    info!("Found audio for {} utterances", audio_keys.len());

    let speakers = parse_speaker_table_file(&layout.speaker_table())?;
    info!("Parsed {} speaker records", speakers.len());

    let mut transcripts = Vec::new();
    let mut dropped = 0usize;
    for file in scan_transcript_files(layout) {
        if !audio_keys.contains(&file.key) {
            dropped += 1;
            continue;
        }
        let raw = std::fs::read_to_string(&file.path)
            .with_context(|| format!("Failed to read transcript: {:?}", file.path))?;
        transcripts.push(TranscriptRecord {
            key: file.key,
            text: punctuate(raw.trim()),
        });
    }
    transcripts.sort_by(|a, b| a.key.cmp(&b.key));

    if dropped > 0 {
        info!("Dropped {} transcripts without matching audio", dropped);
    }

    Ok(ScanResult {
        speakers,
        transcripts,
        audio_count: audio_keys.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UtteranceKey;

    fn write_file(path: &std::path::Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn seed_corpus(root: &std::path::Path) -> CorpusLayout {
        let layout = CorpusLayout::new(root);
        write_file(
            &layout.speaker_table(),
            "ID  AGE  GENDER  ACCENTS  REGION\n\
             p225  23  F  English  (Southern)\n\
             p226  22  M  English  Surrey\n",
        );
        layout
    }

    #[test]
    fn test_transcripts_filtered_by_audio_keys() {
        let dir = tempfile::tempdir().unwrap();
        let layout = seed_corpus(dir.path());

        write_file(
            &layout.audio_path(&UtteranceKey::new("p225", "001")),
            "flac",
        );
        write_file(
            &layout.transcript_dir().join("p225/p225_001.txt"),
            "hello ,world this is a test\n",
        );
        write_file(
            &layout.transcript_dir().join("p225/p225_002.txt"),
            "no audio for this one\n",
        );

        let result = scan_corpus(&layout).unwrap();

        assert_eq!(result.audio_count, 1);
        assert_eq!(result.transcripts.len(), 1);
        assert_eq!(result.transcripts[0].key, UtteranceKey::new("p225", "001"));
        assert_eq!(result.transcripts[0].text, "Hello, world this is a test.");
    }

    #[test]
    fn test_transcripts_sorted_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let layout = seed_corpus(dir.path());

        for (speaker, seq) in [("p226", "001"), ("p225", "002"), ("p225", "001")] {
            let key = UtteranceKey::new(speaker, seq);
            write_file(&layout.audio_path(&key), "flac");
            write_file(
                &layout
                    .transcript_dir()
                    .join(speaker)
                    .join(format!("{}_{}.txt", speaker, seq)),
                "Some text.",
            );
        }

        let result = scan_corpus(&layout).unwrap();
        let keys: Vec<String> = result
            .transcripts
            .iter()
            .map(|t| t.key.to_string())
            .collect();

        assert_eq!(keys, ["p225/001", "p225/002", "p226/001"]);
    }

    #[test]
    fn test_empty_staging_tree() {
        let dir = tempfile::tempdir().unwrap();
        let layout = seed_corpus(dir.path());

        let result = scan_corpus(&layout).unwrap();

        assert_eq!(result.audio_count, 0);
        assert!(result.transcripts.is_empty());
        assert_eq!(result.speakers.len(), 2);
    }

    #[test]
    fn test_missing_speaker_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path());

        assert!(scan_corpus(&layout).is_err());
    }
}
