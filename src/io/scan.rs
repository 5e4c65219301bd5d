use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::warn;
use walkdir::WalkDir;

use crate::models::UtteranceKey;

use super::layout::{AUDIO_SUFFIX, CorpusLayout};

/// One transcript file found on disk, keyed by its utterance
#[derive(Debug, Clone)]
pub struct TranscriptFile {
    pub key: UtteranceKey,
    pub path: PathBuf,
}

/// Collect the set of utterance keys that have audio on disk
///
/// An absent audio tree is not an error; it yields an empty set (and,
/// downstream, an empty dataset). Files that carry the audio suffix but do
/// not parse as `<speaker>_<seq>_mic1.flac` under the matching speaker
/// directory are skipped with a warning.
pub fn scan_audio_keys(layout: &CorpusLayout) -> BTreeSet<UtteranceKey> {
    let mut keys = BTreeSet::new();

    for entry in walk_speaker_files(layout.audio_dir()) {
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.ends_with(AUDIO_SUFFIX) {
            continue;
        }
        match CorpusLayout::parse_audio_file(entry.path()) {
            Ok(key) => {
                keys.insert(key);
            }
            Err(err) => warn!("Skipping unrecognized audio file: {}", err),
        }
    }

    keys
}

/// Enumerate per-speaker transcript files under the corpus transcript tree
///
/// Same tolerance as the audio scan: a missing tree yields no entries, and
/// files that do not follow the naming convention are skipped with a warning.
pub fn scan_transcript_files(layout: &CorpusLayout) -> Vec<TranscriptFile> {
    let mut files = Vec::new();

    for entry in walk_speaker_files(layout.transcript_dir()) {
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.ends_with(".txt") {
            continue;
        }
        match CorpusLayout::parse_transcript_file(entry.path()) {
            Ok(key) => files.push(TranscriptFile {
                key,
                path: entry.path().to_path_buf(),
            }),
            Err(err) => warn!("Skipping unrecognized transcript file: {}", err),
        }
    }

    files
}

/// Walk the files sitting exactly one speaker-directory deep under `root`
fn walk_speaker_files(root: PathBuf) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &std::path::Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_scan_audio_keys() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path());
        let audio = layout.audio_dir();

        touch(&audio.join("p225/p225_001_mic1.flac"));
        touch(&audio.join("p225/p225_002_mic1.flac"));
        // Second-microphone takes and stray files are not audio candidates
        touch(&audio.join("p225/p225_001_mic2.flac"));
        touch(&audio.join("p225/checksums.md5"));
        touch(&audio.join("p226/p226_001_mic1.flac"));

        let keys = scan_audio_keys(&layout);

        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&UtteranceKey::new("p225", "001")));
        assert!(keys.contains(&UtteranceKey::new("p225", "002")));
        assert!(keys.contains(&UtteranceKey::new("p226", "001")));
    }

    #[test]
    fn test_scan_audio_keys_missing_tree() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path().join("nope"));

        assert!(scan_audio_keys(&layout).is_empty());
    }

    #[test]
    fn test_scan_audio_keys_skips_misfiled_audio() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path());

        // Named for p225 but filed under p226
        touch(&layout.audio_dir().join("p226/p225_001_mic1.flac"));

        assert!(scan_audio_keys(&layout).is_empty());
    }

    #[test]
    fn test_scan_transcript_files() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path());
        let txt = layout.transcript_dir();

        touch(&txt.join("p225/p225_001.txt"));
        touch(&txt.join("p226/p226_003.txt"));
        touch(&txt.join("p226/README"));

        let files = scan_transcript_files(&layout);

        assert_eq!(files.len(), 2);
        let keys: Vec<&UtteranceKey> = files.iter().map(|f| &f.key).collect();
        assert!(keys.contains(&&UtteranceKey::new("p225", "001")));
        assert!(keys.contains(&&UtteranceKey::new("p226", "003")));
    }

    #[test]
    fn test_scan_transcript_files_missing_tree() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path().join("nope"));

        assert!(scan_transcript_files(&layout).is_empty());
    }
}
