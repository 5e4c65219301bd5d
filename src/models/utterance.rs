use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one utterance: a speaker plus a per-speaker sequence token
///
/// The ordering (speaker first, then sequence) is the canonical sort order
/// for all emitted output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UtteranceKey {
    /// Speaker the utterance belongs to
    pub speaker_id: String,
    /// Utterance index scoped to the speaker (e.g. "001")
    pub sequence: String,
}

impl UtteranceKey {
    pub fn new(speaker_id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            speaker_id: speaker_id.into(),
            sequence: sequence.into(),
        }
    }
}

impl fmt::Display for UtteranceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.speaker_id, self.sequence)
    }
}

/// A normalized transcript, retained because matching audio exists on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub key: UtteranceKey,
    /// Transcript text after punctuation repair
    pub text: String,
}
