pub mod io;
pub mod models;
pub mod stages;
pub mod text;
pub mod transcode;

pub use io::{CorpusLayout, DistLayout, ExportOutcome, ExportReport, parse_speaker_table_file};
pub use models::{SpeakerRecord, TranscriptRecord, UtteranceKey};
pub use stages::{
    AssembleConfig, AssembleResult, ExportConfig, ExportResult, ScanResult, assemble_dataset,
    export_audio, scan_corpus,
};
pub use text::punctuate;
pub use transcode::{FfmpegTranscoder, TranscoderConfig};
