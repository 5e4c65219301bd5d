use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::io::layout::DistLayout;
use crate::io::sql::{quote, write_sql_file};
use crate::models::{SpeakerRecord, TranscriptRecord};

/// Configuration for dataset assembly
#[derive(Debug, Clone)]
pub struct AssembleConfig {
    /// Maximum transcript rows per insert statement / chunk file
    pub chunk_size: usize,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self { chunk_size: 1500 }
    }
}

/// Result of dataset assembly
#[derive(Debug)]
pub struct AssembleResult {
    pub schema_file: PathBuf,
    pub chunk_files: Vec<PathBuf>,
    pub index_file: PathBuf,
    pub speaker_rows: usize,
    pub transcript_rows: usize,
}

/// Emit the SQL dataset: schema plus speaker rows, chunked transcript
/// inserts, and index definitions
///
/// Output content is a pure function of the input record order, so sorted
/// input produces byte-identical files across runs.
pub fn assemble_dataset(
    speakers: &[SpeakerRecord],
    transcripts: &[TranscriptRecord],
    layout: &DistLayout,
    config: &AssembleConfig,
) -> Result<AssembleResult> {
    let schema_file = layout.schema_file();
    write_sql_file(&schema_file, &render_schema(speakers))?;

    let chunk_size = config.chunk_size.max(1);
    let chunks: Vec<&[TranscriptRecord]> = transcripts.chunks(chunk_size).collect();
    let mut chunk_files = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let path = layout.transcript_chunk_file(i + 1);
        write_sql_file(&path, &render_transcript_chunk(chunk, i + 1, chunks.len()))?;
        chunk_files.push(path);
    }

    let index_file = layout.index_file();
    write_sql_file(&index_file, render_indexes())?;

    info!(
        "Wrote schema ({} speaker rows), {} transcript chunks ({} rows), indexes",
        speakers.len(),
        chunk_files.len(),
        transcripts.len()
    );

    Ok(AssembleResult {
        schema_file,
        chunk_files,
        index_file,
        speaker_rows: speakers.len(),
        transcript_rows: transcripts.len(),
    })
}

/// Render the schema script: both table definitions plus one batched insert
/// covering every speaker row
///
/// Speaker fields are embedded without escaping; the corpus metadata table
/// is assumed free of quote characters.
fn render_schema(speakers: &[SpeakerRecord]) -> String {
    let mut out = String::new();
    out.push_str("-- Speech corpus database schema\n\n");
    out.push_str("PRAGMA foreign_keys = ON;\n\n");

    out.push_str("CREATE TABLE speakers (\n");
    out.push_str("  id TEXT PRIMARY KEY NOT NULL,\n");
    out.push_str("  age INTEGER NOT NULL,\n");
    out.push_str("  gender TEXT NOT NULL,\n");
    out.push_str("  accent TEXT NOT NULL,\n");
    out.push_str("  region TEXT\n");
    out.push_str(");\n\n");

    out.push_str("CREATE TABLE transcripts (\n");
    out.push_str("  speaker_id TEXT NOT NULL,\n");
    out.push_str("  sequence TEXT NOT NULL,\n");
    out.push_str("  transcript TEXT NOT NULL,\n");
    out.push_str("  UNIQUE (speaker_id, sequence),\n");
    out.push_str("  FOREIGN KEY (speaker_id) REFERENCES speakers(id)\n");
    out.push_str(");\n");

    if !speakers.is_empty() {
        out.push_str("\nINSERT INTO speakers (id, age, gender, accent, region)\nVALUES\n  ");
        let rows: Vec<String> = speakers.iter().map(speaker_row).collect();
        out.push_str(&rows.join(",\n  "));
        out.push_str(";\n");
    }

    out
}

fn speaker_row(speaker: &SpeakerRecord) -> String {
    let region = match &speaker.region {
        Some(region) => format!("'{}'", region),
        None => "NULL".to_string(),
    };
    format!(
        "('{}', {}, '{}', '{}', {})",
        speaker.id, speaker.age, speaker.gender, speaker.accent, region
    )
}

/// Render one self-contained chunk of transcript inserts
fn render_transcript_chunk(chunk: &[TranscriptRecord], number: usize, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-- Transcript chunk {} of {}\n", number, total);

    out.push_str("INSERT INTO transcripts (speaker_id, sequence, transcript)\nVALUES\n  ");
    let rows: Vec<String> = chunk
        .iter()
        .map(|t| {
            format!(
                "('{}', '{}', {})",
                t.key.speaker_id,
                t.key.sequence,
                quote(&t.text)
            )
        })
        .collect();
    out.push_str(&rows.join(",\n  "));
    out.push_str(";\n");
    out
}

fn render_indexes() -> &'static str {
    "-- Indexes for the speech corpus database\n\n\
     -- Speaker information lookups\n\
     CREATE INDEX idx_speakers_id ON speakers(id);\n\n\
     -- Composite speaker+sequence lookups\n\
     CREATE INDEX idx_transcripts_speaker_id_sequence ON transcripts(speaker_id, sequence);\n"
}
