use std::path::Path;

use anyhow::{Context, Result};

use crate::models::SpeakerRecord;

/// Parse the speaker metadata table from a file
pub fn parse_speaker_table_file(path: &Path) -> Result<Vec<SpeakerRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read speaker table: {:?}", path))?;
    Ok(parse_speaker_table(&content))
}

/// Parse the speaker metadata table
///
/// The first line is a column header and is skipped. Data lines are
/// whitespace-split; blank lines and malformed rows (fewer than three
/// columns, or a non-numeric age) are dropped without error.
pub fn parse_speaker_table(content: &str) -> Vec<SpeakerRecord> {
    content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            SpeakerRecord::from_columns(&columns)
        })
        .collect()
}
