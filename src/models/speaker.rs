use serde::{Deserialize, Serialize};

/// A corpus contributor, parsed from one line of the speaker metadata table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerRecord {
    /// Stable speaker identifier (e.g. "p225") - primary key in the dataset
    pub id: String,
    /// Age at recording time
    pub age: u32,
    /// Gender marker as recorded in the metadata table
    pub gender: String,
    /// Accent label
    pub accent: String,
    /// Region label, when the table carries one
    pub region: Option<String>,
}

impl SpeakerRecord {
    /// Build a record from the whitespace-split columns of one table line
    ///
    /// Columns are id, age and gender, followed optionally by accent and
    /// region. Rows with fewer than three columns or a non-numeric age yield
    /// `None`. A parenthesized fifth column is a qualifier comment rather
    /// than a region value and is dropped.
    pub fn from_columns(columns: &[&str]) -> Option<Self> {
        if columns.len() < 3 {
            return None;
        }
        let age = columns[1].parse().ok()?;
        let region = columns
            .get(4)
            .filter(|c| !c.contains('('))
            .map(|c| c.to_string());

        Some(Self {
            id: columns[0].to_string(),
            age,
            gender: columns[2].to_string(),
            accent: columns.get(3).unwrap_or(&"").to_string(),
            region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_row() {
        let columns = ["225", "23", "F", "English", "America"];
        let speaker = SpeakerRecord::from_columns(&columns).unwrap();

        assert_eq!(speaker.id, "225");
        assert_eq!(speaker.age, 23);
        assert_eq!(speaker.gender, "F");
        assert_eq!(speaker.accent, "English");
        assert_eq!(speaker.region.as_deref(), Some("America"));
    }

    #[test]
    fn test_parenthesized_region_dropped() {
        let columns = ["226", "23", "F", "English", "(Boston)"];
        let speaker = SpeakerRecord::from_columns(&columns).unwrap();

        assert_eq!(speaker.region, None);
    }

    #[test]
    fn test_minimal_row() {
        let columns = ["227", "31", "M"];
        let speaker = SpeakerRecord::from_columns(&columns).unwrap();

        assert_eq!(speaker.accent, "");
        assert_eq!(speaker.region, None);
    }

    #[test]
    fn test_short_row_skipped() {
        assert!(SpeakerRecord::from_columns(&["228", "23"]).is_none());
        assert!(SpeakerRecord::from_columns(&[]).is_none());
    }

    #[test]
    fn test_non_numeric_age_skipped() {
        assert!(SpeakerRecord::from_columns(&["229", "unknown", "F"]).is_none());
    }
}
