use std::path::Path;

use anyhow::{Context, Result};

/// Quote a string for embedding in a SQL literal, doubling single quotes
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Write one SQL script; any write failure is fatal to the run
pub fn write_sql_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write SQL file: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("it's Nell's"), "'it''s Nell''s'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_write_sql_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sql");

        write_sql_file(&path, "SELECT 1;\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "SELECT 1;\n");
    }

    #[test]
    fn test_write_sql_file_missing_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/out.sql");

        assert!(write_sql_file(&path, "SELECT 1;\n").is_err());
    }
}
