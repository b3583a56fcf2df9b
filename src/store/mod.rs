//! Ledger persistence module
//!
//! Loads and saves the full reading sequence as one pretty-printed JSON
//! array. Every mutation rewrites the whole file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, Result};
use crate::models::Reading;

/// Load every reading from the ledger file.
///
/// A missing file is an empty ledger. A file that is not a JSON array of
/// readings, or that holds a reading with a blank card, is a parse error.
pub fn load(path: &Path) -> Result<Vec<Reading>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "ledger file not found, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let readings: Vec<Reading> = serde_json::from_slice(&bytes).map_err(|e| {
        LedgerError::Parse(format!("Failed to load ledger {}: {}", path.display(), e))
    })?;

    for reading in &readings {
        reading.validate().map_err(|e| {
            LedgerError::Parse(format!("Failed to load ledger {}: {}", path.display(), e))
        })?;
    }

    debug!(path = %path.display(), count = readings.len(), "ledger loaded");
    Ok(readings)
}

/// Write the given readings to the ledger file, replacing its contents.
///
/// The data goes to a sibling temp file first and is then renamed over the
/// destination, so a failed write leaves the previous ledger in place.
pub fn save(path: &Path, readings: &[Reading]) -> Result<()> {
    let mut json = serde_json::to_string_pretty(readings)?;
    json.push('\n');

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(path);
    if let Err(e) = fs::write(&temp_path, json) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    replace_with_temp(&temp_path, path)?;

    debug!(path = %path.display(), count = readings.len(), "ledger saved");
    Ok(())
}

/// Validate a reading and append it to the ledger file.
///
/// Validation runs before the file is touched, so a rejected reading never
/// modifies the ledger.
pub fn append(path: &Path, reading: Reading) -> Result<Vec<Reading>> {
    reading.validate()?;

    let mut readings = load(path)?;
    readings.push(reading);
    save(path, &readings)?;

    Ok(readings)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "ledger.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Move the temp file over the destination, removing it if that fails.
///
/// `fs::rename` replaces an existing destination, so the old ledger is only
/// gone once the new one is in place.
fn replace_with_temp(temp_path: &Path, destination: &Path) -> io::Result<()> {
    fs::rename(temp_path, destination).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        io::Error::new(
            e.kind(),
            format!("Replacing {} failed: {}", destination.display(), e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn reading(date: &str, cards: &[&str]) -> Reading {
        Reading::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            cards.iter().map(|c| c.to_string()).collect(),
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let readings = load(&temp.path().join("ledger.json")).unwrap();
        assert!(readings.is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");

        let mut first = reading("2024-05-10", &["The Fool", "The Sun", "Nine of Cups"]);
        first.question = "What should I focus on this week?".to_string();
        first.spread = "Three Card".to_string();
        first.notes = "Good energy ✨".to_string();
        let readings = vec![first, reading("2024-06-01", &[])];

        save(&path, &readings).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, readings);
    }

    #[test]
    fn test_save_writes_pretty_json_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");

        save(&path, &[reading("2024-05-10", &["The Fool"])]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n"));
        assert!(content.contains("\"date\": \"2024-05-10\""));
        assert!(content.ends_with("]\n"));
        assert!(!temp.path().join("ledger.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/ledger.json");

        save(&path, &[]).unwrap();

        assert!(path.exists());
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");

        append(&path, reading("2024-06-01", &["The Star"])).unwrap();
        let readings = append(&path, reading("2024-05-10", &["The Fool"])).unwrap();

        assert_eq!(readings.len(), 2);
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, readings);
        assert_eq!(loaded[0].cards, vec!["The Star"]);
        assert_eq!(loaded[1].cards, vec!["The Fool"]);
    }

    #[test]
    fn test_append_invalid_reading_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");
        save(&path, &[reading("2024-05-10", &["The Fool"])]).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let result = append(&path, reading("2024-06-01", &["The Star", ""]));

        assert!(matches!(result, Err(LedgerError::Validation(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_load_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Parse(_)));
        assert!(err.to_string().contains("Failed to load ledger"));
    }

    #[test]
    fn test_load_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");

        fs::write(&path, r#"{"date":"2024-05-10"}"#).unwrap();
        assert!(matches!(load(&path), Err(LedgerError::Parse(_))));

        fs::write(&path, r#"[{"question":"no date"}]"#).unwrap();
        assert!(matches!(load(&path), Err(LedgerError::Parse(_))));

        fs::write(&path, r#"[{"date":"2024-05-10","cards":"The Fool"}]"#).unwrap();
        assert!(matches!(load(&path), Err(LedgerError::Parse(_))));
    }

    #[test]
    fn test_load_invalid_utf8_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");
        fs::write(&path, [0x5b, 0xff, 0xfe, 0x5d]).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Parse(_)));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_failed_replace_keeps_destination_and_cleans_temp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "previous").unwrap();

        let result = save(&path, &[reading("2024-05-10", &["The Fool"])]);

        assert!(matches!(result, Err(LedgerError::Io(_))));
        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "previous");
        assert!(!temp.path().join("ledger.json.tmp").exists());
    }

    #[test]
    fn test_load_rejects_blank_card() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.json");
        fs::write(&path, r#"[{"date":"2024-05-10","cards":["The Fool",""]}]"#).unwrap();

        assert!(matches!(load(&path), Err(LedgerError::Parse(_))));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(load(temp.path()), Err(LedgerError::Io(_))));
    }
}
