// File: src/persistence.rs
use crate::history::RecentLines;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("history file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file is not valid: {0}")]
    Encode(#[from] bincode::Error),
    #[error("failed to replace history file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Writes the history next to its destination first, then renames it into
/// place so a crash never leaves a half-written file.
pub fn save_to_disk(history: &RecentLines, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, history)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!("Saved {} recent lines to {}", history.len(), path.display());
    Ok(())
}

/// Every stored line is validated again while decoding.
pub fn load_from_disk(path: &Path) -> Result<RecentLines, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let history: RecentLines = bincode::deserialize_from(reader)?;
    info!("Loaded {} recent lines from {}", history.len(), path.display());
    Ok(history)
}

pub fn load_or_new(path: &Path, window_size: usize) -> RecentLines {
    match load_from_disk(path) {
        Ok(mut history) => {
            history.resize(window_size);
            history
        }
        Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            RecentLines::new(window_size)
        }
        Err(e) => {
            warn!("Could not load history from {}: {}. Starting empty.", path.display(), e);
            RecentLines::new(window_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Literal;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.bin");

        let mut history = RecentLines::new(4);
        history.record("=дн1ь".parse::<Literal>().unwrap());
        history.record("б=гъ".parse::<Literal>().unwrap());
        save_to_disk(&history, &path).unwrap();

        let loaded = load_from_disk(&path).unwrap();
        assert_eq!(loaded, history);
    }

    #[test]
    fn test_missing_file_gives_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let history = load_or_new(&dir.path().join("absent.bin"), 5);
        assert!(history.is_empty());
        assert_eq!(history.window_size(), 5);
    }

    #[test]
    fn test_garbage_file_gives_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.bin");
        let mut file = File::create(&path).unwrap();
        file.write_all(&[0xFF; 7]).unwrap();

        assert!(load_from_disk(&path).is_err());
        assert!(load_or_new(&path, 3).is_empty());
    }

    // Same field layout as RecentLines, but free to hold anything.
    #[derive(serde::Serialize)]
    struct RawLines<'a> {
        window_size: usize,
        lines: Vec<&'a str>,
    }

    fn write_raw(path: &Path, window_size: usize, lines: Vec<&str>) {
        let file = File::create(path).unwrap();
        bincode::serialize_into(file, &RawLines { window_size, lines }).unwrap();
    }

    #[test]
    fn test_overfull_file_stays_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.bin");
        write_raw(&path, 1, vec!["а", "б", "в"]);

        let mut history = load_from_disk(&path).unwrap();
        assert_eq!(history.window_size(), 1);
        assert_eq!(history.len(), 1);
        for line in ["г", "д", "е", "ж"] {
            history.record(line.parse().unwrap());
            assert!(history.len() <= history.window_size());
        }
        assert_eq!(history.latest().map(Literal::as_str), Some("ж"));
    }

    #[test]
    fn test_invalid_stored_line_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.bin");
        write_raw(&path, 3, vec!["а", "1а"]);

        assert!(matches!(load_from_disk(&path), Err(PersistenceError::Encode(_))));
        assert!(load_or_new(&path, 3).is_empty());
    }

    #[test]
    fn test_load_applies_new_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.bin");
        let mut history = RecentLines::new(3);
        for line in ["а", "б", "в"] {
            history.record(line.parse().unwrap());
        }
        save_to_disk(&history, &path).unwrap();

        let loaded = load_or_new(&path, 2);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.latest().map(Literal::as_str), Some("в"));
    }
}
