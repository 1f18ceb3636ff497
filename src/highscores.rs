//! High score persistence
//!
//! A single best score, stored as a decimal integer in a text file. Reads and
//! writes happen only when a run ends; failures are reported as
//! [`HighScoreError`] and resolved by [`record_high_score`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HighScoreError;

/// Default high score file, relative to the working directory
pub const DEFAULT_HIGH_SCORE_PATH: &str = "high_score.txt";

/// Somewhere a best score can be loaded from and saved to
pub trait HighScoreStore {
    fn load(&self) -> Result<u64, HighScoreError>;
    fn save(&mut self, score: u64) -> Result<(), HighScoreError>;
}

/// High score kept in a text file
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for HighScoreFile {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_PATH)
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> Result<u64, HighScoreError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(text.trim().parse()?)
    }

    fn save(&mut self, score: u64) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// In-process store for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    /// Stored score, `None` until something is saved
    pub stored: Option<u64>,
    /// Number of successful saves
    pub writes: u32,
}

impl MemoryHighScores {
    pub fn with_score(score: u64) -> Self {
        Self {
            stored: Some(score),
            writes: 0,
        }
    }
}

impl HighScoreStore for MemoryHighScores {
    fn load(&self) -> Result<u64, HighScoreError> {
        Ok(self.stored.unwrap_or(0))
    }

    fn save(&mut self, score: u64) -> Result<(), HighScoreError> {
        self.stored = Some(score);
        self.writes += 1;
        Ok(())
    }
}

/// Compare a finished run against the stored best and persist it if beaten.
///
/// A missing or unreadable store counts as a best of 0; a failed save is
/// logged and skipped. Returns the best score after this run.
pub fn record_high_score<S: HighScoreStore + ?Sized>(store: &mut S, score: u64) -> u64 {
    let stored = match store.load() {
        Ok(stored) => stored,
        Err(err) if err.is_not_found() => {
            log::debug!("No high score saved yet");
            0
        }
        Err(err) => {
            log::warn!("Ignoring unreadable high score: {}", err);
            0
        }
    };

    if score <= stored {
        return stored;
    }

    match store.save(score) {
        Ok(()) => log::info!("New high score: {} (was {})", score, stored),
        Err(err) => log::warn!("High score {} not saved: {}", score, err),
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose file can't be read or written
    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load(&self) -> Result<u64, HighScoreError> {
            Err(std::io::Error::other("disk on fire").into())
        }

        fn save(&mut self, _score: u64) -> Result<(), HighScoreError> {
            Err(std::io::Error::other("disk on fire").into())
        }
    }

    #[test]
    fn test_file_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HighScoreFile::new(dir.path().join("high_score.txt"));

        assert!(store.load().unwrap_err().is_not_found());

        store.save(1234).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "1234");
        assert_eq!(store.load().unwrap(), 1234);
    }

    #[test]
    fn test_file_tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "42\n").unwrap();
        assert_eq!(HighScoreFile::new(&path).load().unwrap(), 42);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "lots").unwrap();

        let err = HighScoreFile::new(&path).load().unwrap_err();
        assert!(matches!(err, HighScoreError::Parse(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_record_beats_stored() {
        let mut store = MemoryHighScores::with_score(500);
        assert_eq!(record_high_score(&mut store, 700), 700);
        assert_eq!(store.stored, Some(700));
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_record_does_not_write_when_not_beaten() {
        let mut store = MemoryHighScores::with_score(500);
        assert_eq!(record_high_score(&mut store, 300), 500);
        assert_eq!(record_high_score(&mut store, 500), 500);
        assert_eq!(store.stored, Some(500));
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_record_with_missing_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HighScoreFile::new(dir.path().join("missing.txt"));
        assert_eq!(record_high_score(&mut store, 0), 0);
        assert!(!store.path().exists());

        assert_eq!(record_high_score(&mut store, 90), 90);
        assert_eq!(store.load().unwrap(), 90);
    }

    #[test]
    fn test_record_with_corrupt_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "not a number").unwrap();
        let mut store = HighScoreFile::new(&path);

        assert_eq!(record_high_score(&mut store, 10), 10);
        assert_eq!(fs::read_to_string(&path).unwrap(), "10");
    }

    #[test]
    fn test_record_survives_broken_store() {
        let mut store = BrokenStore;
        assert_eq!(record_high_score(&mut store, 250), 250);
    }
}
