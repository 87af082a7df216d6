//! High score persistence
//!
//! A single non-negative integer in a text file. Loaded once at startup and
//! rewritten when a finished session beats it. A missing or unreadable file
//! counts as zero.

use std::path::{Path, PathBuf};

use crate::platform::storage;

/// Best score so far, backed by a text file
#[derive(Debug, Clone)]
pub struct HighScore {
    best: u64,
    path: PathBuf,
}

impl HighScore {
    /// Default file name, relative to the working directory
    pub const DEFAULT_FILE: &'static str = "highscore.txt";

    /// Load from `path`, falling back to zero
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match storage::read_text(&path) {
            Ok(Some(text)) => match text.trim().parse::<u64>() {
                Ok(score) => {
                    log::info!("Loaded high score {} from {}", score, path.display());
                    score
                }
                Err(_) => {
                    log::warn!("Ignoring unreadable high score in {}", path.display());
                    0
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                0
            }
        };
        Self { best, path }
    }

    #[inline]
    pub fn best(&self) -> u64 {
        self.best
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a score beats the stored one
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished session's score. Persists and returns true when it
    /// is a new best; the in-memory value is updated even if the write fails.
    pub fn submit(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        match storage::write_text(&self.path, &score.to_string()) {
            Ok(()) => log::info!("New high score {} saved", score),
            Err(e) => log::warn!("Failed to save high score to {}: {}", self.path.display(), e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let hs = HighScore::load(dir.path().join(HighScore::DEFAULT_FILE));
        assert_eq!(hs.best(), 0);
    }

    #[test]
    fn test_corrupt_file_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScore::load(&path).best(), 0);
    }

    #[test]
    fn test_tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "200\n").unwrap();
        assert_eq!(HighScore::load(&path).best(), 200);
    }

    #[test]
    fn test_lower_score_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "200").unwrap();

        let mut hs = HighScore::load(&path);
        assert!(!hs.submit(150));
        assert!(!hs.submit(200));
        assert_eq!(fs::read_to_string(&path).unwrap(), "200");
    }

    #[test]
    fn test_unwritable_path_still_updates_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::create_dir(dir.path().join("taken.tmp")).unwrap();

        let mut hs = HighScore::load(&path);
        assert!(hs.submit(30));
        assert_eq!(hs.best(), 30);
    }

    proptest! {
        #[test]
        fn prop_persisted_is_max(previous in 0u64..1_000_000, score in 0u64..1_000_000) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("hs.txt");
            fs::write(&path, previous.to_string()).unwrap();

            let mut hs = HighScore::load(&path);
            hs.submit(score);
            prop_assert_eq!(hs.best(), previous.max(score));
            prop_assert_eq!(HighScore::load(&path).best(), previous.max(score));
        }
    }
}
