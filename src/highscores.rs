//! Best score persistence
//!
//! A single integer, stored as one line of base-10 text. The backing record is
//! injected so sessions can run against a file or purely in memory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to persist a new best score
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("failed to write best score to {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: io::Error,
    },
}

/// Durable storage for the best-score record
pub trait ScoreRecord {
    /// Raw record contents, `None` when nothing has been stored yet
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the record contents
    fn write(&mut self, contents: &str) -> io::Result<()>;

    /// Human readable location for logs and errors
    fn location(&self) -> String;
}

/// Record stored in a plain text file
#[derive(Debug, Clone)]
pub struct FileRecord {
    path: PathBuf,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file used for write-then-rename
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl ScoreRecord for FileRecord {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Never leave a truncated record behind
        let tmp = self.tmp_path();
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&tmp);
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Record kept in memory (tests, throwaway sessions)
#[derive(Debug, Clone, Default)]
pub struct MemoryRecord {
    contents: Option<String>,
}

impl MemoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ScoreRecord for MemoryRecord {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Parse the first line of a record as a non-negative integer
fn parse_record(contents: &str) -> Option<u32> {
    contents.lines().next()?.trim().parse().ok()
}

/// Best score with its backing record
#[derive(Debug)]
pub struct ScoreStore<R: ScoreRecord> {
    record: R,
    best: u32,
}

impl<R: ScoreRecord> ScoreStore<R> {
    /// Wrap a record and read the stored best score
    pub fn open(record: R) -> Self {
        let mut store = Self { record, best: 0 };
        store.load();
        store
    }

    /// Re-read the stored best score
    ///
    /// A missing, unreadable or malformed record counts as "no best yet" and
    /// yields 0; the problem is logged, never returned.
    pub fn load(&mut self) -> u32 {
        self.best = match self.record.read() {
            Ok(Some(contents)) => match parse_record(&contents) {
                Some(best) => {
                    log::info!("Loaded best score {} from {}", best, self.record.location());
                    best
                }
                None => {
                    log::warn!(
                        "Ignoring malformed best score record at {}: {:?}",
                        self.record.location(),
                        contents
                    );
                    0
                }
            },
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read best score from {}: {}", self.record.location(), e);
                0
            }
        };
        self.best
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Check if a score would replace the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Report a finished run's score
    ///
    /// Returns whether it became the new best. The in-memory best moves even
    /// when the write fails, so the display stays correct for this session.
    pub fn record_score(&mut self, score: u32) -> Result<bool, ScoreStoreError> {
        if !self.qualifies(score) {
            return Ok(false);
        }

        self.best = score;
        self.record
            .write(&score.to_string())
            .map_err(|source| ScoreStoreError::Write {
                location: self.record.location(),
                source,
            })?;
        log::info!("Best score {} saved to {}", score, self.record.location());
        Ok(true)
    }

    pub fn record(&self) -> &R {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Record whose writes always fail
    struct ReadOnlyRecord;

    impl ScoreRecord for ReadOnlyRecord {
        fn read(&self) -> io::Result<Option<String>> {
            Ok(Some("10".to_string()))
        }

        fn write(&mut self, _contents: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn location(&self) -> String {
            "read-only".to_string()
        }
    }

    #[test]
    fn test_empty_record_loads_zero() {
        let store = ScoreStore::open(MemoryRecord::new());
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn test_malformed_record_loads_zero() {
        for garbage in ["", "abc", "12abc", "-5", "99999999999999", "\n42"] {
            let store = ScoreStore::open(MemoryRecord::with_contents(garbage));
            assert_eq!(store.best(), 0, "record {:?}", garbage);
        }
    }

    #[test]
    fn test_record_with_whitespace() {
        let store = ScoreStore::open(MemoryRecord::with_contents(" 1200 \nextra"));
        assert_eq!(store.best(), 1200);
    }

    #[test]
    fn test_record_keeps_maximum() {
        let mut store = ScoreStore::open(MemoryRecord::new());

        assert!(store.record_score(50).unwrap());
        assert!(!store.record_score(30).unwrap());
        assert_eq!(store.best(), 50);
        assert_eq!(store.record().contents(), Some("50"));

        assert!(store.record_score(80).unwrap());
        assert_eq!(store.best(), 80);
        assert_eq!(store.record().contents(), Some("80"));
    }

    #[test]
    fn test_equal_score_does_not_write() {
        let mut store = ScoreStore::open(MemoryRecord::with_contents("70"));
        assert!(!store.record_score(70).unwrap());
        assert!(!store.record_score(0).unwrap());
        assert_eq!(store.record().contents(), Some("70"));
    }

    #[test]
    fn test_write_failure_still_updates_best() {
        let mut store = ScoreStore::open(ReadOnlyRecord);
        assert_eq!(store.best(), 10);

        let err = store.record_score(300).unwrap_err();
        assert!(matches!(err, ScoreStoreError::Write { .. }));
        assert!(err.to_string().contains("read-only"));
        assert_eq!(store.best(), 300);

        // Lower scores are still rejected against the in-memory best
        assert!(!store.record_score(200).unwrap());
    }

    #[test]
    fn test_file_record_missing() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::open(FileRecord::new(dir.path().join("highest_score.txt")));
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn test_file_record_persists_across_sessions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("highest_score.txt");

        let mut store = ScoreStore::open(FileRecord::new(&path));
        store.record_score(400).unwrap();
        drop(store);

        assert_eq!(fs::read_to_string(&path).unwrap(), "400");
        assert!(!dir.path().join("highest_score.txt.tmp").exists());

        let store = ScoreStore::open(FileRecord::new(&path));
        assert_eq!(store.best(), 400);
    }

    #[test]
    fn test_file_record_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saves").join("best.txt");

        let mut store = ScoreStore::open(FileRecord::new(&path));
        assert!(store.record_score(100).unwrap());
        assert!(path.exists());
    }

    #[test]
    fn test_file_record_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("highest_score.txt");
        fs::write(&path, "not a number").unwrap();

        let mut store = ScoreStore::open(FileRecord::new(&path));
        assert_eq!(store.best(), 0);

        // First real score overwrites the garbage
        assert!(store.record_score(100).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "100");
    }

    #[test]
    fn test_file_record_unreadable() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be: read fails, write fails
        let path = dir.path().join("highest_score.txt");
        fs::create_dir(&path).unwrap();

        let mut store = ScoreStore::open(FileRecord::new(&path));
        assert_eq!(store.best(), 0);
        assert!(store.record_score(100).is_err());
        assert_eq!(store.best(), 100);

        // The failed rename cleans up its temporary file
        assert!(!dir.path().join("highest_score.txt.tmp").exists());
    }

    #[test]
    fn test_file_record_path() {
        let record = FileRecord::new("saves/best.txt");
        assert_eq!(record.path(), Path::new("saves/best.txt"));
        assert_eq!(record.location(), "saves/best.txt");
    }
}
