//! Flat-file persistence shared by the stores.
//!
//! Each store owns one [`JsonFile`] holding a pretty-printed JSON array of its
//! records. Writes always replace the whole file with the current snapshot.

use crate::errors::Result;
use serde::{Serialize, de::DeserializeOwned};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Records that carry a store-assigned numeric id.
pub trait Identified {
    /// The record's id
    fn id(&self) -> u64;
}

/// Next id to hand out for `records`: one past the highest id, or 1 when empty.
pub fn next_id_after<T: Identified>(records: &[T]) -> u64 {
    records.iter().map(Identified::id).max().map_or(1, |max| max + 1)
}

/// A JSON array file on disk.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Points at `path`; nothing is read until [`JsonFile::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the file.
    ///
    /// A missing, unreadable or malformed file yields an empty list; the
    /// store then starts fresh and the next write recreates the file.
    pub async fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file absent, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read data file, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to parse data file, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Rewrites the file with `records`, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if serialization fails or the file cannot be written.
    pub async fn save<T: Serialize>(&self, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), count = records.len(), "Data file rewritten");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::TestDir;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u64,
        name: String,
    }

    impl Identified for Row {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn row(id: u64, name: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_next_id_after() {
        assert_eq!(next_id_after::<Row>(&[]), 1);
        assert_eq!(next_id_after(&[row(3, "a"), row(10, "b"), row(4, "c")]), 11);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = TestDir::new();
        let file = JsonFile::new(dir.path().join("missing.json"));

        let rows: Vec<Row> = file.load().await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_file_is_empty() -> Result<()> {
        let dir = TestDir::new();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, "{ not json").await?;

        let rows: Vec<Row> = JsonFile::new(path).load().await;
        assert!(rows.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_creates_parents_and_pretty_prints() -> Result<()> {
        let dir = TestDir::new();
        let path = dir.path().join("nested").join("rows.json");
        let file = JsonFile::new(&path);

        file.save(&[row(1, "first"), row(2, "second")]).await?;

        let raw = tokio::fs::read_to_string(&path).await?;
        assert!(raw.starts_with("[\n  {"));

        let rows: Vec<Row> = file.load().await;
        assert_eq!(rows, vec![row(1, "first"), row(2, "second")]);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_into_directory_fails() {
        let dir = TestDir::new();
        let file = JsonFile::new(dir.path());

        let err = file.save(&[row(1, "x")]).await.unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
    }
}
