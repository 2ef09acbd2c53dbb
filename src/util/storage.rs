use std::{fs, io, path::{Path, PathBuf}};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
    #[error("storage encoding: {0}")]
    Json(#[from] serde_json::Error),
}

// Outcome of reading a persisted key. A key that exists but cannot be parsed
// is reported as Corrupt rather than silently defaulted; the caller picks the
// fallback policy.
#[derive(Debug, PartialEq, Eq)]
pub enum Loaded<T> {
    Present(T),
    Absent,
    Corrupt,
}

impl<T> Loaded<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Loaded::Present(v) => Some(v),
            Loaded::Absent | Loaded::Corrupt => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Loaded::Absent)
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf { dir.join(format!("{key}.json")) }

pub fn read_key<T: DeserializeOwned>(dir: &Path, key: &str) -> Loaded<T> {
    let p = key_path(dir, key);
    let bytes = match fs::read(&p) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Loaded::Absent,
        Err(e) => {
            tracing::warn!("read {} failed: {}", p.display(), e);
            return Loaded::Corrupt;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Loaded::Present(value),
        Err(e) => {
            tracing::warn!("unparsable {}: {}", p.display(), e);
            Loaded::Corrupt
        }
    }
}

pub fn write_key<T: Serialize>(dir: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(key_path(dir, key), bytes)?;
    Ok(())
}

pub fn remove_key(dir: &Path, key: &str) {
    let _ = fs::remove_file(key_path(dir, key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_missing_key_is_absent() {
        let dir = tempdir().unwrap();
        let loaded: Loaded<Vec<String>> = read_key(dir.path(), "nothing");
        assert!(loaded.is_absent());
    }

    #[test]
    fn round_trips_json_values() {
        let dir = tempdir().unwrap();
        write_key(dir.path(), "token", &"opaque".to_string()).unwrap();
        let loaded: Loaded<String> = read_key(dir.path(), "token");
        assert_eq!(loaded, Loaded::Present("opaque".to_string()));
    }

    #[test]
    fn garbage_reads_as_corrupt_not_default() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("token.json"), b"{not json").unwrap();
        let loaded: Loaded<String> = read_key(dir.path(), "token");
        assert_eq!(loaded, Loaded::Corrupt);
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempdir().unwrap();
        write_key(dir.path(), "token", &1u32).unwrap();
        remove_key(dir.path(), "token");
        remove_key(dir.path(), "token");
        let loaded: Loaded<u32> = read_key(dir.path(), "token");
        assert!(loaded.is_absent());
    }
}
