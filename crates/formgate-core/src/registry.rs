//! Registration log persistence
//!
//! Accepted registrations are appended to a JSON file. The log is the
//! observable effect of the submission routine the hosts wire into the
//! gate; the gate itself never touches it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single registration accepted through the gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// Registered name
    pub name: String,
    /// When the registration was accepted
    pub registered_at: DateTime<Utc>,
}

impl RegistrationRecord {
    /// Create a record timestamped now
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registered_at: Utc::now(),
        }
    }
}

/// Append-only JSON log of accepted registrations
pub struct RegistrationLog {
    /// Path to the log file
    path: PathBuf,
}

impl RegistrationLog {
    /// Create a log handle for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records
    ///
    /// A missing file is an empty log, not an error.
    pub fn load(&self) -> Result<Vec<RegistrationRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Append a record and persist the log
    pub fn append(&self, record: RegistrationRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, contents)?;

        tracing::debug!("Appended registration to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_log() {
        let dir = tempdir().unwrap();
        let log = RegistrationLog::new(dir.path().join("registrations.json"));
        assert!(log.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_reload() {
        let dir = tempdir().unwrap();
        let log = RegistrationLog::new(dir.path().join("registrations.json"));

        log.append(RegistrationRecord::new("alice")).unwrap();
        log.append(RegistrationRecord::new("bob")).unwrap();

        let records = log.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "alice");
        assert_eq!(records[1].name, "bob");

        // A fresh handle sees the same contents
        let reopened = RegistrationLog::new(log.path());
        assert_eq!(reopened.load().unwrap(), records);
    }

    #[test]
    fn test_append_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let log = RegistrationLog::new(dir.path().join("nested").join("registrations.json"));

        log.append(RegistrationRecord::new("carol")).unwrap();
        assert_eq!(log.load().unwrap().len(), 1);
    }

    #[test]
    fn test_append_to_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        // The "parent" is a regular file, so the log path can never be written
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let log = RegistrationLog::new(blocker.join("registrations.json"));
        assert!(log.append(RegistrationRecord::new("dave")).is_err());
    }
}
