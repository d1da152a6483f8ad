//! In-memory storage.
//!
//! Keeps the record set and the cumulative log in process. Used by the test
//! suite as a drop-in stand-in for the file-backed store, and usable for
//! ephemeral deployments that do not need submissions to survive a restart.

use super::record::{render_log_entry, render_record};
use super::{StorageError, SubmissionStore};
use crate::intake::types::Submission;
use dashmap::DashMap;
use std::sync::Mutex;

pub struct MemoryStore {
    records: DashMap<usize, String>,
    log: Mutex<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            log: Mutex::new(String::new()),
        }
    }

    /// Full contents of the in-memory log, as the file-backed log would read.
    pub fn log_contents(&self) -> String {
        self.log.lock().unwrap().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStore for MemoryStore {
    fn count_records(&self) -> Result<usize, StorageError> {
        Ok(self.records.len())
    }

    fn append_to_log(&self, submission: &Submission) -> Result<(), StorageError> {
        self.log
            .lock()
            .unwrap()
            .push_str(&render_log_entry(submission));
        Ok(())
    }

    fn write_indexed(&self, index: usize, submission: &Submission) -> Result<(), StorageError> {
        self.records.insert(index, render_record(submission));
        Ok(())
    }

    fn read_indexed(&self, index: usize) -> Result<Option<String>, StorageError> {
        Ok(self.records.get(&index).map(|record| record.value().clone()))
    }
}
