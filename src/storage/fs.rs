//! File-backed storage.
//!
//! Lays the store out under a single data directory:
//!
//! ```text
//! <data dir>/full.txt    cumulative log, append-only
//! <data dir>/all/<n>.txt one file per stored submission
//! ```
//!
//! All operations are plain blocking `std::fs` calls: each write is a single
//! open-write-close with no locking, so concurrent writers to the same index
//! race and the last one wins.

use super::record::{render_log_entry, render_record};
use super::{StorageError, SubmissionStore};
use crate::intake::types::Submission;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File name of the cumulative submission log inside the data directory.
pub const LOG_FILE_NAME: &str = "full.txt";

/// Subdirectory holding one numbered file per stored submission.
pub const RECORDS_DIR_NAME: &str = "all";

pub struct FileStore {
    log_path: PathBuf,
    records_dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `data_dir`, creating the directory layout if
    /// it does not exist yet.
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        let records_dir = data_dir.join(RECORDS_DIR_NAME);
        fs::create_dir_all(&records_dir)?;

        Ok(Self {
            log_path: data_dir.join(LOG_FILE_NAME),
            records_dir,
        })
    }

    fn record_path(&self, index: usize) -> PathBuf {
        self.records_dir.join(format!("{}.txt", index))
    }
}

impl SubmissionStore for FileStore {
    fn count_records(&self) -> Result<usize, StorageError> {
        let mut count = 0;
        for entry in fs::read_dir(&self.records_dir)? {
            entry?;
            count += 1;
        }
        Ok(count)
    }

    fn append_to_log(&self, submission: &Submission) -> Result<(), StorageError> {
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        log.write_all(render_log_entry(submission).as_bytes())?;
        Ok(())
    }

    fn write_indexed(&self, index: usize, submission: &Submission) -> Result<(), StorageError> {
        fs::write(self.record_path(index), render_record(submission))?;
        Ok(())
    }

    fn read_indexed(&self, index: usize) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.record_path(index)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
