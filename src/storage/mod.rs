//! Submission Storage Module
//!
//! Persists accepted submissions in two shapes kept in lockstep: a cumulative
//! append-only log and one numbered record file per submission.
//!
//! ## Core Concepts
//! - **Record format**: `record` renders the fixed text layout shared by both shapes.
//! - **Port**: `SubmissionStore` decouples the intake pipeline from the backend.
//! - **Backends**: `fs` writes through to a local directory tree; `memory` keeps
//!   everything in process for tests and ephemeral deployments.

pub mod fs;
pub mod memory;
pub mod record;


use crate::intake::types::Submission;
use thiserror::Error;

/// Failure inside a storage backend, distinct from any problem with the
/// submitted input. Details are meant for the server log; clients only ever
/// see the fixed `Storage failure` body.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Port between the intake pipeline and a persistence backend.
///
/// The index passed to `write_indexed` is chosen by the caller; writing to an
/// index that already holds a record replaces it.
pub trait SubmissionStore: Send + Sync {
    /// Number of submission records currently stored.
    fn count_records(&self) -> Result<usize, StorageError>;

    /// Appends `submission` to the cumulative log, framed by one blank line
    /// on each side.
    fn append_to_log(&self, submission: &Submission) -> Result<(), StorageError>;

    /// Writes `submission` as the record stored under `index`.
    fn write_indexed(&self, index: usize, submission: &Submission) -> Result<(), StorageError>;

    /// Returns the raw text of record `index`, or `None` if absent.
    fn read_indexed(&self, index: usize) -> Result<Option<String>, StorageError>;
}
