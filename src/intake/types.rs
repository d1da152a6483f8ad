//! Intake Data Types
//!
//! Defines the Data Transfer Objects (DTOs) used by the submission endpoint,
//! together with the error taxonomy shared between intake and storage.

use crate::storage::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw form fields as posted by the sign-up page.
///
/// Every field is optional at this layer so an absent field can be told apart
/// from an empty one; `into_submission` enforces the actual rules.
#[derive(Debug, Deserialize)]
pub struct PushForm {
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub words: Option<String>,
}

/// A validated submission: two player names and their word list.
///
/// Exists only for the duration of request handling; it is persisted as text
/// and never retained in memory afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub second_name: String,
    pub words: String,
}

/// Response format for the capacity status endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Number of submission records currently stored.
    pub stored: usize,
    /// Configured ceiling on the observed entry count.
    pub capacity: usize,
    /// Whether the next submission would pass the capacity check.
    pub accepting: bool,
}

/// Why a submission was refused.
///
/// The `Display` strings are the exact response bodies clients of the sign-up
/// page already match on, so they must not change.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A required field was absent, or one of the name fields was empty.
    #[error("Not enough arguments")]
    MissingInput,
    /// The record store has reached the configured ceiling.
    #[error("Too many files")]
    CapacityExceeded,
    /// The backend failed underneath the handler. Details go to the server
    /// log, not to the client.
    #[error("Storage failure")]
    Storage(#[from] StorageError),
}

impl PushForm {
    /// Checks the fields in posting order and stops at the first violation:
    /// both names must be present and non-empty, the word list only has to
    /// be present. An empty word list is a valid entry.
    pub fn into_submission(self) -> Result<Submission, SubmitError> {
        let first_name = self
            .first_name
            .filter(|name| !name.is_empty())
            .ok_or(SubmitError::MissingInput)?;
        let second_name = self
            .second_name
            .filter(|name| !name.is_empty())
            .ok_or(SubmitError::MissingInput)?;
        let words = self.words.ok_or(SubmitError::MissingInput)?;

        Ok(Submission {
            first_name,
            second_name,
            words,
        })
    }
}
