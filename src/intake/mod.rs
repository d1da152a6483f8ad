//! Submission Intake Module
//!
//! Accepts word submissions posted from the sign-up form and hands them to
//! the storage layer.
//!
//! ## Workflow
//! 1. **Validate**: both player names must be present and non-empty; the word
//!    list must be present but may be empty.
//! 2. **Capacity check**: the store is consulted before any write. Past the
//!    configured ceiling every submission is refused until an operator clears
//!    space externally.
//! 3. **Persist**: the rendered record is appended to the cumulative log,
//!    then written as a numbered record file.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
