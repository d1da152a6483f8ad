//! Submission Record Format
//!
//! Every stored submission is rendered as the same fixed-layout text block:
//!
//! ```text
//! =====
//! <first name>
//! <second name>
//! ===
//! <words>
//! ```
//!
//! The block is written verbatim as the numbered record file; the cumulative
//! log receives the identical block framed by one blank line on each side.
//! Both artifacts must stay byte-for-byte in sync, so all rendering goes
//! through this module.

use crate::intake::types::Submission;

/// Marker line opening a record block.
pub const RECORD_MARKER: &str = "=====";

/// Marker line separating the two names from the word list.
pub const WORDS_MARKER: &str = "===";

/// Renders the fixed-layout block for one submission, trailing newline
/// included.
pub fn render_record(submission: &Submission) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}\n",
        RECORD_MARKER,
        submission.first_name,
        submission.second_name,
        WORDS_MARKER,
        submission.words
    )
}

/// Renders the log copy of a submission: the record block with one blank
/// line before and after.
pub fn render_log_entry(submission: &Submission) -> String {
    format!("\n{}\n", render_record(submission))
}
