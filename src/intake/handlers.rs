use super::types::{PushForm, StatusResponse, Submission, SubmitError};
use crate::config::ServerConfig;
use crate::storage::SubmissionStore;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Form, Json};
use std::sync::Arc;

/// Entries a raw directory listing reports on top of the data files
/// themselves: the self and parent references. The capacity ceiling and the
/// record index are both calibrated against that raw count, so the offset is
/// applied to whatever the store reports.
pub const DIR_LISTING_OVERHEAD: usize = 2;

pub async fn handle_push<S>(
    Extension(store): Extension<Arc<S>>,
    Extension(config): Extension<Arc<ServerConfig>>,
    Form(form): Form<PushForm>,
) -> (StatusCode, String)
where
    S: SubmissionStore + 'static,
{
    let submission = match form.into_submission() {
        Ok(submission) => submission,
        Err(err) => {
            tracing::warn!("Rejected submission: {}", err);
            return (StatusCode::BAD_REQUEST, err.to_string());
        }
    };

    match store_submission(store.as_ref(), config.max_entries, &submission) {
        Ok(index) => {
            tracing::info!(
                "Stored submission from {} {} as record {}",
                submission.first_name,
                submission.second_name,
                index
            );
            (StatusCode::OK, String::new())
        }
        Err(err) => {
            let status = match &err {
                SubmitError::MissingInput => StatusCode::BAD_REQUEST,
                SubmitError::CapacityExceeded => {
                    tracing::warn!(
                        "Refusing submission: record store is at its ceiling of {}",
                        config.max_entries
                    );
                    StatusCode::SERVICE_UNAVAILABLE
                }
                SubmitError::Storage(source) => {
                    tracing::error!("Record store failed: {}", source);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, err.to_string())
        }
    }
}

pub async fn handle_status<S>(
    Extension(store): Extension<Arc<S>>,
    Extension(config): Extension<Arc<ServerConfig>>,
) -> (StatusCode, Json<StatusResponse>)
where
    S: SubmissionStore + 'static,
{
    match store.count_records() {
        Ok(stored) => {
            let accepting = stored + DIR_LISTING_OVERHEAD <= config.max_entries;
            (
                StatusCode::OK,
                Json(StatusResponse {
                    stored,
                    capacity: config.max_entries,
                    accepting,
                }),
            )
        }
        Err(err) => {
            tracing::error!("Failed to count records: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse {
                    stored: 0,
                    capacity: config.max_entries,
                    accepting: false,
                }),
            )
        }
    }
}

pub async fn handle_get_record<S>(
    Path(index): Path<usize>,
    Extension(store): Extension<Arc<S>>,
) -> (StatusCode, String)
where
    S: SubmissionStore + 'static,
{
    match store.read_indexed(index) {
        Ok(Some(text)) => (StatusCode::OK, text),
        Ok(None) => (StatusCode::NOT_FOUND, String::new()),
        Err(err) => {
            tracing::error!("Failed to read record {}: {}", index, err);
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

/// The submit pipeline behind `handle_push`: derive the observed entry count,
/// gate on the ceiling, append to the log, then write the numbered record.
///
/// The index is `observed count − 1` with the listing overhead included, not
/// subtracted, so an empty store yields record 1 and `0.txt` never exists.
/// The count is taken once per call with no locking; two callers can observe
/// the same count and write the same record index (the log keeps both
/// entries, the record file keeps the later one). Once the capacity gate
/// passes, both writes are attempted with no rollback if the second fails.
pub fn store_submission<S>(
    store: &S,
    max_entries: usize,
    submission: &Submission,
) -> Result<usize, SubmitError>
where
    S: SubmissionStore + ?Sized,
{
    let observed = store.count_records()? + DIR_LISTING_OVERHEAD;
    if observed > max_entries {
        return Err(SubmitError::CapacityExceeded);
    }

    store.append_to_log(submission)?;

    let index = observed - 1;
    store.write_indexed(index, submission)?;

    Ok(index)
}
