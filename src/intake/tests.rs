//! Intake Module Tests
//!
//! Validates the submission pipeline against the in-memory store, plus the
//! fault path against a broken file-backed store.
//!
//! ## Test Scopes
//! - **Validation**: Field presence rules and the fixed rejection body.
//! - **Capacity**: The raw-count ceiling and its boundary.
//! - **Pipeline**: Index derivation and the exact bytes written to both artifacts.
//! - **Serialization**: Checks JSON compatibility for API types.

#[cfg(test)]
mod tests {
    use crate::config::DEFAULT_MAX_ENTRIES;
    use crate::intake::handlers::{DIR_LISTING_OVERHEAD, store_submission};
    use crate::intake::types::{PushForm, StatusResponse, Submission, SubmitError};
    use crate::storage::SubmissionStore;
    use crate::storage::fs::{FileStore, RECORDS_DIR_NAME};
    use crate::storage::memory::MemoryStore;
    use crate::storage::record::render_record;

    fn form(first: Option<&str>, second: Option<&str>, words: Option<&str>) -> PushForm {
        PushForm {
            first_name: first.map(str::to_string),
            second_name: second.map(str::to_string),
            words: words.map(str::to_string),
        }
    }

    fn submission(first: &str, second: &str, words: &str) -> Submission {
        Submission {
            first_name: first.to_string(),
            second_name: second.to_string(),
            words: words.to_string(),
        }
    }

    /// Store pre-loaded with `records` seed entries, numbered the way the
    /// pipeline numbers them (starting at 1).
    fn seeded_store(records: usize) -> MemoryStore {
        let store = MemoryStore::new();
        for i in 0..records {
            store
                .write_indexed(i + 1, &submission("Seed", "Entry", "placeholder"))
                .unwrap();
        }
        store
    }

    // ============================================================
    // VALIDATION TESTS
    // ============================================================

    #[test]
    fn test_missing_first_name_rejected() {
        let err = form(None, Some("Bob"), Some("hello"))
            .into_submission()
            .unwrap_err();

        assert!(matches!(err, SubmitError::MissingInput));
        assert_eq!(err.to_string(), "Not enough arguments");
    }

    #[test]
    fn test_empty_first_name_rejected() {
        let err = form(Some(""), Some("Bob"), Some("hello"))
            .into_submission()
            .unwrap_err();

        assert!(matches!(err, SubmitError::MissingInput));
    }

    #[test]
    fn test_missing_second_name_rejected() {
        let err = form(Some("Alice"), None, Some("hello"))
            .into_submission()
            .unwrap_err();

        assert!(matches!(err, SubmitError::MissingInput));
    }

    #[test]
    fn test_empty_second_name_rejected_even_with_words_present() {
        let err = form(Some("Alice"), Some(""), Some("hello"))
            .into_submission()
            .unwrap_err();

        assert!(matches!(err, SubmitError::MissingInput));
    }

    #[test]
    fn test_missing_words_rejected() {
        let err = form(Some("Alice"), Some("Bob"), None)
            .into_submission()
            .unwrap_err();

        assert!(matches!(err, SubmitError::MissingInput));
    }

    #[test]
    fn test_empty_words_accepted() {
        let submission = form(Some("Alice"), Some("Bob"), Some(""))
            .into_submission()
            .unwrap();

        assert_eq!(submission.words, "");
    }

    #[test]
    fn test_valid_form_preserves_fields() {
        let submission = form(Some("Alice"), Some("Bob"), Some("hello world"))
            .into_submission()
            .unwrap();

        assert_eq!(submission.first_name, "Alice");
        assert_eq!(submission.second_name, "Bob");
        assert_eq!(submission.words, "hello world");
    }

    // ============================================================
    // CAPACITY TESTS
    // ============================================================

    #[test]
    fn test_ceiling_rejects_and_writes_nothing() {
        // 1999 records + the 2 listing entries = 2001 observed, over the
        // default ceiling of 2000.
        let store = seeded_store(1999);
        let entry = submission("Alice", "Bob", "hello world");

        let err = store_submission(&store, DEFAULT_MAX_ENTRIES, &entry).unwrap_err();

        assert!(matches!(err, SubmitError::CapacityExceeded));
        assert_eq!(err.to_string(), "Too many files");
        assert_eq!(store.count_records().unwrap(), 1999);
        assert_eq!(store.log_contents(), "");
    }

    #[test]
    fn test_observed_count_equal_to_ceiling_accepted() {
        // 1998 records + 2 = exactly 2000 observed; the gate only refuses
        // counts strictly over the ceiling.
        let store = seeded_store(1998);
        let entry = submission("Alice", "Bob", "hello world");

        let index = store_submission(&store, DEFAULT_MAX_ENTRIES, &entry).unwrap();

        assert_eq!(index, 1999);
        assert_eq!(store.count_records().unwrap(), 1999);
    }

    #[test]
    fn test_custom_ceiling_honored() {
        let store = seeded_store(9);
        let entry = submission("Alice", "Bob", "hello world");

        let err = store_submission(&store, 10, &entry).unwrap_err();
        assert!(matches!(err, SubmitError::CapacityExceeded));

        let index = store_submission(&store, 11, &entry).unwrap();
        assert_eq!(index, 10);
    }

    // ============================================================
    // PIPELINE TESTS
    // ============================================================

    #[test]
    fn test_first_submission_lands_at_record_one() {
        let store = MemoryStore::new();
        let entry = submission("Alice", "Bob", "hello world");

        let index = store_submission(&store, DEFAULT_MAX_ENTRIES, &entry).unwrap();

        // An empty store still observes the two listing entries, so the
        // first record is 1 and record 0 never exists.
        assert_eq!(index, 1);
        assert_eq!(store.read_indexed(0).unwrap(), None);
        assert_eq!(store.read_indexed(1).unwrap().unwrap(), render_record(&entry));
    }

    #[test]
    fn test_index_derived_from_observed_count() {
        // 3 stored records: the listing observes 5 entries, so the new
        // record lands at index 4.
        let store = seeded_store(3);
        let entry = submission("Alice", "Bob", "hello world");

        let index = store_submission(&store, DEFAULT_MAX_ENTRIES, &entry).unwrap();

        assert_eq!(index, 3 + DIR_LISTING_OVERHEAD - 1);
        assert_eq!(
            store.read_indexed(4).unwrap().unwrap(),
            "=====\nAlice\nBob\n===\nhello world\n"
        );
        assert_eq!(
            store.log_contents(),
            "\n=====\nAlice\nBob\n===\nhello world\n\n"
        );
    }

    #[test]
    fn test_indexes_advance_per_submission() {
        let store = MemoryStore::new();

        let first = store_submission(
            &store,
            DEFAULT_MAX_ENTRIES,
            &submission("Alice", "Bob", "one"),
        )
        .unwrap();
        let second = store_submission(
            &store,
            DEFAULT_MAX_ENTRIES,
            &submission("Carol", "Dave", "two"),
        )
        .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.count_records().unwrap(), 2);
    }

    #[test]
    fn test_record_matches_log_block() {
        let store = MemoryStore::new();
        let entry = submission("Alice", "Bob", "cat\ndog\nwindmill");

        let index = store_submission(&store, DEFAULT_MAX_ENTRIES, &entry).unwrap();
        let record = store.read_indexed(index).unwrap().unwrap();

        // The log entry is the record block plus its blank-line framing.
        assert_eq!(store.log_contents(), format!("\n{}\n", record));
    }

    #[test]
    fn test_same_observed_count_collides_on_record_index() {
        // Two submitters list the store before either writes. Both log
        // entries survive; only the later record file does. This documents
        // the race inherent in deriving the index from the listing.
        let store = MemoryStore::new();
        let first = submission("Alice", "Bob", "hello world");
        let second = submission("Carol", "Dave", "quiet");

        let observed = store.count_records().unwrap() + DIR_LISTING_OVERHEAD;
        let index = observed - 1;

        store.append_to_log(&first).unwrap();
        store.write_indexed(index, &first).unwrap();
        store.append_to_log(&second).unwrap();
        store.write_indexed(index, &second).unwrap();

        let log = store.log_contents();
        assert!(log.contains("Alice"));
        assert!(log.contains("Carol"));
        assert_eq!(store.count_records().unwrap(), 1);
        assert_eq!(
            store.read_indexed(index).unwrap().unwrap(),
            render_record(&second)
        );
    }

    #[test]
    fn test_storage_fault_surfaces_distinctly() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        std::fs::remove_dir_all(dir.path().join(RECORDS_DIR_NAME)).unwrap();

        let err = store_submission(
            &store,
            DEFAULT_MAX_ENTRIES,
            &submission("Alice", "Bob", "hello world"),
        )
        .unwrap_err();

        assert!(matches!(err, SubmitError::Storage(_)));
        assert_eq!(err.to_string(), "Storage failure");
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_status_response_json_shape() {
        let status = StatusResponse {
            stored: 5,
            capacity: 2000,
            accepting: true,
        };

        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["stored"], 5);
        assert_eq!(json["capacity"], 2000);
        assert_eq!(json["accepting"], true);
    }

    #[test]
    fn test_push_form_missing_fields_deserialize_to_none() {
        let form: PushForm = serde_json::from_str(r#"{"first_name":"Alice"}"#).unwrap();

        assert_eq!(form.first_name.as_deref(), Some("Alice"));
        assert!(form.second_name.is_none());
        assert!(form.words.is_none());
    }
}
