//! Integration tests for the working-directory writer and the end-to-end
//! fetch → batch → write → read-back flow.
//!
//! Only one test here touches the working directory; the rest stay inside
//! temp dirs so they can run in parallel.

use chrono::{Local, NaiveDate};
use daylog::modules::report::read_back;
use daylog::{log_filename, write_log, write_log_in, FetchedRecord, LogBatch, LogError};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Removes the file when dropped, even if the test panics.
struct Cleanup<'a>(&'a str);

impl Drop for Cleanup<'_> {
    fn drop(&mut self) {
        let _ = fs::remove_file(self.0);
    }
}

#[test]
fn write_log_targets_todays_file_in_working_directory() {
    let expected = log_filename(Local::now().date_naive());
    let _cleanup = Cleanup(&expected);

    let first = write_log(&["First call"]).expect("first write");
    let second = write_log(&["Second call", "Additional entry"]).expect("second write");

    assert_eq!(first, expected);
    assert_eq!(first, second);
    assert!(Path::new(&second).exists());
    assert_eq!(
        fs::read_to_string(&second).unwrap(),
        "Second call\nAdditional entry\n"
    );
}

#[test]
fn non_list_input_fails_before_any_file_is_created() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let result = LogBatch::from_json_str(r#""This should be a list""#)
        .and_then(|batch| write_log_in(dir.path(), Local::now().date_naive(), batch.entries()));

    assert!(matches!(result, Err(LogError::InvalidInput(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn enriched_sample_batch_reads_back_in_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let day = NaiveDate::from_ymd_opt(2025, 4, 8).unwrap();
    let record: FetchedRecord = serde_json::from_value(json!({
        "userId": 1,
        "id": 1,
        "title": "sunt aut facere"
    }))
    .unwrap();

    let mut batch: LogBatch = ["User logged in", "User updated profile", "Report exported"]
        .into_iter()
        .collect();
    batch.enrich_with(&record);
    let path = write_log_in(dir.path(), day, batch.entries()).unwrap();

    assert!(path.ends_with("log_20250408.txt"));
    assert_eq!(
        read_back(&path).unwrap(),
        [
            "User logged in",
            "User updated profile",
            "Report exported",
            "API Data fetched: sunt aut facere",
        ]
    );
}

#[test]
fn failed_fetch_leaves_batch_unenriched() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let day = NaiveDate::from_ymd_opt(2025, 4, 8).unwrap();

    let mut batch: LogBatch = ["a", "b", "c"].into_iter().collect();
    batch.enrich_with(&FetchedRecord::default());
    let path = write_log_in(dir.path(), day, batch.entries()).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "a\nb\nc\n");
}
