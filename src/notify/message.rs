use crate::core::{Notification, ObjectLocation, ProcessingOutcome};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Display;

pub const FAILURE_SUBJECT: &str = "CSV Processing FAILED";
const UNKNOWN: &str = "unknown";

/// Summary sent after the row loop ran to completion, whatever the per-row
/// results were.
pub fn success(location: &ObjectLocation, outcome: &ProcessingOutcome, at: DateTime<Utc>) -> Notification {
    let details = if outcome.errors.is_empty() {
        "All records processed successfully!".to_string()
    } else {
        format!("Errors encountered:\n{}", outcome.errors.join("\n"))
    };

    let body = format!(
        "CSV Processing Complete!\n\n\
         File: {key}\n\
         Bucket: {bucket}\n\
         Records Processed: {processed}\n\
         Errors: {errors}\n\
         Timestamp: {at}\n\n\
         {details}\n",
        key = location.key,
        bucket = location.bucket,
        processed = outcome.processed,
        errors = outcome.errors.len(),
        at = at.to_rfc3339_opts(SecondsFormat::Millis, true),
    );

    Notification {
        subject: format!("CSV Processing: {}", location.key),
        body,
    }
}

/// Report for an invocation that aborted before or during the batch. Either
/// part of the location may still be unresolved.
pub fn failure(error: &dyn Display, bucket: Option<&str>, key: Option<&str>) -> Notification {
    Notification {
        subject: FAILURE_SUBJECT.to_string(),
        body: format!(
            "Error: Fatal error processing CSV: {error}\nFile: {}\nBucket: {}",
            key.unwrap_or(UNKNOWN),
            bucket.unwrap_or(UNKNOWN),
        ),
    }
}
