use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Per-invocation tally of the row loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingOutcome {
    pub processed: usize,
    pub errors: Vec<String>,
}

impl ProcessingOutcome {
    pub fn record_success(&mut self) {
        self.processed += 1;
    }

    /// `row` is the 1-based index of the data line.
    pub fn record_failure(&mut self, row: usize, error: impl Display) -> &str {
        self.errors.push(format!("Error processing row {row}: {error}"));
        self.errors.last().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub message: String,
    pub records_processed: usize,
    pub errors: usize,
}

/// Value returned to the runtime on success. The body travels as a JSON
/// encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    #[serde(serialize_with = "body_as_json_string")]
    pub body: ResponseBody,
}

impl From<&ProcessingOutcome> for InvocationResponse {
    fn from(outcome: &ProcessingOutcome) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody {
                message: "Processing complete".to_string(),
                records_processed: outcome.processed,
                errors: outcome.errors.len(),
            },
        }
    }
}

fn body_as_json_string<S: Serializer>(body: &ResponseBody, serializer: S) -> Result<S::Ok, S::Error> {
    let json = serde_json::to_string(body).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&json)
}
