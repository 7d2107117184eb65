use crate::core::{PipelineError, Result};
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Object-created notification delivered to the function. Only the fields the
/// pipeline reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    pub key: String,
}

impl S3Event {
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| PipelineError::Event(e.to_string()))
    }

    /// Only the first record is processed.
    pub fn first(&self) -> Result<&S3EventRecord> {
        self.records
            .first()
            .ok_or_else(|| PipelineError::Event("event contains no records".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Decodes an object key as it appears in the notification: `+` stands for a
/// space and everything else is percent-encoded.
pub fn decode_key(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");

    // percent_decode_str passes a bad escape through untouched; reject it.
    let bytes = spaced.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(PipelineError::Event(format!(
                    "malformed percent-encoding in object key: {raw}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|key| key.into_owned())
        .map_err(|e| PipelineError::Event(format!("object key {raw} is not valid UTF-8: {e}")))
}
