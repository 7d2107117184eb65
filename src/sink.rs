pub mod dynamodb;

use crate::core::{Record, Result, Sink};
use chrono::Utc;
use std::sync::Arc;

/// Stamps each record with its ingestion metadata before handing it to the
/// table store.
#[derive(Clone)]
pub struct RecordWriter {
    sink: Arc<dyn Sink>,
    source_file: String,
}

impl RecordWriter {
    pub fn new(sink: Arc<dyn Sink>, source_file: impl Into<String>) -> Self {
        Self {
            sink,
            source_file: source_file.into(),
        }
    }

    pub async fn write(&self, mut record: Record) -> Result<()> {
        record.stamp(Utc::now(), &self.source_file);
        self.sink.write(record).await
    }
}
