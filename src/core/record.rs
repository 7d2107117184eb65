use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::{BTreeMap, HashMap};

pub const UPLOADED_AT: &str = "uploadedAt";
pub const SOURCE_FILE: &str = "sourceFile";

/// One parsed data line. Column values keep header order; fields synthesized
/// at write time live in `metadata` and are only merged into the stored item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub data: Vec<(String, String)>,
    pub metadata: BTreeMap<String, String>,
}

impl Record {
    pub fn with_data(data: Vec<(String, String)>) -> Self {
        Self {
            data,
            metadata: BTreeMap::new(),
        }
    }

    /// Later columns shadow earlier ones with the same name.
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_metadata(&mut self, key: String, value: String) {
        self.metadata.insert(key, value);
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }

    /// Attaches the ingestion timestamp and the source object key.
    pub fn stamp(&mut self, uploaded_at: DateTime<Utc>, source_file: &str) {
        self.set_metadata(
            UPLOADED_AT.to_string(),
            uploaded_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        self.set_metadata(SOURCE_FILE.to_string(), source_file.to_string());
    }

    /// Flattens the record into the item stored in the table. Metadata wins
    /// over a column of the same name.
    pub fn into_item(self) -> HashMap<String, String> {
        let mut item: HashMap<String, String> = self.data.into_iter().collect();
        item.extend(self.metadata);
        item
    }
}
