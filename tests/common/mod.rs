#![allow(dead_code)]

use async_trait::async_trait;
use s3_csv_loader::{
    Notification, Notifier, ObjectLocation, PipelineError, Pipeline, Record, Result, Sink, Source,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub fn s3_event(bucket: &str, key: &str) -> Value {
    json!({
        "Records": [{
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "eventName": "ObjectCreated:Put",
            "s3": {
                "s3SchemaVersion": "1.0",
                "bucket": { "name": bucket, "arn": format!("arn:aws:s3:::{bucket}") },
                "object": { "key": key, "size": 128 }
            }
        }]
    })
}

#[derive(Default)]
pub struct MemorySource {
    objects: HashMap<(String, String), Vec<u8>>,
    pub fetches: Mutex<Vec<ObjectLocation>>,
}

impl MemorySource {
    pub fn with_object(mut self, bucket: &str, key: &str, body: impl Into<Vec<u8>>) -> Self {
        self.objects
            .insert((bucket.to_string(), key.to_string()), body.into());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }
}

#[async_trait]
impl Source for MemorySource {
    async fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>> {
        self.fetches.lock().unwrap().push(location.clone());
        self.objects
            .get(&(location.bucket.clone(), location.key.clone()))
            .cloned()
            .ok_or_else(|| {
                PipelineError::Source(anyhow::anyhow!(
                    "Failed to download {location}: NoSuchKey: The specified key does not exist."
                ))
            })
    }
}

/// Records every write attempt; attempts listed in `fail_on` (1-based) fail.
#[derive(Default)]
pub struct MemorySink {
    fail_on: HashSet<usize>,
    pub attempts: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn failing_on(attempts: &[usize]) -> Self {
        Self {
            fail_on: attempts.iter().copied().collect(),
            attempts: Mutex::default(),
        }
    }

    pub fn attempts(&self) -> Vec<Record> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sink for MemorySink {
    async fn write(&self, record: Record) -> Result<()> {
        let mut attempts = self.attempts.lock().unwrap();
        attempts.push(record);

        if self.fail_on.contains(&attempts.len()) {
            return Err(PipelineError::Sink(
                "ProvisionedThroughputExceededException: rate exceeded".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryNotifier {
    fail: bool,
    pub sent: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::default(),
        }
    }

    /// Every attempt, including failed ones.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        self.sent.lock().unwrap().push(notification.clone());

        if self.fail {
            return Err(PipelineError::Notify(
                "InvalidParameter: TopicArn must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct Harness {
    pub source: Arc<MemorySource>,
    pub sink: Arc<MemorySink>,
    pub notifier: Arc<MemoryNotifier>,
    pub pipeline: Pipeline,
}

impl Harness {
    pub fn new(source: MemorySource, sink: MemorySink, notifier: MemoryNotifier) -> Self {
        let source = Arc::new(source);
        let sink = Arc::new(sink);
        let notifier = Arc::new(notifier);
        let pipeline = Pipeline::new(source.clone(), sink.clone(), notifier.clone());

        Self {
            source,
            sink,
            notifier,
            pipeline,
        }
    }

    pub fn with_object(bucket: &str, key: &str, body: impl Into<Vec<u8>>) -> Self {
        Self::new(
            MemorySource::default().with_object(bucket, key, body),
            MemorySink::default(),
            MemoryNotifier::default(),
        )
    }
}
