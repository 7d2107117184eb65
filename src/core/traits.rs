use crate::core::{ObjectLocation, Record, Result};
use async_trait::async_trait;

/// Object store read side.
#[async_trait]
pub trait Source: Send + Sync {
    async fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>>;
}

/// Table store write side. One call stores one item, unconditionally.
#[async_trait]
pub trait Sink: Send + Sync {
    async fn write(&self, record: Record) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

/// Notification channel. Implementations make a single publish attempt.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<()>;
}
