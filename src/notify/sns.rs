use crate::core::{Notification, Notifier, PipelineError, Result};
use async_trait::async_trait;
use aws_sdk_sns::{error::DisplayErrorContext, Client};
use tracing::{debug, instrument};

/// Publishes notifications to one SNS topic.
#[derive(Clone)]
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    #[instrument(skip_all, fields(topic = %self.topic_arn, subject = %notification.subject))]
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(&notification.subject)
            .message(&notification.body)
            .send()
            .await
            .map_err(|e| PipelineError::Notify(DisplayErrorContext(&e).to_string()))?;

        debug!(message_id = ?output.message_id(), "Published notification");
        Ok(())
    }
}
