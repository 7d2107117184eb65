use crate::core::{PipelineError, Record, Result, Sink};
use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Stores each record as one DynamoDB item with every attribute as a string.
#[derive(Clone)]
pub struct DynamoDbSink {
    client: Client,
    table_name: String,
}

impl DynamoDbSink {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

pub fn to_attributes(record: Record) -> HashMap<String, AttributeValue> {
    record
        .into_item()
        .into_iter()
        .map(|(k, v)| (k, AttributeValue::S(v)))
        .collect()
}

#[async_trait]
impl Sink for DynamoDbSink {
    #[instrument(skip_all, fields(table = %self.table_name))]
    async fn write(&self, record: Record) -> Result<()> {
        let item = to_attributes(record);
        debug!("Putting item with {} attributes", item.len());

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| PipelineError::Sink(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
