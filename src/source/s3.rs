use crate::core::{ObjectLocation, Result, Source};
use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_s3::{error::DisplayErrorContext, Client};
use tracing::{debug, instrument};

/// Reads whole objects from S3.
#[derive(Clone)]
pub struct S3Source {
    client: Client,
}

impl S3Source {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Source for S3Source {
    #[instrument(skip(self), fields(location = %location))]
    async fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>> {
        debug!("Downloading {}", location);

        let response = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("{}", DisplayErrorContext(&e)))
            .with_context(|| format!("Failed to download {}", location))?;

        let data = response
            .body
            .collect()
            .await
            .context("Failed to read S3 response body")?
            .into_bytes()
            .to_vec();

        debug!("Downloaded {} bytes from {}", data.len(), location);

        Ok(data)
    }
}
