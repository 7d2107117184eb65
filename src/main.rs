use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use s3_csv_loader::{
    logging::{init_logging, LogConfig},
    notify::sns::SnsNotifier,
    sink::dynamodb::DynamoDbSink,
    source::s3::S3Source,
    Config, Pipeline,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging(&LogConfig::from_env()?)?;

    let config = Config::from_env();
    if config.topic_arn.is_empty() {
        warn!("SNS_TOPIC_ARN is not set; notifications will fail to publish");
    }

    // Clients are built once per process and reused by every invocation.
    let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let pipeline = Pipeline::new(
        Arc::new(S3Source::new(aws_sdk_s3::Client::new(&aws))),
        Arc::new(DynamoDbSink::new(
            aws_sdk_dynamodb::Client::new(&aws),
            config.table_name.clone(),
        )),
        Arc::new(SnsNotifier::new(
            aws_sdk_sns::Client::new(&aws),
            config.topic_arn.clone(),
        )),
    );
    info!(table = %config.table_name, "startup");

    let pipeline = &pipeline;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        pipeline.run(&event.payload).await.map_err(Error::from)
    }))
    .await
}
