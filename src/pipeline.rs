use crate::core::{
    decode_key, InvocationResponse, Notification, Notifier, ObjectLocation, ProcessingOutcome,
    Record, Result, S3Event, Sink, Source,
};
use crate::notify::message;
use crate::sink::RecordWriter;
use crate::source::csv::{self, CsvDocument};
use crate::source::text;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Column whose value names a record in the progress log.
const LABEL_COLUMN: &str = "customerId";

/// Location parts resolved so far, for the failure report.
#[derive(Debug, Default)]
struct Resolved {
    bucket: Option<String>,
    key: Option<String>,
}

/// Drives one invocation: fetch the object, load every row into the table
/// and report the outcome. Service clients are injected and may be shared by
/// any number of invocations.
pub struct Pipeline {
    source: Arc<dyn Source>,
    sink: Arc<dyn Sink>,
    notifier: Arc<dyn Notifier>,
}

impl Pipeline {
    pub fn new(source: Arc<dyn Source>, sink: Arc<dyn Sink>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            source,
            sink,
            notifier,
        }
    }

    /// Exactly one notification is attempted per call. Row failures are
    /// reported in the response; anything else is returned as the error after
    /// the failure notification went out (or failed to).
    #[instrument(skip_all)]
    pub async fn run(&self, event: &Value) -> Result<InvocationResponse> {
        debug!("Event received: {event:#}");

        let mut resolved = Resolved::default();

        match self.process(event, &mut resolved).await {
            Ok((location, outcome)) => {
                self.publish(&message::success(&location, &outcome, Utc::now()))
                    .await;
                Ok(InvocationResponse::from(&outcome))
            }
            Err(err) => {
                error!(error = ?err, "Fatal error processing CSV: {}", err);
                let notification =
                    message::failure(&err, resolved.bucket.as_deref(), resolved.key.as_deref());
                self.publish(&notification).await;
                Err(err)
            }
        }
    }

    async fn process(
        &self,
        event: &Value,
        resolved: &mut Resolved,
    ) -> Result<(ObjectLocation, ProcessingOutcome)> {
        let event = S3Event::from_value(event)?;
        let entity = &event.first()?.s3;

        resolved.bucket = Some(entity.bucket.name.clone());
        let key = decode_key(&entity.object.key)?;
        resolved.key = Some(key.clone());

        let location = ObjectLocation::new(entity.bucket.name.clone(), key);
        info!("Processing file: {}", location);

        let content = text::decode(self.source.fetch(&location).await?)?;
        let document = CsvDocument::parse(&content);

        info!("CSV Headers: {}", document.headers().columns().join(", "));
        info!("Total rows to process: {}", document.rows().len());

        let writer = RecordWriter::new(Arc::clone(&self.sink), location.key.clone());
        let outcome = load_rows(&writer, &document).await;

        Ok((location, outcome))
    }

    async fn publish(&self, notification: &Notification) {
        match self.notifier.notify(notification).await {
            Ok(()) => info!(subject = %notification.subject, "Notification sent"),
            Err(e) => error!(
                error = %e,
                subject = %notification.subject,
                "Failed to send notification"
            ),
        }
    }
}

/// Writes the rows one at a time. A failed row is recorded and the loop
/// moves on.
async fn load_rows(writer: &RecordWriter, document: &CsvDocument<'_>) -> ProcessingOutcome {
    let headers = document.headers();

    stream::iter(document.rows().iter().enumerate())
        .fold(
            ProcessingOutcome::default(),
            |mut outcome, (index, line)| async move {
                let record = csv::parse_row(headers, line);
                let label = record_label(&record).to_string();

                match writer.write(record).await {
                    Ok(()) => {
                        outcome.record_success();
                        info!("Processed record {}: {}", outcome.processed, label);
                    }
                    Err(e) => {
                        let message = outcome.record_failure(index + 1, &e);
                        error!("{}", message);
                    }
                }

                outcome
            },
        )
        .await
}

fn record_label(record: &Record) -> &str {
    record.get_field(LABEL_COLUMN).unwrap_or("unknown")
}
