use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid trigger event: {0}")]
    Event(String),

    #[error("{0:#}")]
    Source(#[from] anyhow::Error),

    #[error("Object is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    Sink(String),

    #[error("Notification error: {0}")]
    Notify(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
