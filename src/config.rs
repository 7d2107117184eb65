use std::env;

pub const DEFAULT_TABLE_NAME: &str = "CustomerData";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Destination table for parsed rows (`DYNAMODB_TABLE`).
    pub table_name: String,
    /// Topic receiving the outcome notification (`SNS_TOPIC_ARN`). Left empty
    /// when unset; publishing then fails and is only logged.
    pub topic_arn: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            table_name: lookup("DYNAMODB_TABLE").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            topic_arn: lookup("SNS_TOPIC_ARN").unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
