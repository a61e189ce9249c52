use thiserror::Error;

/// Failures of the forecast retrieval step.
///
/// None of these reach the derived view: a failed query leaves the previously
/// fetched payload in place and only records the failure.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Location query is empty")]
    EmptyQuery,

    #[error("Failed to send request to WeatherAPI.com: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("WeatherAPI forecast request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse WeatherAPI forecast JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A date or date-time string the derivations could not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("Invalid date-time '{0}'")]
    InvalidDateTime(String),
}
