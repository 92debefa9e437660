use thiserror::Error;

/// Failures while delivering a push notification.
#[derive(Error, Debug)]
pub enum PushError {
    /// The push provider could not be reached.
    #[error("Push request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The push provider answered with a non-success status.
    #[error("Push provider rejected the request with status {status}: {body}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body for diagnostics
        body: String,
    },
}
