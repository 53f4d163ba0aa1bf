use shophub_core::CoreError;
use shophub_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// Network or TLS failure reaching the order relay.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-2xx status.
    #[error("order relay at {host} rejected the submission with HTTP {status}")]
    UnexpectedStatus { status: u16, host: String },

    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    #[error("required checkout field is blank: {0}")]
    MissingField(&'static str),

    #[error("invalid order endpoint: {reason}")]
    InvalidEndpoint { reason: String },

    #[error("failed to serialize {context}: {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The cart's amounts cannot be totalled.
    #[error("cannot total the order: {0}")]
    Amount(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OrderError {
    /// Whether the failure happened while talking to the relay, so the same
    /// order can be submitted again by the user.
    #[must_use]
    pub fn is_submission_failure(&self) -> bool {
        matches!(self, Self::Http(_) | Self::UnexpectedStatus { .. })
    }
}
