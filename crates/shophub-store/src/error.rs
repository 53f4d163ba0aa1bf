use shophub_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stored value for key \"{key}\" is malformed: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize value for key \"{key}\": {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key \"{0}\": use lowercase letters, digits, '-' or '_'")]
    InvalidKey(String),

    /// The cart rejected the change; nothing was written.
    #[error("cart change rejected: {0}")]
    Cart(#[from] CoreError),
}
