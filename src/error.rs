use thiserror::Error;

use crate::bindings::CallbackError;

/// Errors surfaced by the recognizer.
#[derive(Debug, Error)]
pub enum Error {
    /// A recognizer already holds the instance slot.
    #[error("recognizer has already been initialized")]
    AlreadyInitialized,
    /// The configuration parsed but is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The configuration could not be parsed.
    #[error("malformed configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
    /// A bound callback failed. The recognizer is already back to inactive.
    #[error("callback for `{trigger}` failed: {source}")]
    Callback {
        trigger: String,
        #[source]
        source: CallbackError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
