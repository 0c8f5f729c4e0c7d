use thiserror::Error;

/// Failure reported by an entry update callback.
///
/// Returning `Ok(None)` from the callback is not an error: it means the data
/// source declined the update without giving a reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("failed to build request: {0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entry type: {0}")]
pub struct UnknownEntryType(pub String);
