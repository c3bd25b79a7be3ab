//! Error types shared across the workspace

use thiserror::Error;

/// Top-level error for pipeline operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input was not textual and could not be coerced to a string.
    /// The offending value is echoed back to the caller.
    #[error("could not convert input to string: {value}")]
    InputCoercion { value: serde_json::Value },

    /// An external inference collaborator failed (network, model error,
    /// malformed output). The core never retries; retry policy belongs to
    /// the collaborator's transport layer.
    #[error("collaborator failure: {0}")]
    Collaborator(String),
}

/// Result alias using the shared [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_error_echoes_value() {
        let err = Error::InputCoercion {
            value: serde_json::json!([1, 2, 3]),
        };
        assert!(err.to_string().contains("[1,2,3]"));
    }
}
