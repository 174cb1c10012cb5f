//! Errors raised while decoding bridge traffic.

/// Bridge decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The message text isn't JSON, or doesn't have the expected shape.
    #[error("Malformed bridge message: {0}")]
    Malformed(String),

    /// A place payload is missing a required field or has it blank.
    #[error("Invalid place payload: missing or blank {field}")]
    InvalidPlace { field: &'static str },

    /// Serializing an outbound message failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BridgeError {
    pub fn malformed(message: impl ToString) -> Self {
        Self::Malformed(message.to_string())
    }

    pub fn invalid_place(field: &'static str) -> Self {
        Self::InvalidPlace { field }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}
