//! Error types for port operations.

/// Durable storage errors with the key involved, for actionable logs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// Reading the backing medium failed, or what it holds is unreadable.
    #[error("Storage read failed for '{key}': {message}")]
    Read { key: String, message: String },

    /// Writing the backing medium failed; nothing was changed.
    #[error("Storage write failed for '{key}': {message}")]
    Write { key: String, message: String },

    /// Serialization/deserialization of the backing medium failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    pub fn read(key: impl ToString, message: impl ToString) -> Self {
        Self::Read {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn write(key: impl ToString, message: impl ToString) -> Self {
        Self::Write {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}
