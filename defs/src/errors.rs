use thiserror::Error;

/// Errors that escape an adapter's `convert`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The bytes are not a decodable document at all.
    #[error("{adapter}: unmarshal: {message}")]
    Decode {
        adapter: &'static str,
        message: String,
    },

    /// The document decodes but is not something this adapter supports.
    #[error("{adapter}: validate: {message}")]
    Validation {
        adapter: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Validation,
}

impl AdapterError {
    pub fn decode(adapter: &'static str, message: impl Into<String>) -> Self {
        AdapterError::Decode {
            adapter,
            message: message.into(),
        }
    }

    pub fn validation(adapter: &'static str, message: impl Into<String>) -> Self {
        AdapterError::Validation {
            adapter,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AdapterError::Decode { .. } => ErrorKind::Decode,
            AdapterError::Validation { .. } => ErrorKind::Validation,
        }
    }
}
