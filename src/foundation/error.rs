/// Convenience result type used across qrsplit.
pub type QrsplitResult<T> = Result<T, QrsplitError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum QrsplitError {
    /// Invalid configuration, label text, or symbol data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Segment data does not fit in the largest supported symbol.
    #[error("capacity exceeded: {0}")]
    Capacity(String),

    /// The symbol encoder failed for a reason other than capacity.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QrsplitError {
    /// Build a [`QrsplitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QrsplitError::Capacity`] value.
    pub fn capacity(msg: impl Into<String>) -> Self {
        Self::Capacity(msg.into())
    }

    /// Build a [`QrsplitError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Whether the error reports data that cannot fit in a symbol.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::Capacity(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
