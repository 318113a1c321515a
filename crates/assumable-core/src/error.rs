use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssumableError {
    #[error("Invalid argument: {field} — {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AssumableError {
    /// Shorthand used by the validation helpers.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AssumableError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Field name carried by an `InvalidArgument`, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            AssumableError::InvalidArgument { field, .. } => Some(field),
            AssumableError::SerializationError(_) => None,
        }
    }

    /// Re-label an `InvalidArgument` with the caller-facing field that fed
    /// the failing computation.
    pub(crate) fn relabel(self, field: &str) -> Self {
        match self {
            AssumableError::InvalidArgument { reason, .. } => AssumableError::InvalidArgument {
                field: field.to_string(),
                reason,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for AssumableError {
    fn from(e: serde_json::Error) -> Self {
        AssumableError::SerializationError(e.to_string())
    }
}
