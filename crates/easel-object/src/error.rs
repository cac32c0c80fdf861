//! Error taxonomy for saved-object operations.
//!
//! Every client implementation maps its failures onto [`ObjectError`]
//! so callers see one taxonomy regardless of transport. The resolver
//! propagates these unchanged; there is no retry layer.

/// Errors surfaced by saved-object clients
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// The addressed object does not exist
    #[error("saved object not found: [{kind}:{id}]")]
    NotFound {
        /// Kind of the missing object
        kind: String,
        /// Id of the missing object
        id: String,
    },

    /// The caller lacks permission for the attempted operation
    #[error("permission denied: {operation}")]
    PermissionDenied {
        /// Operation that was refused
        operation: String,
    },

    /// Transport-layer failure between client and store
    #[error("transport failure: {0}")]
    Transport(String),

    /// Attribute document could not be decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ObjectError {
    /// Shorthand for [`ObjectError::NotFound`]
    #[inline]
    #[must_use]
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// True when the error indicates the addressed object is absent
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_key() {
        let error = ObjectError::not_found("dashboard", "d1");
        assert_eq!(error.to_string(), "saved object not found: [dashboard:d1]");
        assert!(error.is_not_found());
    }

    #[test]
    fn transport_is_not_not_found() {
        let error = ObjectError::Transport("connection reset".into());
        assert!(!error.is_not_found());
    }
}
