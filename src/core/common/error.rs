use std::fmt;

#[derive(Debug)]
pub enum EmbedixError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Configuration(String),
    Lock(String),
    VectorDimensionMismatch { expected: usize, actual: usize },
    EmptyLabel,
    LabelTooLong { len: usize, max: usize },
    InvalidNeighborCount(usize),
    Internal(String),
}

impl fmt::Display for EmbedixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO Error: {}", e),
            Self::Json(e) => write!(f, "JSON Serialization/Deserialization Error: {}", e),
            Self::Configuration(s) => write!(f, "Configuration error: {}", s),
            Self::Lock(s) => write!(f, "Lock Error: {}", s),
            Self::VectorDimensionMismatch { expected, actual } => {
                write!(f, "Vector dimension mismatch: expected {}, got {}", expected, actual)
            }
            Self::EmptyLabel => write!(f, "Person label must not be empty"),
            Self::LabelTooLong { len, max } => {
                write!(f, "Person label is {} bytes, maximum is {} bytes", len, max)
            }
            Self::InvalidNeighborCount(n) => {
                write!(f, "Neighbor count must be at least 1, got {}", n)
            }
            Self::Internal(s) => write!(f, "Internal Error: {}", s),
        }
    }
}

impl std::error::Error for EmbedixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

// Manual From implementations
impl From<std::io::Error> for EmbedixError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for EmbedixError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl EmbedixError {
    /// Whether this error is a request-validation failure (bad dimensionality,
    /// bad label, bad neighbor count) as opposed to an infrastructure failure.
    /// Service layers map validation failures to client errors.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::VectorDimensionMismatch { .. }
                | Self::EmptyLabel
                | Self::LabelTooLong { .. }
                | Self::InvalidNeighborCount(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = EmbedixError::VectorDimensionMismatch { expected: 128, actual: 64 };
        assert_eq!(err.to_string(), "Vector dimension mismatch: expected 128, got 64");

        let err = EmbedixError::LabelTooLong { len: 120, max: 99 };
        assert_eq!(err.to_string(), "Person label is 120 bytes, maximum is 99 bytes");

        let err = EmbedixError::InvalidNeighborCount(0);
        assert_eq!(err.to_string(), "Neighbor count must be at least 1, got 0");
    }

    #[test]
    fn validation_classification() {
        assert!(EmbedixError::EmptyLabel.is_validation());
        assert!(EmbedixError::VectorDimensionMismatch { expected: 2, actual: 3 }.is_validation());
        assert!(EmbedixError::InvalidNeighborCount(0).is_validation());
        assert!(!EmbedixError::Lock("poisoned".to_string()).is_validation());
        assert!(!EmbedixError::Configuration("bad".to_string()).is_validation());
    }
}
