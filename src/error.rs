use std::fmt;

/// Result type for edge strength operations
pub type Result<T> = std::result::Result<T, EdgeStrengthError>;

/// Main error type for the edge strength library
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeStrengthError {
    /// Operand shapes do not line up
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Numerical computation errors
    NumericalError(String),
}

impl fmt::Display for EdgeStrengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeStrengthError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            EdgeStrengthError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            EdgeStrengthError::IoError(msg) => write!(f, "IO error: {}", msg),
            EdgeStrengthError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            EdgeStrengthError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for EdgeStrengthError {}

impl From<std::io::Error> for EdgeStrengthError {
    fn from(err: std::io::Error) -> Self {
        EdgeStrengthError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for EdgeStrengthError {
    fn from(err: bincode::Error) -> Self {
        EdgeStrengthError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for EdgeStrengthError {
    fn from(err: serde_json::Error) -> Self {
        EdgeStrengthError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl EdgeStrengthError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        EdgeStrengthError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        EdgeStrengthError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
