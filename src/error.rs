use std::fmt;

/// Result type for activation operations
pub type Result<T> = std::result::Result<T, ActivationError>;

/// Error type for activation resolution and axis-reducing activations
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationError {
    /// Identifier matches no registered activation name
    UnknownIdentifier(String),

    /// Axis outside `[-ndim, ndim)`
    InvalidAxis {
        axis: isize,
        ndim: usize,
    },

    /// Same axis selected more than once
    DuplicateAxis {
        axis: usize,
    },

    /// Empty axis selection
    EmptyAxes,

    /// Malformed activation config
    InvalidConfig(String),

    /// Reshape failure while reducing over axes
    Shape(String),
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::UnknownIdentifier(name) => {
                write!(f, "Unknown activation identifier: '{}'", name)
            }
            ActivationError::InvalidAxis { axis, ndim } => {
                write!(f, "Invalid axis {} for array of rank {}", axis, ndim)
            }
            ActivationError::DuplicateAxis { axis } => {
                write!(f, "Axis {} selected more than once", axis)
            }
            ActivationError::EmptyAxes => write!(f, "Axis selection must not be empty"),
            ActivationError::InvalidConfig(msg) => write!(f, "Invalid activation config: {}", msg),
            ActivationError::Shape(msg) => write!(f, "Shape error: {}", msg),
        }
    }
}

impl std::error::Error for ActivationError {}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ActivationError {
    fn from(err: serde_json::Error) -> Self {
        ActivationError::InvalidConfig(err.to_string())
    }
}

// Conversion from ndarray::ShapeError
impl From<ndarray::ShapeError> for ActivationError {
    fn from(err: ndarray::ShapeError) -> Self {
        ActivationError::Shape(err.to_string())
    }
}

// Helper functions for common error patterns
impl ActivationError {
    pub fn unknown_identifier<S: Into<String>>(name: S) -> Self {
        ActivationError::UnknownIdentifier(name.into())
    }

    pub fn invalid_axis(axis: isize, ndim: usize) -> Self {
        ActivationError::InvalidAxis { axis, ndim }
    }
}
