//! Error types and handling for us-address-rs.

use std::fmt;

/// Result type alias for address operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Field-level failure detail shared by validation and parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// Name of the offending field, empty when the failure is not tied to one
    pub field: String,
    /// Human-readable reason
    pub reason: String,
    /// Offending value, if useful to echo back
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<String>,
    /// Hint for fixing the input
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub suggestion: Option<String>,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
            value: None,
            suggestion: None,
        }
    }

    /// Attach the offending value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

// Renders the tail after the error kind: " on field 'x': reason" or ": reason".
impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, ": {}", self.reason)
        } else {
            write!(f, " on field '{}': {}", self.field, self.reason)
        }
    }
}

/// Error types for address operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The raw input itself is malformed (e.g. empty)
    #[error("validation error{0}")]
    Validation(FieldError),

    /// The input could not be normalized into a usable structure
    #[error("parsing error{0}")]
    Parsing(FieldError),

    /// Several interpretations exist and none could be preferred
    #[error("{message}")]
    AmbiguousAddress {
        /// Error message
        message: String,
    },

    /// Backend setup failed
    #[error("Failed to initialize address backend: {message}")]
    InitializationFailed {
        /// Error message
        message: String,
    },

    /// FFI errors
    #[error("FFI error: {message}")]
    Ffi {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation(FieldError::new(field, reason))
    }

    /// Create a new parsing error
    pub fn parsing(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parsing(FieldError::new(field, reason))
    }

    /// Create a new ambiguous address error
    pub fn ambiguous(message: impl Into<String>) -> Self {
        Self::AmbiguousAddress {
            message: message.into(),
        }
    }

    /// Create a new initialization error
    pub fn initialization_failed(message: impl Into<String>) -> Self {
        Self::InitializationFailed {
            message: message.into(),
        }
    }

    /// Create a new FFI error
    pub fn ffi_error(message: impl Into<String>) -> Self {
        Self::Ffi {
            message: message.into(),
        }
    }

    /// Attach a suggestion to a validation or parsing error. Other variants
    /// are returned unchanged.
    pub fn with_suggestion(self, suggestion: impl Into<String>) -> Self {
        match self {
            Self::Validation(detail) => Self::Validation(detail.with_suggestion(suggestion)),
            Self::Parsing(detail) => Self::Parsing(detail.with_suggestion(suggestion)),
            other => other,
        }
    }

    /// Field-level detail, if this error carries one.
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            Self::Validation(detail) | Self::Parsing(detail) => Some(detail),
            _ => None,
        }
    }
}
