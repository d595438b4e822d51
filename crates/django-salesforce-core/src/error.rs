//! Core error types for django-salesforce.
//!
//! Every failure in this workspace is detected while a model is being
//! declared: a misconfigured identifier field, a second primary key, a bad
//! settings file, or a value that fails field validation. [`SalesforceError`]
//! covers all of them.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A validation error raised by a field or validator.
///
/// # Examples
///
/// ```
/// use django_salesforce_core::error::ValidationError;
///
/// let err = ValidationError::new("This value must be a valid Salesforce ID.", "invalid");
/// assert_eq!(err.code, "invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The primary error message.
    pub message: String,
    /// A short code identifying the type of validation failure (e.g. "invalid", "max_length").
    pub code: String,
    /// Additional parameters providing context for the error message.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for django-salesforce.
#[derive(Error, Debug)]
pub enum SalesforceError {
    /// A model or field declaration is invalid. Raised while the model is
    /// being built and never at runtime.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// A field lookup on a model failed.
    #[error("Field does not exist: {0}")]
    FieldDoesNotExist(String),

    /// A value failed field validation or coercion.
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    /// A settings value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl SalesforceError {
    /// Returns `true` for errors raised while declaring a model.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ImproperlyConfigured(_) | Self::ConfigurationError(_)
        )
    }
}

impl From<ValidationError> for SalesforceError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err)
    }
}

/// A convenience type alias for `Result<T, SalesforceError>`.
pub type SalesforceResult<T> = Result<T, SalesforceError>;
