//! Domain-level error type.
//!
//! Errors are transport agnostic: they carry a stable [`ErrorCode`], a
//! message, optional per-field failures, and the trace identifier in scope
//! when they were raised. The HTTP adapter decides status codes and the
//! wire envelope.

use std::fmt;

use directory_contract::{FieldError, FieldErrors};

use super::TraceId;

/// Stable machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Another user already has the submitted email address.
    DuplicateEmail,
    /// The requested user does not exist.
    NotFound,
    /// A backing service (the database) could not be reached.
    ServiceUnavailable,
    /// An unexpected failure inside the service.
    InternalError,
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("user not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.field_errors().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    field_errors: Vec<FieldError>,
    trace_id: Option<String>,
}

/// Summary message attached to validation failures.
pub const VALIDATION_FAILED_MESSAGE: &str = "request validation failed";
/// Summary message attached to duplicate-email failures.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with this email already exists";

impl Error {
    /// Create an error, capturing the trace identifier currently in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field_errors: Vec::new(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Malformed request that is not attributable to a single field.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Field validation failure.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Error, ErrorCode};
    /// use directory_contract::{Field, FieldErrors};
    ///
    /// let mut errors = FieldErrors::new();
    /// errors.insert(Field::Email, "Email is required".to_owned());
    /// let err = Error::validation(errors);
    /// assert_eq!(err.code(), ErrorCode::InvalidRequest);
    /// assert_eq!(err.field_errors().len(), 1);
    /// ```
    pub fn validation(errors: FieldErrors) -> Self {
        let mut error = Self::new(ErrorCode::InvalidRequest, VALIDATION_FAILED_MESSAGE);
        error.field_errors = errors
            .into_iter()
            .map(|(field, message)| FieldError::new(field, message))
            .collect();
        error
    }

    /// The submitted email belongs to another user.
    pub fn duplicate_email() -> Self {
        Self::new(ErrorCode::DuplicateEmail, DUPLICATE_EMAIL_MESSAGE)
    }

    /// The requested resource does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// A dependency is unavailable.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Unexpected internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Override the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Stable failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Per-field failures; empty unless this is a validation error.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Trace identifier captured at construction.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
