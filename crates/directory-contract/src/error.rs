//! Error and health payloads exchanged over HTTP.

use serde::{Deserialize, Serialize};

use crate::{Field, FieldErrors};

/// Message the form shows on the email field when the address is taken.
pub const DUPLICATE_EMAIL_FORM_MESSAGE: &str = "This email is already in use";

/// One rejected field in a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field.
    pub param: Field,
    /// Why the value was rejected.
    pub msg: String,
}

impl FieldError {
    /// Build a field error.
    #[must_use]
    pub fn new(param: Field, msg: impl Into<String>) -> Self {
        Self {
            param,
            msg: msg.into(),
        }
    }
}

/// Body of every non-success API response, tagged by `kind`.
///
/// ```text
/// {"kind":"duplicate_email","message":"User with this email already exists"}
/// {"kind":"validation","message":"...","errors":[{"param":"email","msg":"..."}]}
/// {"kind":"generic","message":"user not found"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorResponse {
    /// Another record already uses the submitted email.
    DuplicateEmail {
        /// Human-readable summary.
        message: String,
    },
    /// One or more fields failed validation.
    Validation {
        /// Human-readable summary.
        message: String,
        /// Per-field failures.
        errors: Vec<FieldError>,
    },
    /// Any other failure: not found, malformed request, server fault.
    Generic {
        /// Human-readable summary.
        message: String,
    },
}

impl ErrorResponse {
    /// Human-readable summary regardless of kind.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DuplicateEmail { message }
            | Self::Validation { message, .. }
            | Self::Generic { message } => message,
        }
    }

    /// Collect validation failures into a per-field map.
    ///
    /// Later entries for the same field overwrite earlier ones. Other kinds
    /// yield an empty map.
    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Validation { errors, .. } => errors
                .iter()
                .map(|error| (error.param, error.msg.clone()))
                .collect(),
            Self::DuplicateEmail { .. } | Self::Generic { .. } => FieldErrors::new(),
        }
    }
}

/// Liveness payload: always `{"status":"OK"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Fixed status marker.
    pub status: String,
}

impl HealthResponse {
    /// The only status the liveness endpoint reports.
    pub const OK: &'static str = "OK";

    /// Build the healthy payload.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: Self::OK.to_owned(),
        }
    }
}
