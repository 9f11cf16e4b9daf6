//! Wire contract shared by the user directory API and the user form client.
//!
//! Both sides of the HTTP boundary depend on this crate so the field names,
//! validation rules, and error envelope cannot drift apart:
//!
//! - [`Field`] names the four editable user attributes.
//! - [`UserFields`] and [`UserRecord`] are the request and response bodies.
//! - [`validate`] applies the field rules and produces [`FieldErrors`].
//! - [`ErrorResponse`] is the tagged error body returned on failures.

mod error;
mod field;
mod user;
mod validation;

pub use error::{DUPLICATE_EMAIL_FORM_MESSAGE, ErrorResponse, FieldError, HealthResponse};
pub use field::{Field, UnknownFieldError};
pub use user::{UserFields, UserRecord};
pub use validation::{
    FieldErrors, FieldViolation, MIN_TEXT_LENGTH, is_plausible_email, validate, validate_field,
};
