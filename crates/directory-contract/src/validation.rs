//! Field validation rules applied by both the form and the API.
//!
//! # Rules
//!
//! Per field the first failing rule wins:
//!
//! - first name, last name, department: required (non-blank after trimming),
//!   then at least [`MIN_TEXT_LENGTH`] characters after trimming.
//! - email: required, then must have the `local@domain.tld` shape.
//!
//! Checks are format-only; no domain lookups are performed.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Field, UserFields};

/// Minimum number of characters for the free-text fields, counted after trim.
pub const MIN_TEXT_LENGTH: usize = 2;

/// Field-level validation messages keyed by field, in form order.
pub type FieldErrors = BTreeMap<Field, String>;

/// Reason a single field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    /// The value is empty once trimmed.
    Required,
    /// The trimmed value is shorter than `min` characters.
    TooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// The value does not look like an email address.
    InvalidEmail,
}

impl FieldViolation {
    /// User-facing message for this violation on `field`.
    ///
    /// # Examples
    /// ```
    /// use directory_contract::{Field, FieldViolation};
    ///
    /// assert_eq!(
    ///     FieldViolation::Required.message(Field::FirstName),
    ///     "First name is required"
    /// );
    /// ```
    #[must_use]
    pub fn message(self, field: Field) -> String {
        ViolationMessage { violation: self, field }.to_string()
    }
}

struct ViolationMessage {
    violation: FieldViolation,
    field: Field,
}

impl fmt::Display for ViolationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match self.violation {
            FieldViolation::Required => write!(f, "{label} is required"),
            FieldViolation::TooShort { min } => {
                write!(f, "{label} must be at least {min} characters long")
            }
            FieldViolation::InvalidEmail => f.write_str("Please provide a valid email address"),
        }
    }
}

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Return `true` when `value` has the `local@domain.tld` shape.
///
/// The value is tested as given, so surrounding whitespace fails the check.
///
/// # Examples
/// ```
/// use directory_contract::is_plausible_email;
///
/// assert!(is_plausible_email("jo@x.co"));
/// assert!(!is_plausible_email("jo@localhost"));
/// ```
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check one field value, returning the first rule it breaks.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<FieldViolation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldViolation::Required);
    }
    match field {
        Field::Email => (!is_plausible_email(value)).then_some(FieldViolation::InvalidEmail),
        Field::FirstName | Field::LastName | Field::Department => {
            (trimmed.chars().count() < MIN_TEXT_LENGTH).then_some(FieldViolation::TooShort {
                min: MIN_TEXT_LENGTH,
            })
        }
    }
}

/// Validate every field of a draft.
///
/// Returns an empty map when the draft may be submitted.
///
/// # Examples
/// ```
/// use directory_contract::{Field, UserFields, validate};
///
/// let draft = UserFields {
///     first_name: "Jo".into(),
///     last_name: "L".into(),
///     email: "jo@x.co".into(),
///     department: "Eng".into(),
/// };
/// let errors = validate(&draft);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(
///     errors.get(&Field::LastName).map(String::as_str),
///     Some("Last name must be at least 2 characters long")
/// );
/// ```
#[must_use]
pub fn validate(fields: &UserFields) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, fields.get(field)).map(|violation| (field, violation.message(field)))
        })
        .collect()
}
