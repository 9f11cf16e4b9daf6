//! Names of the editable user attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editable attribute of a user record.
///
/// Serialises to the camelCase JSON key used in request bodies and in the
/// `param` of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Contact address; unique across the directory.
    Email,
    /// Organisational unit.
    Department,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Department];

    /// JSON key for the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Department => "department",
        }
    }

    /// Human label used at the start of validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Department => "Department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when parsing a string that is not one of the [`Field`] keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Field::FirstName, "firstName")]
    #[case(Field::LastName, "lastName")]
    #[case(Field::Email, "email")]
    #[case(Field::Department, "department")]
    fn json_key_matches_serde_name(#[case] field: Field, #[case] key: &str) {
        let value = serde_json::to_value(field).expect("field serialises");
        assert_eq!(value.as_str(), Some(key));
        assert_eq!(field.as_str(), key);
        assert_eq!(key.parse::<Field>(), Ok(field));
    }

    #[rstest]
    fn parsing_rejects_snake_case_keys() {
        let err = "first_name".parse::<Field>().expect_err("snake_case is not a key");
        assert_eq!(err.to_string(), "unknown user field: first_name");
    }
}
