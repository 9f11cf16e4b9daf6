//! Request and response bodies for user records.

use serde::{Deserialize, Serialize};

use crate::Field;

/// The four editable attributes of a user, as sent by the form.
///
/// Missing JSON keys deserialise as empty strings so an incomplete payload is
/// reported field by field ("is required") instead of failing to decode.
///
/// # Examples
/// ```
/// use directory_contract::{Field, UserFields};
///
/// let fields: UserFields = serde_json::from_str(r#"{"firstName":"Jo"}"#).unwrap();
/// assert_eq!(fields.get(Field::FirstName), "Jo");
/// assert_eq!(fields.get(Field::Email), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFields {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact address.
    pub email: String,
    /// Organisational unit.
    pub department: String,
}

impl UserFields {
    /// Read a field by name.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Department => &self.department,
        }
    }

    /// Replace a field by name.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Department => &mut self.department,
        };
        *slot = value.into();
    }
}

/// A persisted user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: String,
    /// Stored attribute values.
    #[serde(flatten)]
    pub fields: UserFields,
}
