//! User aggregate and its validated components.

use std::fmt;

use directory_contract::{Field, FieldErrors, UserFields, UserRecord, validate};
use uuid::Uuid;

/// Rejected identifier input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdError {
    /// The identifier is empty.
    #[error("user id must not be empty")]
    Empty,
    /// The identifier is not a UUID.
    #[error("user id must be a valid UUID")]
    Invalid,
}

/// Server-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier supplied by a client.
    ///
    /// Surrounding whitespace is rejected rather than trimmed.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserIdError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserIdError::Empty);
        }
        if id.trim() != id {
            return Err(UserIdError::Invalid);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserIdError::Invalid)
    }

    /// Allocate a new identifier for a created user.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID loaded from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Email address in canonical form: trimmed and lower-cased.
///
/// Uniqueness comparisons operate on this form, so `Jo@X.co` and `jo@x.co`
/// collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    fn canonical(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated, normalised user attributes.
///
/// ## Invariants
/// - Every text field is trimmed and at least two characters long.
/// - `email` has the `local@domain.tld` shape and is lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    first_name: String,
    last_name: String,
    email: EmailAddress,
    department: String,
}

impl UserProfile {
    /// Validate a submitted payload with the shared field rules.
    ///
    /// # Errors
    /// Returns every failing field with its message when any rule fails.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserProfile;
    /// use directory_contract::UserFields;
    ///
    /// let profile = UserProfile::try_from_fields(UserFields {
    ///     first_name: " Jo ".into(),
    ///     last_name: "Lee".into(),
    ///     email: "Jo@X.co".into(),
    ///     department: "Eng".into(),
    /// })
    /// .expect("valid payload");
    /// assert_eq!(profile.first_name(), "Jo");
    /// assert_eq!(profile.email().as_ref(), "jo@x.co");
    /// ```
    pub fn try_from_fields(fields: UserFields) -> Result<Self, FieldErrors> {
        let errors = validate(&fields);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            first_name: fields.get(Field::FirstName).trim().to_owned(),
            last_name: fields.get(Field::LastName).trim().to_owned(),
            email: EmailAddress::canonical(fields.get(Field::Email)),
            department: fields.get(Field::Department).trim().to_owned(),
        })
    }

    /// Rebuild a profile from trusted storage without re-validating.
    #[must_use]
    pub fn from_stored(
        first_name: String,
        last_name: String,
        email: String,
        department: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email: EmailAddress(email),
            department,
        }
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Canonical email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Organisational unit.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }
}

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    profile: UserProfile,
}

impl User {
    /// Assemble a user from validated parts.
    #[must_use]
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Current attribute values.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}

impl From<User> for UserRecord {
    fn from(value: User) -> Self {
        let User { id, profile } = value;
        Self {
            id: id.to_string(),
            fields: UserFields {
                first_name: profile.first_name,
                last_name: profile.last_name,
                email: profile.email.0,
                department: profile.department,
            },
        }
    }
}
