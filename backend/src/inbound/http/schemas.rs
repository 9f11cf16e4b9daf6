//! OpenAPI schema definitions for the wire contract.
//!
//! The contract crate stays free of framework dependencies, so it derives no
//! `ToSchema`. The wrappers here mirror its types for documentation only and
//! register under the contract type names.

use utoipa::ToSchema;

/// OpenAPI schema for `directory_contract::UserFields`.
///
/// Request body for create and update. Missing fields are treated as empty
/// and reported as required.
#[derive(ToSchema)]
#[schema(as = UserFields, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserFieldsSchema {
    /// Given name, at least two characters after trimming.
    #[schema(example = "Jo")]
    first_name: String,
    /// Family name, at least two characters after trimming.
    #[schema(example = "Lee")]
    last_name: String,
    /// Unique email address.
    #[schema(example = "jo@x.co")]
    email: String,
    /// Organisational unit, at least two characters after trimming.
    #[schema(example = "Eng")]
    department: String,
}

/// OpenAPI schema for `directory_contract::UserRecord`.
#[derive(ToSchema)]
#[schema(as = UserRecord, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserRecordSchema {
    /// Server-assigned identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Given name.
    #[schema(example = "Jo")]
    first_name: String,
    /// Family name.
    #[schema(example = "Lee")]
    last_name: String,
    /// Canonical (lower-cased) email address.
    #[schema(example = "jo@x.co")]
    email: String,
    /// Organisational unit.
    #[schema(example = "Eng")]
    department: String,
}

/// Error categories clients match on.
#[derive(ToSchema)]
#[schema(as = ErrorKind)]
pub enum ErrorKindSchema {
    /// Another user already has the email.
    #[schema(rename = "duplicate_email")]
    DuplicateEmail,
    /// One or more fields failed validation; see `errors`.
    #[schema(rename = "validation")]
    Validation,
    /// Anything else.
    #[schema(rename = "generic")]
    Generic,
}

/// OpenAPI schema for `directory_contract::FieldError`.
#[derive(ToSchema)]
#[schema(as = FieldError)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FieldErrorSchema {
    /// Field name in camelCase.
    #[schema(example = "email")]
    param: String,
    /// Validation message.
    #[schema(example = "Please provide a valid email address")]
    msg: String,
}

/// OpenAPI schema for `directory_contract::ErrorResponse`.
#[derive(ToSchema)]
#[schema(as = ErrorResponse)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorResponseSchema {
    /// Error category.
    #[schema(example = "validation")]
    kind: ErrorKindSchema,
    /// Human-readable summary.
    #[schema(example = "request validation failed")]
    message: String,
    /// Present only when `kind` is `validation`.
    errors: Option<Vec<FieldErrorSchema>>,
}

/// OpenAPI schema for `directory_contract::HealthResponse`.
#[derive(ToSchema)]
#[schema(as = HealthResponse)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct HealthResponseSchema {
    /// Always `OK`.
    #[schema(example = "OK")]
    status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn schemas_register_under_contract_names() {
        assert_eq!(UserFieldsSchema::name(), "UserFields");
        assert_eq!(UserRecordSchema::name(), "UserRecord");
        assert_eq!(ErrorResponseSchema::name(), "ErrorResponse");
        assert_eq!(HealthResponseSchema::name(), "HealthResponse");
    }

    #[test]
    fn user_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<UserRecordSchema>();
        assert!(schema_json.contains("firstName"), "missing firstName");
        assert!(schema_json.contains("lastName"), "missing lastName");
        assert!(!schema_json.contains("first_name"), "snake_case leaked");
    }

    #[test]
    fn error_kind_schema_lists_every_kind() {
        let schema_json = schema_to_json::<ErrorKindSchema>();
        for kind in ["duplicate_email", "validation", "generic"] {
            assert!(schema_json.contains(kind), "missing {kind}");
        }
    }
}
