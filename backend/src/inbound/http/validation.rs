//! Request decoding helpers shared by the HTTP handlers.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::{Error, UserId};

/// Upper bound on accepted JSON bodies.
const JSON_LIMIT_BYTES: usize = 16 * 1024;

/// JSON extractor configuration for the API scope.
///
/// Bodies that are not JSON, do not parse, or carry the wrong types become
/// a 400 `generic` error instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = %req.path(), "rejected request body");
    let message = match err {
        JsonPayloadError::ContentType => "request body must be JSON".to_owned(),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "request body is too large".to_owned()
        }
        other => format!("malformed request body: {other}"),
    };
    Error::invalid_request(message).into()
}

/// Parse a path identifier.
///
/// A value that is not a UUID cannot name any stored user, so it is
/// reported as not found rather than as a bad request.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        debug!(id = raw, error = %err, "unparseable user id");
        Error::not_found(format!("user {raw} not found"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn uuid_path_segments_parse() {
        let id = parse_user_id("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    #[case("42")]
    #[case("not-a-uuid")]
    fn malformed_ids_are_not_found(#[case] raw: &str) {
        let err = parse_user_id(raw).expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
