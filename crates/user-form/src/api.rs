//! User API port and its reqwest adapter.
//!
//! The adapter owns transport details only: request serialisation, status
//! mapping, and JSON decoding. Interpreting failures is left to the form.

use async_trait::async_trait;
use directory_contract::{ErrorResponse, UserFields, UserRecord};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::FormConfig;

const USER_AGENT: &str = "user-form/0.1";

/// Why a call to the user API failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    /// The API answered with a non-success status and a decodable error body.
    #[error("request rejected with status {status}: {}", body.message())]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Decoded error envelope.
        body: ErrorResponse,
    },
    /// Non-success status whose body is not an error envelope.
    #[error("unexpected status {status}: {preview}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Shortened response body.
        preview: String,
    },
    /// The request never completed.
    #[error("transport failure: {message}")]
    Transport {
        /// Client error message.
        message: String,
    },
    /// A success response carried an unexpected body.
    #[error("invalid response body: {message}")]
    Decode {
        /// Decoder error message.
        message: String,
    },
}

impl ApiFailure {
    /// Status code returned by the API, if a response arrived.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Port for the directory operations the form uses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch every user.
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiFailure>;

    /// Fetch one user by identifier.
    async fn get_user(&self, id: &str) -> Result<UserRecord, ApiFailure>;

    /// Create a user from the submitted fields.
    async fn create_user(&self, fields: &UserFields) -> Result<UserRecord, ApiFailure>;

    /// Replace the fields of an existing user.
    async fn update_user(&self, id: &str, fields: &UserFields) -> Result<UserRecord, ApiFailure>;

    /// Remove a user.
    async fn delete_user(&self, id: &str) -> Result<(), ApiFailure>;
}

/// [`UsersApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    client: Client,
    config: FormConfig,
}

impl HttpUsersApi {
    /// Build an adapter for the API at `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: FormConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    /// Endpoint configuration in use.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiFailure> {
        let body = execute(self.client.get(self.config.users_url())).await?;
        decode(&body)
    }

    async fn get_user(&self, id: &str) -> Result<UserRecord, ApiFailure> {
        let body = execute(self.client.get(self.config.user_url(id))).await?;
        decode(&body)
    }

    async fn create_user(&self, fields: &UserFields) -> Result<UserRecord, ApiFailure> {
        let request = self.client.post(self.config.users_url()).json(fields);
        let body = execute(request).await?;
        decode(&body)
    }

    async fn update_user(&self, id: &str, fields: &UserFields) -> Result<UserRecord, ApiFailure> {
        let request = self.client.put(self.config.user_url(id)).json(fields);
        let body = execute(request).await?;
        decode(&body)
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiFailure> {
        execute(self.client.delete(self.config.user_url(id))).await?;
        Ok(())
    }
}

async fn execute(request: RequestBuilder) -> Result<Vec<u8>, ApiFailure> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(map_transport_error)?;

    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiFailure> {
    serde_json::from_slice(body).map_err(|error| ApiFailure::Decode {
        message: format!("{error}; body: {}", body_preview(body)),
    })
}

fn map_transport_error(error: reqwest::Error) -> ApiFailure {
    ApiFailure::Transport {
        message: error.to_string(),
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiFailure {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(envelope) => ApiFailure::Rejected {
            status: status.as_u16(),
            body: envelope,
        },
        Err(error) => {
            debug!(status = status.as_u16(), %error, "error body is not an envelope");
            ApiFailure::UnexpectedStatus {
                status: status.as_u16(),
                preview: body_preview(body),
            }
        }
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
