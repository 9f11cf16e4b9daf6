//! API location for the form client.
//!
//! [`FormConfig`] is built once at start-up and handed to the HTTP adapter;
//! form logic never reads the environment. [`FormSettings`] loads the base
//! URL from `USER_FORM_*` variables or a configuration file.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api/v1";

/// Rejected API base URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The value is not a URL.
    #[error("invalid API base URL '{value}': {message}")]
    Parse {
        /// Raw configured value.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// Only HTTP(S) endpoints are supported.
    #[error("unsupported API base URL scheme '{scheme}'")]
    UnsupportedScheme {
        /// Scheme that was supplied.
        scheme: String,
    },
}

/// Where the user API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    api_base_url: Url,
}

impl FormConfig {
    /// Validate an API base URL such as `http://localhost:4000/api/v1`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the value is not an HTTP(S) URL.
    ///
    /// # Examples
    /// ```
    /// use user_form::FormConfig;
    ///
    /// let config = FormConfig::parse("http://localhost:4000/api/v1/").expect("valid URL");
    /// assert_eq!(config.users_url().as_str(), "http://localhost:4000/api/v1/users");
    /// assert_eq!(
    ///     config.user_url("42").as_str(),
    ///     "http://localhost:4000/api/v1/users/42"
    /// );
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw.trim()).map_err(|err| ConfigError::Parse {
            value: raw.to_owned(),
            message: err.to_string(),
        })?;
        Self::new(url)
    }

    /// Wrap an already parsed URL.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedScheme`] for non-HTTP(S) URLs.
    pub fn new(api_base_url: Url) -> Result<Self, ConfigError> {
        match api_base_url.scheme() {
            "http" | "https" => Ok(Self { api_base_url }),
            other => Err(ConfigError::UnsupportedScheme {
                scheme: other.to_owned(),
            }),
        }
    }

    /// The configured base URL.
    #[must_use]
    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Collection endpoint: `{base}/users`.
    #[must_use]
    pub fn users_url(&self) -> Url {
        self.endpoint(&["users"])
    }

    /// Item endpoint: `{base}/users/{id}`, with `id` percent-encoded.
    #[must_use]
    pub fn user_url(&self, id: &str) -> Url {
        self.endpoint(&["users", id])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        // HTTP(S) URLs always have a path, so this only fails for schemes
        // rejected in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Settings for the form CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_FORM")]
pub struct FormSettings {
    /// Base URL of the user API, including the `/api/v1` prefix.
    #[ortho_config(default = DEFAULT_API_BASE_URL.to_owned())]
    pub api_base_url: String,
}

impl FormSettings {
    /// Resolve the configured base URL.
    ///
    /// A blank value falls back to [`DEFAULT_API_BASE_URL`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configured value is invalid.
    pub fn form_config(&self) -> Result<FormConfig, ConfigError> {
        let raw = match self.api_base_url.trim() {
            "" => DEFAULT_API_BASE_URL,
            configured => configured,
        };
        FormConfig::parse(raw)
    }
}
