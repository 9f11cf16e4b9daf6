//! Form controller for creating and editing directory users.
//!
//! The controller owns the draft record and its field errors, validates with
//! the rules from [`directory_contract`], and submits through the
//! [`UsersApi`] port. [`HttpUsersApi`] is the reqwest adapter used by the
//! `user-form` binary; tests substitute a mock.
//!
//! ```text
//! Mode::Create ──▶ POST {base}/users
//! Mode::Edit(id) ─▶ GET then PUT {base}/users/{id}
//! ```

pub mod api;
mod config;
pub mod form;
pub mod mode;

pub use api::{ApiFailure, HttpUsersApi, UsersApi};
pub use config::{ConfigError, DEFAULT_API_BASE_URL, FormConfig, FormSettings};
pub use form::{LOAD_FAILED_MESSAGE, SAVE_FAILED_MESSAGE, SubmitOutcome, UserForm};
pub use mode::Mode;
