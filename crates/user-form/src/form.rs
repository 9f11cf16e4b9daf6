//! Form state machine: draft, field errors, banner, and submission.
//!
//! Client-side validation uses the same rules as the API. Server rejections
//! are folded back into the form: a taken email becomes an email field error,
//! a validation envelope replaces the field errors, and anything else sets
//! the banner.

use std::sync::Arc;

use directory_contract::{
    DUPLICATE_EMAIL_FORM_MESSAGE, ErrorResponse, Field, FieldErrors, UserFields, UserRecord,
    validate,
};
use tracing::{info, warn};

use crate::api::{ApiFailure, UsersApi};
use crate::mode::Mode;

/// Banner shown when the record to edit cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load user data.";
/// Banner shown when a save fails for a reason not tied to a field.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save user data.";

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was saved; return to the user list.
    NavigateToList(UserRecord),
    /// Stay on the form; errors or the banner explain why.
    Stay,
}

/// Create/edit form for a single user.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use directory_contract::Field;
/// use user_form::{FormConfig, HttpUsersApi, Mode, SubmitOutcome, UserForm};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let api = HttpUsersApi::new(FormConfig::parse("http://localhost:4000/api/v1")?)?;
/// let mut form = UserForm::mount(Arc::new(api), Mode::Create).await;
/// form.handle_change(Field::FirstName, "Jo");
/// form.handle_change(Field::LastName, "Lee");
/// form.handle_change(Field::Email, "jo@x.co");
/// form.handle_change(Field::Department, "Eng");
/// if let SubmitOutcome::NavigateToList(record) = form.submit().await {
///     println!("saved {}", record.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct UserForm {
    api: Arc<dyn UsersApi>,
    mode: Mode,
    draft: UserFields,
    errors: FieldErrors,
    banner: Option<&'static str>,
}

impl UserForm {
    /// Open the form.
    ///
    /// In [`Mode::Edit`] the record is fetched first; when that fails the
    /// draft stays empty and the banner reports [`LOAD_FAILED_MESSAGE`].
    pub async fn mount(api: Arc<dyn UsersApi>, mode: Mode) -> Self {
        let mut form = Self {
            api,
            mode,
            draft: UserFields::default(),
            errors: FieldErrors::new(),
            banner: None,
        };
        if let Mode::Edit(id) = &form.mode {
            match form.api.get_user(id).await {
                Ok(record) => form.draft = record.fields,
                Err(error) => {
                    warn!(user_id = %id, %error, "failed to load user");
                    form.banner = Some(LOAD_FAILED_MESSAGE);
                }
            }
        }
        form
    }

    /// Update one draft field and clear its error.
    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Check the draft without touching the displayed errors.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        validate(&self.draft)
    }

    /// Validate and, when clean, send the draft to the API.
    ///
    /// The banner is cleared at the start of each attempt.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.banner = None;
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return SubmitOutcome::Stay;
        }

        let result = match &self.mode {
            Mode::Create => self.api.create_user(&self.draft).await,
            Mode::Edit(id) => self.api.update_user(id, &self.draft).await,
        };
        match result {
            Ok(record) => {
                info!(user_id = %record.id, "user saved");
                SubmitOutcome::NavigateToList(record)
            }
            Err(failure) => {
                self.absorb_failure(failure);
                SubmitOutcome::Stay
            }
        }
    }

    fn absorb_failure(&mut self, failure: ApiFailure) {
        match failure {
            ApiFailure::Rejected {
                body: ErrorResponse::DuplicateEmail { .. },
                ..
            } => {
                self.errors
                    .insert(Field::Email, DUPLICATE_EMAIL_FORM_MESSAGE.to_owned());
            }
            ApiFailure::Rejected {
                body: body @ ErrorResponse::Validation { .. },
                ..
            } => {
                self.errors = body.field_errors();
            }
            other => {
                warn!(error = %other, "failed to save user");
                self.banner = Some(SAVE_FAILED_MESSAGE);
            }
        }
    }

    /// Mode chosen at mount.
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Current draft values.
    #[must_use]
    pub const fn draft(&self) -> &UserFields {
        &self.draft
    }

    /// Field errors currently shown.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error for one field, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Form-level error message, if any.
    #[must_use]
    pub const fn banner(&self) -> Option<&'static str> {
        self.banner
    }
}
