//! Whether the form creates a record or edits an existing one.

/// Form mode, fixed when the form is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Start from an empty draft and POST on submit.
    Create,
    /// Load the record with this identifier and PUT on submit.
    Edit(String),
}

impl Mode {
    /// Pick the mode from an optional record identifier.
    ///
    /// Blank identifiers select [`Mode::Create`].
    ///
    /// # Examples
    /// ```
    /// use user_form::Mode;
    ///
    /// assert_eq!(Mode::from_id(None), Mode::Create);
    /// assert_eq!(Mode::from_id(Some("  ".into())), Mode::Create);
    /// assert_eq!(Mode::from_id(Some("abc".into())), Mode::Edit("abc".into()));
    /// ```
    #[must_use]
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => Self::Edit(id.trim().to_owned()),
            _ => Self::Create,
        }
    }

    /// Heading shown above the form.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Add New User",
            Self::Edit(_) => "Edit User",
        }
    }

    /// Label of the submit action.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Add User",
            Self::Edit(_) => "Update User",
        }
    }
}
