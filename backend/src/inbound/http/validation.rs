//! Validation of submitted user forms.
//!
//! Runs before any service call. Every failing field contributes a message so
//! the re-rendered form can show all problems at once.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserId};
use crate::inbound::http::view_models::UserForm;

/// Date format accepted for `dateOfBirth`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form field identity: wire name plus the label used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName {
    name: &'static str,
    label: &'static str,
}

impl FieldName {
    const fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label }
    }

    /// Field name as submitted by the form.
    pub fn as_str(&self) -> &'static str {
        self.name
    }
}

pub const FORENAME: FieldName = FieldName::new("forename", "Forename");
pub const SURNAME: FieldName = FieldName::new("surname", "Surname");
pub const EMAIL: FieldName = FieldName::new("email", "Email");
pub const DATE_OF_BIRTH: FieldName = FieldName::new("dateOfBirth", "Date of Birth");

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "The Email field is not a valid e-mail address.")]
    pub message: String,
}

impl FieldError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str().to_owned(),
            message: message.into(),
        }
    }

    fn required(field: FieldName) -> Self {
        Self::new(field, format!("The {} field is required.", field.label))
    }
}

/// Form values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUserForm {
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub is_active: bool,
    pub date_of_birth: NaiveDate,
}

impl ValidUserForm {
    /// Build the record for a new user.
    pub fn into_user(self, id: UserId, is_active: bool) -> User {
        User {
            id,
            forename: self.forename,
            surname: self.surname,
            email: self.email,
            is_active,
            date_of_birth: self.date_of_birth,
        }
    }

    /// Overwrite the editable fields of `user`, keeping its identifier.
    pub fn apply_to(self, user: &mut User) {
        user.forename = self.forename;
        user.surname = self.surname;
        user.email = self.email;
        user.is_active = self.is_active;
        user.date_of_birth = self.date_of_birth;
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One `@` with something on both sides and no whitespace anywhere.
        Regex::new(r"^[^@\s]+@[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Whether `value` is shaped like an email address.
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

fn required(value: Option<&str>, field: FieldName, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Some(raw.trim().to_owned()),
        _ => {
            errors.push(FieldError::required(field));
            None
        }
    }
}

fn email(value: Option<&str>, errors: &mut Vec<FieldError>) -> Option<String> {
    let email = required(value, EMAIL, errors)?;
    if is_email(&email) {
        Some(email)
    } else {
        errors.push(FieldError::new(
            EMAIL,
            "The Email field is not a valid e-mail address.",
        ));
        None
    }
}

fn date_of_birth(value: Option<&str>, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let raw = required(value, DATE_OF_BIRTH, errors)?;
    match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(
                DATE_OF_BIRTH,
                format!("The value '{raw}' is not valid for {}.", DATE_OF_BIRTH.label),
            ));
            None
        }
    }
}

/// Validate a submitted form, collecting every field failure.
///
/// # Examples
/// ```
/// use user_admin::inbound::http::validation::validate_user_form;
/// use user_admin::inbound::http::view_models::UserForm;
///
/// let form = UserForm {
///     forename: Some("Eve".into()),
///     surname: Some("Lee".into()),
///     email: Some("not-an-email".into()),
///     is_active: None,
///     date_of_birth: Some("2000-01-01".into()),
/// };
/// let errors = validate_user_form(&form).expect_err("email is malformed");
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].field, "email");
/// ```
pub fn validate_user_form(form: &UserForm) -> Result<ValidUserForm, Vec<FieldError>> {
    let mut errors = Vec::new();
    let forename = required(form.forename.as_deref(), FORENAME, &mut errors);
    let surname = required(form.surname.as_deref(), SURNAME, &mut errors);
    let email = email(form.email.as_deref(), &mut errors);
    let date_of_birth = date_of_birth(form.date_of_birth.as_deref(), &mut errors);

    match (forename, surname, email, date_of_birth) {
        (Some(forename), Some(surname), Some(email), Some(date_of_birth)) => Ok(ValidUserForm {
            forename,
            surname,
            email,
            is_active: form.is_active_checked(),
            date_of_birth,
        }),
        _ => Err(errors),
    }
}
