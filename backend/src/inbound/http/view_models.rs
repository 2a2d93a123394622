//! Presentation records for the user pages and the mapping from domain users.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::User;
use crate::inbound::http::validation::{DATE_FORMAT, FieldError};

/// One user as shown in list rows and single-record pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListItemViewModel {
    #[schema(example = 6)]
    pub id: i64,
    #[schema(example = "Eve")]
    pub forename: String,
    #[schema(example = "Lee")]
    pub surname: String,
    #[schema(example = "e@x.com")]
    pub email: String,
    pub is_active: bool,
    #[schema(value_type = String, format = Date, example = "2000-01-01")]
    pub date_of_birth: NaiveDate,
}

impl From<User> for UserListItemViewModel {
    fn from(value: User) -> Self {
        let User {
            id,
            forename,
            surname,
            email,
            is_active,
            date_of_birth,
        } = value;
        Self {
            id: id.get(),
            forename,
            surname,
            email,
            is_active,
            date_of_birth,
        }
    }
}

/// Ordered users for list pages; the detail page uses a list of one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListViewModel {
    pub items: Vec<UserListItemViewModel>,
}

impl UserListViewModel {
    /// Wrap a single user.
    pub fn single(user: User) -> Self {
        Self {
            items: vec![user.into()],
        }
    }
}

impl FromIterator<User> for UserListViewModel {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(UserListItemViewModel::from).collect(),
        }
    }
}

/// Raw create/edit form submission (`application/x-www-form-urlencoded`).
///
/// Values stay as entered so a rejected form can be shown again unchanged.
/// PascalCase field names are accepted alongside the camelCase ones. Request
/// bodies are decoded as pairs and collected through [`FromIterator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[serde(default, alias = "Forename")]
    pub forename: Option<String>,
    #[serde(default, alias = "Surname")]
    pub surname: Option<String>,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    /// Checkbox value; absent when unchecked.
    #[serde(default, alias = "IsActive")]
    pub is_active: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default, alias = "DateOfBirth")]
    pub date_of_birth: Option<String>,
}

impl UserForm {
    /// Whether the active checkbox was ticked.
    pub fn is_active_checked(&self) -> bool {
        self.is_active.as_deref().is_some_and(|value| {
            let value = value.trim();
            ["true", "on", "1"]
                .iter()
                .any(|accepted| value.eq_ignore_ascii_case(accepted))
        })
    }
}

impl FromIterator<(String, String)> for UserForm {
    /// Build a form from decoded `name=value` pairs.
    ///
    /// The first value of a text field wins. `isActive` may repeat, as with a
    /// checkbox followed by a hidden `false` input; any accepted value ticks it.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "forename" | "Forename" => &mut form.forename,
                "surname" | "Surname" => &mut form.surname,
                "email" | "Email" => &mut form.email,
                "dateOfBirth" | "DateOfBirth" => &mut form.date_of_birth,
                "isActive" | "IsActive" => {
                    if !form.is_active_checked() {
                        form.is_active = Some(value);
                    }
                    continue;
                }
                _ => {
                    debug!(field = %name, "ignoring unknown form field");
                    continue;
                }
            };
            slot.get_or_insert(value);
        }
        form
    }
}

impl From<&User> for UserForm {
    fn from(value: &User) -> Self {
        Self {
            forename: Some(value.forename.clone()),
            surname: Some(value.surname.clone()),
            email: Some(value.email.clone()),
            is_active: value.is_active.then(|| "true".to_owned()),
            date_of_birth: Some(value.date_of_birth.format(DATE_FORMAT).to_string()),
        }
    }
}

/// Model behind the create and edit pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserFormViewModel {
    /// Identifier of the user being edited; absent on the create page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub form: UserForm,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl UserFormViewModel {
    /// Empty create form.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Edit form pre-populated from `user`.
    pub fn for_user(user: &User) -> Self {
        Self {
            id: Some(user.id.get()),
            form: UserForm::from(user),
            errors: Vec::new(),
        }
    }

    /// Form shown again with the submitted values and their errors.
    pub fn rejected(id: Option<i64>, form: UserForm, errors: Vec<FieldError>) -> Self {
        Self { id, form, errors }
    }
}
