//! User record and identity helpers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raised when no identifier exists above the current maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdExhausted {
    /// Largest identifier currently in use.
    pub max: UserId,
}

impl fmt::Display for UserIdExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no user id is available after {}", self.max)
    }
}

impl std::error::Error for UserIdExhausted {}

/// Integer identity of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Identifier directly after this one, or `None` at `i64::MAX`.
    #[must_use]
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Application user as held by the user service.
///
/// The record is flat: every field is replaced wholesale on update and the
/// identifier never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub is_active: bool,
    pub date_of_birth: NaiveDate,
}

/// Identifier for the next created user: one above the largest existing id,
/// or `1` when there are no users.
///
/// Two callers observing the same snapshot compute the same id; the store
/// is expected to reject the second insert.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use user_admin::domain::{User, UserId, next_user_id};
///
/// let dob = NaiveDate::from_ymd_opt(1990, 5, 1).expect("valid date");
/// let users = vec![User {
///     id: UserId::new(5),
///     forename: "Bob".into(),
///     surname: "Jones".into(),
///     email: "bob@example.com".into(),
///     is_active: true,
///     date_of_birth: dob,
/// }];
/// assert_eq!(next_user_id(&users), Ok(UserId::new(6)));
/// assert_eq!(next_user_id(&[]), Ok(UserId::new(1)));
/// ```
pub fn next_user_id(users: &[User]) -> Result<UserId, UserIdExhausted> {
    let max = users
        .iter()
        .map(|user| user.id)
        .max()
        .unwrap_or(UserId::new(0));
    max.checked_next().ok_or(UserIdExhausted { max })
}

/// Pick the user with the given identifier out of a fetched collection.
pub fn find_user(users: Vec<User>, id: UserId) -> Option<User> {
    users.into_iter().find(|user| user.id == id)
}
