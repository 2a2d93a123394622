//! Driving port over the user collection.
//!
//! The request handlers only see this trait. The in-memory adapter in
//! `outbound::memory` implements it for the running server and the tests.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user service adapters.
    pub enum UserServiceError {
        /// Backing store could not be reached.
        Unavailable { message: String } => "user store unavailable: {message}",
        /// A user with this identifier already exists.
        Duplicate { id: UserId } => "user {id} already exists",
        /// No user with this identifier exists.
        Missing { id: UserId } => "user {id} does not exist",
    }
}

impl From<UserServiceError> for Error {
    fn from(value: UserServiceError) -> Self {
        match value {
            UserServiceError::Missing { id } => Error::not_found(format!("user {id} not found")),
            UserServiceError::Duplicate { id } => {
                Error::conflict(format!("user {id} was created concurrently; retry the request"))
            }
            UserServiceError::Unavailable { message } => {
                Error::internal(format!("user store unavailable: {message}"))
            }
        }
    }
}

/// Query and mutation operations over user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Every user, ordered by identifier.
    async fn get_all(&self) -> Result<Vec<User>, UserServiceError>;

    /// Users whose active flag equals `is_active`, ordered by identifier.
    async fn filter_by_active(&self, is_active: bool) -> Result<Vec<User>, UserServiceError>;

    /// Insert a new user. The identifier must not be in use.
    async fn create(&self, user: User) -> Result<(), UserServiceError>;

    /// Replace the stored record carrying `user.id`.
    async fn update(&self, user: User) -> Result<(), UserServiceError>;

    /// Remove the stored record carrying `user.id`.
    async fn delete(&self, user: &User) -> Result<(), UserServiceError>;
}
