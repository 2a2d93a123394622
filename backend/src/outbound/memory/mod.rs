//! In-memory user store.
//!
//! Owns a mapping from [`UserId`] to [`User`] behind an async read/write lock.
//! Reads return snapshots; callers never hold the lock across requests.

pub mod seed;

pub use seed::example_users;

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{UserService, UserServiceError};
use crate::domain::{User, UserId};

/// [`UserService`] adapter keeping every record in process memory.
///
/// # Examples
/// ```
/// use user_admin::domain::ports::UserService;
/// use user_admin::outbound::memory::InMemoryUserService;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = InMemoryUserService::new();
/// assert!(service.get_all().await.expect("in-memory reads succeed").is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl InMemoryUserService {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `users`. Later entries win on duplicate ids.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn get_all(&self) -> Result<Vec<User>, UserServiceError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn filter_by_active(&self, is_active: bool) -> Result<Vec<User>, UserServiceError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .filter(|user| user.is_active == is_active)
            .cloned()
            .collect())
    }

    async fn create(&self, user: User) -> Result<(), UserServiceError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(UserServiceError::duplicate(user.id));
        }
        debug!(user_id = %user.id, "inserting user");
        users.insert(user.id, user);
        Ok(())
    }

    async fn update(&self, user: User) -> Result<(), UserServiceError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(UserServiceError::missing(user.id)),
        }
    }

    async fn delete(&self, user: &User) -> Result<(), UserServiceError> {
        self.users
            .write()
            .await
            .remove(&user.id)
            .map(|_| ())
            .ok_or_else(|| UserServiceError::missing(user.id))
    }
}
