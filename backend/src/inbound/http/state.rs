//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the [`UserService`] port and stay testable without real storage.

use std::sync::Arc;

use crate::domain::ports::UserService;

/// Dependency bundle for the user administration handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_admin::inbound::http::state::HttpState;
/// use user_admin::outbound::memory::InMemoryUserService;
///
/// let state = HttpState::new(Arc::new(InMemoryUserService::new()));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserService>,
}

impl HttpState {
    /// Construct state around a user service implementation.
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}
