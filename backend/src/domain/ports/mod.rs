//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_service;

#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::{UserService, UserServiceError};
