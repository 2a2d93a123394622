//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user store backing the
//!   [`UserService`](crate::domain::ports::UserService) port, with an example
//!   roster for seeding.
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no request-handling logic.

pub mod memory;
