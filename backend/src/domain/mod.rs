//! Domain primitives and ports.
//!
//! Purpose: keep the user record, its identity rules, and the error model
//! free of HTTP concerns. Inbound adapters translate these into responses.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - TraceId — request-scoped correlation identifier.
//! - User / UserId — the administered record and its identity.
//! - next_user_id / find_user — identity helpers used by the handlers.
//! - ports::UserService — the injected user collection.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserIdExhausted, find_user, next_user_id};
