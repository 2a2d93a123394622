//! User administration web module.
//!
//! Lists, views, creates, edits, and deletes users held in an injected
//! [`domain::ports::UserService`]. Handlers live in [`inbound::http`]; the
//! in-memory store lives in [`outbound::memory`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
