//! HTTP inbound adapter exposing the user administration pages.

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub mod validation;
pub mod view_models;
pub mod views;

pub use error::ApiResult;
