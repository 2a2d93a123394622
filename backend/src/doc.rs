//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every user page handler, the health probes, and the
//! view model schemas they render. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::view_models::{
    UserForm, UserFormViewModel, UserListItemViewModel, UserListViewModel,
};

/// OpenAPI document for the user administration pages.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User administration",
        description = "Pages for listing, viewing, creating, editing, and deleting users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::index,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::list_active_users,
        crate::inbound::http::users::list_inactive_users,
        crate::inbound::http::users::view_user_details,
        crate::inbound::http::users::create_user_form,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::edit_user_form,
        crate::inbound::http::users::edit_user,
        crate::inbound::http::users::delete_user_form,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        FieldError,
        UserForm,
        UserFormViewModel,
        UserListItemViewModel,
        UserListViewModel
    )),
    tags(
        (name = "users", description = "User administration pages"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
