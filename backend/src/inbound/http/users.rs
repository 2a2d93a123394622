//! User administration page handlers.
//!
//! ```text
//! GET  /users/list                 GET  /users/list/create
//! GET  /users/list/active          POST /users/list/create
//! GET  /users/list/not-active      GET  /users/edit/{id}    POST /users/edit/{id}
//! GET  /users/list/view?Id=        GET  /users/delete/{id}  POST /users/delete/{id}
//! ```
//!
//! A missing user renders the index page on the detail route but answers
//! `404` on the edit and delete routes.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::domain::ports::UserServiceError;
use crate::domain::{Error, User, UserId, find_user, next_user_id};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::form_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate_user_form;
use crate::inbound::http::view_models::{
    UserForm, UserFormViewModel, UserListItemViewModel, UserListViewModel,
};
use crate::inbound::http::views::{View, redirect_to_list};

/// Register the user pages under `/users` and the index page at `/`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use user_admin::inbound::http::state::HttpState;
/// use user_admin::inbound::http::users::configure;
/// use user_admin::outbound::memory::InMemoryUserService;
///
/// let state = HttpState::new(Arc::new(InMemoryUserService::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(
        web::scope("/users")
            .app_data(web::FormConfig::default().error_handler(form_error))
            .service(list_users)
            .service(list_active_users)
            .service(list_inactive_users)
            .service(view_user_details)
            .service(create_user_form)
            .service(create_user)
            .service(edit_user_form)
            .service(edit_user)
            .service(delete_user_form)
            .service(delete_user),
    );
}

/// Decoded `application/x-www-form-urlencoded` body. Pairs rather than a
/// struct so a field may repeat.
type FormPairs = Vec<(String, String)>;

fn service_failure(operation: &'static str, err: UserServiceError) -> Error {
    warn!(operation, error = %err, "user service call failed");
    Error::from(err)
}

async fn locate_user(state: &HttpState, id: UserId) -> ApiResult<User> {
    let users = state
        .users
        .get_all()
        .await
        .map_err(|err| service_failure("get_all", err))?;
    find_user(users, id).ok_or_else(|| {
        warn!(user_id = %id, "user not found");
        Error::not_found(format!("user {id} not found"))
    })
}

async fn render_filtered(state: &HttpState, is_active: bool) -> ApiResult<View> {
    let users = state
        .users
        .filter_by_active(is_active)
        .await
        .map_err(|err| service_failure("filter_by_active", err))?;
    Ok(View::List(users.into_iter().collect()))
}

/// Landing page.
#[utoipa::path(
    get,
    path = "/",
    tags = ["users"],
    responses((status = 200, description = "Index view"))
)]
#[get("/")]
pub async fn index() -> View {
    View::Index
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users/list",
    tags = ["users"],
    responses(
        (status = 200, description = "List view", body = UserListViewModel),
        (status = 500, description = "User store failure", body = Error)
    )
)]
#[get("/list")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<View> {
    let users = state
        .users
        .get_all()
        .await
        .map_err(|err| service_failure("get_all", err))?;
    Ok(View::List(users.into_iter().collect()))
}

/// List active users only.
#[utoipa::path(
    get,
    path = "/users/list/active",
    tags = ["users"],
    responses(
        (status = 200, description = "List view", body = UserListViewModel),
        (status = 500, description = "User store failure", body = Error)
    )
)]
#[get("/list/active")]
pub async fn list_active_users(state: web::Data<HttpState>) -> ApiResult<View> {
    render_filtered(&state, true).await
}

/// List inactive users only.
#[utoipa::path(
    get,
    path = "/users/list/not-active",
    tags = ["users"],
    responses(
        (status = 200, description = "List view", body = UserListViewModel),
        (status = 500, description = "User store failure", body = Error)
    )
)]
#[get("/list/not-active")]
pub async fn list_inactive_users(state: web::Data<HttpState>) -> ApiResult<View> {
    render_filtered(&state, false).await
}

/// Query string of the detail page.
#[derive(Debug, Default, Deserialize)]
pub struct UserDetailsQuery {
    #[serde(default, rename = "Id", alias = "id")]
    pub id: Option<String>,
}

impl UserDetailsQuery {
    fn user_id(&self) -> Option<UserId> {
        self.id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(UserId::new)
    }
}

/// Show one user, or the index page when no user matches.
#[utoipa::path(
    get,
    path = "/users/list/view",
    tags = ["users"],
    params(("Id" = Option<i64>, Query, description = "User identifier")),
    responses(
        (status = 200, description = "Detail view, or the index view when the user is unknown", body = UserListViewModel),
        (status = 500, description = "User store failure", body = Error)
    )
)]
#[get("/list/view")]
pub async fn view_user_details(
    state: web::Data<HttpState>,
    query: web::Query<UserDetailsQuery>,
) -> ApiResult<View> {
    let Some(id) = query.user_id() else {
        debug!(raw = ?query.id, "detail request without a usable id; rendering index");
        return Ok(View::Index);
    };

    let users = state
        .users
        .get_all()
        .await
        .map_err(|err| service_failure("get_all", err))?;
    match find_user(users, id) {
        Some(user) => Ok(View::Details(UserListViewModel::single(user))),
        None => {
            debug!(user_id = %id, "no user for detail request; rendering index");
            Ok(View::Index)
        }
    }
}

/// Blank create form.
#[utoipa::path(
    get,
    path = "/users/list/create",
    tags = ["users"],
    responses((status = 200, description = "Create view", body = UserFormViewModel))
)]
#[get("/list/create")]
pub async fn create_user_form() -> View {
    View::Create(UserFormViewModel::blank())
}

/// Create a user from the submitted form.
///
/// The identifier is one above the current maximum and the user always
/// starts active.
#[utoipa::path(
    post,
    path = "/users/list/create",
    tags = ["users"],
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Create view re-shown with validation errors", body = UserFormViewModel),
        (status = 303, description = "Created; redirect to the user list"),
        (status = 400, description = "Body is not a urlencoded form", body = Error),
        (status = 409, description = "A concurrent create took the same id", body = Error),
        (status = 500, description = "User store failure or id space exhausted", body = Error)
    )
)]
#[post("/list/create")]
pub async fn create_user(
    state: web::Data<HttpState>,
    form: web::Form<FormPairs>,
) -> ApiResult<HttpResponse> {
    let form: UserForm = form.into_inner().into_iter().collect();
    let valid = match validate_user_form(&form) {
        Ok(valid) => valid,
        Err(errors) => {
            debug!(errors = errors.len(), "create form rejected");
            return Ok(View::Create(UserFormViewModel::rejected(None, form, errors)).into_response());
        }
    };

    let users = state
        .users
        .get_all()
        .await
        .map_err(|err| service_failure("get_all", err))?;
    let id = next_user_id(&users).map_err(|err| {
        error!(error = %err, "cannot allocate user id");
        Error::internal(err.to_string())
    })?;

    // No privilege model decides activation yet, so new users start active.
    let user = valid.into_user(id, true);
    state
        .users
        .create(user)
        .await
        .map_err(|err| service_failure("create", err))?;

    info!(user_id = %id, "user created");
    Ok(redirect_to_list())
}

/// Edit form pre-populated with the stored user.
#[utoipa::path(
    get,
    path = "/users/edit/{id}",
    tags = ["users"],
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Edit view", body = UserFormViewModel),
        (status = 404, description = "No such user", body = Error)
    )
)]
#[get("/edit/{id}")]
pub async fn edit_user_form(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<View> {
    let user = locate_user(&state, UserId::new(path.into_inner())).await?;
    Ok(View::Edit(UserFormViewModel::for_user(&user)))
}

/// Overwrite a user's editable fields from the submitted form.
#[utoipa::path(
    post,
    path = "/users/edit/{id}",
    tags = ["users"],
    params(("id" = i64, Path, description = "User identifier")),
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Edit view re-shown with validation errors", body = UserFormViewModel),
        (status = 303, description = "Updated; redirect to the user list"),
        (status = 400, description = "Body is not a urlencoded form", body = Error),
        (status = 404, description = "No such user", body = Error)
    )
)]
#[post("/edit/{id}")]
pub async fn edit_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    form: web::Form<FormPairs>,
) -> ApiResult<HttpResponse> {
    let raw_id = path.into_inner();
    let form: UserForm = form.into_inner().into_iter().collect();
    let valid = match validate_user_form(&form) {
        Ok(valid) => valid,
        Err(errors) => {
            debug!(user_id = raw_id, errors = errors.len(), "edit form rejected");
            return Ok(
                View::Edit(UserFormViewModel::rejected(Some(raw_id), form, errors))
                    .into_response(),
            );
        }
    };

    // The user may have been deleted since the form was displayed.
    let mut user = locate_user(&state, UserId::new(raw_id)).await?;
    valid.apply_to(&mut user);
    state
        .users
        .update(user)
        .await
        .map_err(|err| service_failure("update", err))?;

    info!(user_id = raw_id, "user updated");
    Ok(redirect_to_list())
}

/// Delete confirmation page.
#[utoipa::path(
    get,
    path = "/users/delete/{id}",
    tags = ["users"],
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Delete view", body = UserListItemViewModel),
        (status = 404, description = "No such user", body = Error)
    )
)]
#[get("/delete/{id}")]
pub async fn delete_user_form(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<View> {
    let user = locate_user(&state, UserId::new(path.into_inner())).await?;
    Ok(View::Delete(UserListItemViewModel::from(user)))
}

/// Delete a user after confirmation.
#[utoipa::path(
    post,
    path = "/users/delete/{id}",
    tags = ["users"],
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 303, description = "Deleted; redirect to the user list"),
        (status = 404, description = "No such user", body = Error)
    )
)]
#[post("/delete/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let user = locate_user(&state, UserId::new(path.into_inner())).await?;
    state
        .users
        .delete(&user)
        .await
        .map_err(|err| service_failure("delete", err))?;

    info!(user_id = %user.id, "user deleted");
    Ok(redirect_to_list())
}
