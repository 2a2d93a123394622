//! Named views rendered by the user pages.
//!
//! A view renders as `{"view": "<Name>", "model": <view model>}` with status
//! 200. Successful mutations answer with a redirect to the user list instead.

use actix_web::body::BoxBody;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::inbound::http::view_models::{
    UserFormViewModel, UserListItemViewModel, UserListViewModel,
};

/// Location of the user list page.
pub const USER_LIST_PATH: &str = "/users/list";

/// Page chosen by a handler together with its model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "model")]
pub enum View {
    /// Landing page; also the soft fallback for unknown detail ids.
    Index,
    /// All, active, or inactive users.
    List(UserListViewModel),
    /// A single user wrapped in a list of one.
    #[serde(rename = "View")]
    Details(UserListViewModel),
    /// Create form, blank or re-shown with errors.
    Create(UserFormViewModel),
    /// Edit form, pre-populated or re-shown with errors.
    Edit(UserFormViewModel),
    /// Delete confirmation.
    Delete(UserListItemViewModel),
}

impl View {
    /// Name of the rendered page.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::List(_) => "List",
            Self::Details(_) => "View",
            Self::Create(_) => "Create",
            Self::Edit(_) => "Edit",
            Self::Delete(_) => "Delete",
        }
    }

    /// Render the view as a `200 OK` JSON document.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

impl Responder for View {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_response()
    }
}

/// `303 See Other` pointing at the user list.
pub fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, USER_LIST_PATH))
        .finish()
}
