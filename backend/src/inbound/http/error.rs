//! Maps domain errors onto HTTP responses.
//!
//! The JSON body is the serialised [`Error`]. Internal failures are logged
//! in full but reach the client only as a generic message plus trace id.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error::UrlencodedError};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for the user page handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = if self.code() == ErrorCode::InternalError {
            error!(message = self.message(), "request failed with internal error");
            let public = Error::internal(INTERNAL_MESSAGE);
            match self.trace_id() {
                Some(id) => public.with_trace_id(id),
                None => public,
            }
        } else {
            self.clone()
        };

        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(body)
    }
}

/// Turn an unreadable form body into an `invalid_request` error.
///
/// Registered through `web::FormConfig` so extractor failures share the
/// domain error envelope.
pub fn form_error(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = req.path(), error = %err, "form body rejected");
    Error::invalid_request("form body could not be read")
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}
