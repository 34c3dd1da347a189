use crate::ui::render_error;
use axum::Json;
use axum::http::StatusCode;
use axum::response::Html;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("could not generate an unused invite code")]
    InviteCodeExhausted,
}

impl RegistryError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Validation(_) => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            RegistryError::NotFound(_) => Self::not_found(err.to_string()),
            RegistryError::InviteCodeExhausted => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Error for the HTML form routes: same status as `AppError`, rendered as a
/// page with a link back home instead of a JSON body.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RegistryError> for HtmlError {
    fn from(err: RegistryError) -> Self {
        Self(err.into())
    }
}

impl axum::response::IntoResponse for HtmlError {
    fn into_response(self) -> axum::response::Response {
        (self.0.status, Html(render_error(&self.0.message))).into_response()
    }
}
