//! Error mapping - status codes for page views and plain-text mutation replies.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use journal_core::DomainError;

/// Application-level error: one kind per distinct response status.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(String),
    StoreUnavailable,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not Found",
            AppError::Validation(_) => "Bad Request",
            AppError::StoreUnavailable => "Service Unavailable",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            AppError::StoreUnavailable => write!(f, "The post store is unavailable, try again later"),
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            err @ DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::StoreUnavailable(msg) => {
                tracing::error!("Post store error: {}", msg);
                AppError::StoreUnavailable
            }
        }
    }
}

/// Failure of a mutation route, answered as prefixed plain text.
#[derive(Debug)]
pub struct MutationError {
    action: &'static str,
    source: AppError,
}

impl MutationError {
    pub fn new(action: &'static str, source: impl Into<AppError>) -> Self {
        Self {
            action,
            source: source.into(),
        }
    }

    /// Attach the action to an error, for use with `map_err`.
    pub fn while_doing<E: Into<AppError>>(action: &'static str) -> impl Fn(E) -> Self {
        move |err| Self::new(action, err)
    }
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "An error occurred while {}.\n{}", self.action, self.source)
    }
}

impl ResponseError for MutationError {
    fn status_code(&self) -> StatusCode {
        self.source.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Turn a rejected JSON or form body into a plain-text 400.
pub fn body_rejected(err: impl fmt::Display) -> actix_web::Error {
    MutationError::new(
        "reading the request body",
        AppError::Validation(err.to_string()),
    )
    .into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
