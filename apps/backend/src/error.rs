//! Error handling for the backend.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::source::SourceError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("La source d'exercices est indisponible : {0}")]
    Source(#[from] SourceError),

    #[error("Définition d'exercice invalide : {0}")]
    Definition(#[from] lacuna_core::ExerciseError),

    #[error("Introuvable : {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Source(_) => StatusCode::BAD_GATEWAY,
            ApiError::Definition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Html(crate::html::error_page(&self.to_string()));
        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
