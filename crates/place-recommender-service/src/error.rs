//! Error types for the recommendation service

use std::fmt;

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use place_recommender::RecommendError;
use serde_json::json;

/// Startup failures
#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Io(std::io::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<tracing_subscriber::filter::ParseError> for ServiceError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Request failures, rendered as `{"error": {"kind", "message"}}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Recommend(RecommendError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "invalid_request", msg),
            ApiError::Recommend(err) => {
                let status = match &err {
                    RecommendError::InvalidCoordinate(..) => StatusCode::BAD_REQUEST,
                    RecommendError::NoAddressFound => StatusCode::NOT_FOUND,
                    RecommendError::Geocoding { .. } | RecommendError::SearchProvider(_) => {
                        tracing::error!(error = %err, "Upstream provider failed");
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, err.kind(), err.user_message().to_string())
            }
        };

        (
            status,
            axum::Json(json!({ "error": { "kind": kind, "message": message } })),
        )
            .into_response()
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        ApiError::Recommend(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
