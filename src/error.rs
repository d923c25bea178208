use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
    #[error("geocoding failed: {0}")]
    Geocode(String),
    #[error("rasterization failed: {0}")]
    Raster(String),
    #[error("index {index} out of range (store has {len} trips)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Config(_)
            | AppError::Io(_)
            | AppError::Json(_)
            | AppError::Template(_)
            | AppError::Raster(_)
            | AppError::IndexOutOfRange { .. }
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Geocode(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}
