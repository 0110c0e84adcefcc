use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemeforgeError {
    #[error("Unsupported quote format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("The {expected} ingestor cannot handle {}", .path.display())]
    FormatMismatch {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("Malformed record in {}: {reason}", .path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("Text extraction subprocess failed for {}: {reason}", .path.display())]
    Subprocess { path: PathBuf, reason: String },

    #[error("Failed to load image {}: {reason}", .path.display())]
    ImageLoad { path: PathBuf, reason: String },

    #[error("Failed to encode image: {0}")]
    ImageEncode(String),

    #[error("No image loaded")]
    ImageNotLoaded,

    #[error("Output width must be supplied or set on the engine before cropping")]
    MissingDimension,

    #[error("Font error: {0}")]
    FontLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for MemeforgeError {
    fn into_response(self) -> Response {
        let status = match &self {
            MemeforgeError::UnsupportedFormat(_)
            | MemeforgeError::FormatMismatch { .. }
            | MemeforgeError::MalformedRecord { .. } => StatusCode::BAD_REQUEST,
            MemeforgeError::Http(_) => StatusCode::BAD_GATEWAY,
            MemeforgeError::Subprocess { .. }
            | MemeforgeError::ImageLoad { .. }
            | MemeforgeError::ImageEncode(_)
            | MemeforgeError::ImageNotLoaded
            | MemeforgeError::MissingDimension
            | MemeforgeError::FontLoad(_)
            | MemeforgeError::Io(_)
            | MemeforgeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, MemeforgeError>;
