//! The service error type and its mapping onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use std::fmt;
use trdp_rs_xml::TrdpXmlError;

use crate::model::ErrorBody;

/// Errors surfaced by the configuration manager.
///
/// All variants are terminal for the request; no retries are attempted. The
/// underlying extraction is idempotent, so a caller may simply re-invoke.
#[derive(Debug)]
pub enum ManagerError {
    /// The stored document bytes could not be read.
    Io(std::io::Error),

    /// The document does not parse into a device description.
    Document(TrdpXmlError),

    /// The metadata index could not be read or written.
    Metadata(serde_json::Error),

    /// No stored configuration with the requested id.
    NotFound,

    /// The uploaded file is not an acceptable XML document.
    InvalidUpload(&'static str),

    /// The engine rejected a lifecycle transition.
    Engine(&'static str),
}

impl From<std::io::Error> for ManagerError {
    fn from(e: std::io::Error) -> Self {
        ManagerError::Io(e)
    }
}

impl From<TrdpXmlError> for ManagerError {
    fn from(e: TrdpXmlError) -> Self {
        ManagerError::Document(e)
    }
}

impl From<serde_json::Error> for ManagerError {
    fn from(e: serde_json::Error) -> Self {
        ManagerError::Metadata(e)
    }
}

impl fmt::Display for ManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagerError::Io(e) => write!(f, "I/O error: {}", e),
            ManagerError::Document(e) => write!(f, "Document error: {}", e),
            ManagerError::Metadata(e) => write!(f, "Metadata index error: {}", e),
            ManagerError::NotFound => write!(f, "Configuration not found"),
            ManagerError::InvalidUpload(reason) => write!(f, "Invalid upload: {}", reason),
            ManagerError::Engine(reason) => write!(f, "Engine error: {}", reason),
        }
    }
}

impl std::error::Error for ManagerError {}

impl IntoResponse for ManagerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ManagerError::NotFound => {
                (StatusCode::NOT_FOUND, "Configuration not found.".to_string())
            }
            ManagerError::InvalidUpload(reason) => (StatusCode::BAD_REQUEST, (*reason).to_string()),
            ManagerError::Document(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Failed to parse configuration file: {}", e),
            ),
            ManagerError::Engine(reason) => (StatusCode::CONFLICT, (*reason).to_string()),
            ManagerError::Io(_) | ManagerError::Metadata(_) => {
                // Storage details stay in the log, not in the response body.
                error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access stored configurations.".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}
