use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Failures on the analysis path. Each one becomes a JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid JSON response from the AI model.")]
    InvalidJson,

    #[error("Field 'file' is required")]
    MissingFile,

    /// Request rejected before the upload could be read.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Upload(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    UnexpectedResponse(String),
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::MissingFile | AnalysisError::InvalidRequest(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        log::error!("❌ Food analysis failed ({}): {}", status, self);

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
