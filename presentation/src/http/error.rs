//! Mapping of pipeline failures to HTTP responses

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bergs_application::SubmitInquiryError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

const UNEXPECTED: &str = "Unexpected server error.";
const TOO_LARGE: &str = "Request body is too large.";

/// Errors returned by HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Submit(#[from] SubmitInquiryError),

    /// The request body could not be read as JSON at all
    #[error("unreadable request body: {0}")]
    UnreadableBody(String),

    /// The body could not be buffered (over the size limit, or the stream failed)
    #[error("request body rejected: {0}")]
    BodyRejected(#[from] BytesRejection),

    /// A handler panicked; the panic was caught at the router boundary
    #[error("request handler panicked")]
    Panicked,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Submit(SubmitInquiryError::Invalid(_)) => StatusCode::BAD_REQUEST,
            ApiError::Submit(SubmitInquiryError::NotConfigured { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Submit(SubmitInquiryError::AllFailed { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::BodyRejected(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Submit(SubmitInquiryError::Internal(_))
            | ApiError::UnreadableBody(_)
            | ApiError::BodyRejected(_)
            | ApiError::Panicked => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Submit(err @ SubmitInquiryError::Invalid(_)) => {
                json!({ "error": err.to_string() })
            }
            ApiError::Submit(
                err @ (SubmitInquiryError::NotConfigured { report }
                | SubmitInquiryError::AllFailed { report }),
            ) => json!({ "error": err.to_string(), "details": report }),
            ApiError::BodyRejected(_) if status == StatusCode::PAYLOAD_TOO_LARGE => {
                json!({ "error": TOO_LARGE })
            }
            ApiError::Submit(SubmitInquiryError::Internal(_))
            | ApiError::UnreadableBody(_)
            | ApiError::BodyRejected(_)
            | ApiError::Panicked => {
                error!("Invite API error: {}", self);
                json!({ "error": UNEXPECTED })
            }
        };
        (status, Json(body)).into_response()
    }
}
