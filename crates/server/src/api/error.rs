//! Mapping of submission failures onto HTTP responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use storage_ticket_core::FormError;

use crate::metrics::TICKETS_REJECTED_TOTAL;

/// A failed ticket submission. The message goes to the client verbatim as
/// a plain-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The body could not be parsed as form data (400).
    MalformedRequest(String),
    /// The form fields do not fit a ticket (400).
    Decode(String),
    /// The printer invocation failed (500).
    Print(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::Print(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn reason(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "malformed_request",
            Self::Decode(_) => "decode_error",
            Self::Print(_) => "print_error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::MalformedRequest(msg) | Self::Decode(msg) | Self::Print(msg) => msg,
        }
    }
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Malformed(msg) => Self::MalformedRequest(msg),
            FormError::Decode(msg) => Self::Decode(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        TICKETS_REJECTED_TOTAL
            .with_label_values(&[self.reason()])
            .inc();

        (
            self.status(),
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            format!("{}\n", self.message()),
        )
            .into_response()
    }
}
