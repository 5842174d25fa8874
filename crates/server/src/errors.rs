use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// JSON error body shared by every failing endpoint: always a
/// `message`, plus an `error` field carrying lower-level diagnostic
/// text when one exists.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Self {
        Self { status, message: message.into(), error }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, detail = ?self.error, "request failed");
        }
        let body = match self.error {
            Some(detail) => {
                serde_json::json!({ "message": self.message, "error": detail })
            }
            None => serde_json::json!({ "message": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
