use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Map, Value};

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use service::errors::ServiceError;

/// POST /api/register/student
pub async fn register(
    State(state): State<ServerState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    match state.students.register(body).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(json!({ "message": "Student profile saved successfully!" })),
        )),
        Err(ServiceError::Validation(msg)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, msg, None))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save student profile",
            Some(e.to_string()),
        )),
    }
}
