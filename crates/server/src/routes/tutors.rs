use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use models::notification::Notification;
use models::tutor::TutorListing;
use service::errors::ServiceError;

/// POST /api/register/tutor
///
/// Accepts an arbitrary JSON object with a required `id` and stores it
/// verbatim, with the notification history reset to empty.
pub async fn register(
    State(state): State<ServerState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    match state.tutors.register(body).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(json!({ "message": "Tutor profile saved successfully!" })),
        )),
        Err(ServiceError::Validation(msg)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, msg, None))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save tutor profile",
            Some(e.to_string()),
        )),
    }
}

/// GET /api/tutors
///
/// Every registered tutor in public shape; notification histories are
/// never exposed here.
pub async fn list(State(state): State<ServerState>) -> Json<Vec<TutorListing>> {
    Json(state.tutors.list_public().await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectTutorInput {
    #[serde(default)]
    pub tutor_id: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
}

/// POST /api/tutor/select
///
/// Records a student's interest in a tutor by appending a notification
/// to the tutor's history. Both parties must already be registered.
pub async fn select(
    State(state): State<ServerState>,
    Json(input): Json<SelectTutorInput>,
) -> Result<Json<Value>, JsonApiError> {
    let (tutor_id, student_id) = match (input.tutor_id.as_deref(), input.student_id.as_deref()) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => (t, s),
        _ => {
            return Err(JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Tutor ID and Student ID are required",
                None,
            ))
        }
    };

    if !state.students.contains(student_id).await || !state.tutors.contains(tutor_id).await {
        return Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Tutor or student not found",
            None,
        ));
    }

    match state.tutors.notify(tutor_id, Notification::interest(student_id)).await {
        Ok(()) => Ok(Json(json!({ "message": "Tutor notified successfully!" }))),
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Tutor or student not found",
            None,
        )),
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to notify tutor",
            Some(e.to_string()),
        )),
    }
}

/// GET /api/tutor/notifications/:tutor_id
pub async fn notifications(
    State(state): State<ServerState>,
    Path(tutor_id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    match state.tutors.notifications(&tutor_id).await {
        Ok(notes) => Ok(Json(json!({ "notifications": notes }))),
        Err(ServiceError::NotFound(_)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Tutor not found", None))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to retrieve notifications",
            Some(e.to_string()),
        )),
    }
}
