//! Activity routes: list, signup, unregister.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::activities::{self, ActivityError};
use crate::state::{ActivityStore, AppState};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DetailBody {
    pub detail: String,
}

pub type ErrorResponse = (StatusCode, Json<DetailBody>);

pub(crate) fn activity_error_to_status(err: &ActivityError) -> StatusCode {
    match err {
        ActivityError::NotFound | ActivityError::NotSignedUp => StatusCode::NOT_FOUND,
        ActivityError::AlreadySignedUp | ActivityError::Full | ActivityError::MissingEmail => StatusCode::BAD_REQUEST,
    }
}

fn error_response(err: ActivityError) -> ErrorResponse {
    (activity_error_to_status(&err), Json(DetailBody { detail: err.to_string() }))
}

fn require_email(query: EmailQuery) -> Result<String, ActivityError> {
    query.email.filter(|e| !e.is_empty()).ok_or(ActivityError::MissingEmail)
}

/// `GET /activities`: the full collection in insertion order.
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityStore> {
    Json(activities::list(&state).await)
}

/// `POST /activities/:name/signup?email=`: add a participant.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageBody>, ErrorResponse> {
    let result = match require_email(query) {
        Ok(email) => activities::signup(&state, &name, &email).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(message) => Ok(Json(MessageBody { message })),
        Err(e) => {
            tracing::warn!(activity = %name, error = %e, "signup rejected");
            Err(error_response(e))
        }
    }
}

/// `DELETE /activities/:name/participants?email=`: remove a participant.
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageBody>, ErrorResponse> {
    let result = match require_email(query) {
        Ok(email) => activities::unregister(&state, &name, &email).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(message) => Ok(Json(MessageBody { message })),
        Err(e) => {
            tracing::warn!(activity = %name, error = %e, "unregister rejected");
            Err(error_response(e))
        }
    }
}
