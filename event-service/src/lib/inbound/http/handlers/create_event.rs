use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::EventData;
use super::EventRequest;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// The owner is always the caller; the body has no say in it.
pub async fn create_event(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    body: Result<Json<EventRequest>, JsonRejection>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::bad_body(e, "Invalid request data"))?;
    let details = body.try_into_details()?;

    state
        .event_service
        .create_event(details, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::CREATED, "Event created!", event.into()))
}
