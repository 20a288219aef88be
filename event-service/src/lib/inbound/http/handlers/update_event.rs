use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::EventData;
use super::EventRequest;
use crate::domain::event::models::EventId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Ownership is checked before the body is looked at, so a non-owner gets 401
/// even with an invalid payload.
pub async fn update_event(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
    body: Result<Json<EventRequest>, JsonRejection>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    let event_id = EventId::from_string(&event_id)
        .map_err(|_| ApiError::BadRequest("Invalid ID".to_string()))?;

    let owned = state
        .event_service
        .authorize_owner(event_id, auth_user.user_id)
        .await?;

    let Json(body) = body.map_err(|e| ApiError::bad_body(e, "Invalid request data"))?;
    let details = body.try_into_details()?;

    state
        .event_service
        .update_event(owned, details)
        .await
        .map_err(ApiError::from)
        .map(|ref event| {
            ApiSuccess::new(StatusCode::OK, "Event updated successfully!", event.into())
        })
}
