use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::event::models::EventId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Cancelling a registration that does not exist still answers 200.
pub async fn cancel_registration(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let event_id = EventId::from_string(&event_id)
        .map_err(|_| ApiError::BadRequest("Could not parse event id.".to_string()))?;

    state
        .event_service
        .cancel_registration(event_id, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Cancelled!"))
}
