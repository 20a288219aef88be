use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::event::models::EventId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_event(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let event_id = EventId::from_string(&event_id)
        .map_err(|_| ApiError::BadRequest("Invalid ID".to_string()))?;

    let owned = state
        .event_service
        .authorize_owner(event_id, auth_user.user_id)
        .await?;

    state
        .event_service
        .delete_event(owned)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Event deleted successfully!"))
}
