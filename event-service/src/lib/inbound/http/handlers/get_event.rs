use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::EventData;
use crate::domain::event::models::EventId;
use crate::inbound::http::router::AppState;

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    let event_id = EventId::from_string(&event_id)
        .map_err(|_| ApiError::BadRequest("Invalid ID".to_string()))?;

    state
        .event_service
        .get_event(event_id)
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::OK, "Event fetched", event.into()))
}
