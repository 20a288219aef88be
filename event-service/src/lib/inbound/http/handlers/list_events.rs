use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::EventData;
use crate::inbound::http::router::AppState;

pub async fn list_events(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EventData>>, ApiError> {
    state
        .event_service
        .list_events()
        .await
        .map_err(ApiError::from)
        .map(|events| {
            ApiSuccess::new(
                StatusCode::OK,
                "Events fetched",
                events.iter().map(EventData::from).collect(),
            )
        })
}
