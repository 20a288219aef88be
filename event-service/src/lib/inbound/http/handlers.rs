use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::event::errors::EventError;
use crate::event::models::Event;
use crate::event::models::EventDetails;
use crate::user::errors::UserError;

pub mod cancel_registration;
pub mod create_event;
pub mod delete_event;
pub mod get_event;
pub mod list_events;
pub mod login;
pub mod register_for_event;
pub mod signup;
pub mod update_event;

/// Message sent with every 500; internal details are only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody::new(status, message.into(), Some(data))),
        )
    }
}

impl ApiSuccess<()> {
    /// A success carrying only a message.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, message.into(), None)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
}

impl ApiError {
    /// Log the cause and hide it from the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "Request failed");
        ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
    }

    /// Map a body extraction failure to a 400 with `message`.
    pub fn bad_body(rejection: JsonRejection, message: &str) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::<()>::new(status, message, None))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => {
                ApiError::Unauthorized("Could not authenticate user.".to_string())
            }
            UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("Email already registered".to_string())
            }
            UserError::InvalidUserId(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::BadRequest(err.to_string()),
            UserError::Hashing(_) | UserError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::InvalidEventId(_) => ApiError::BadRequest("Invalid ID".to_string()),
            EventError::InvalidDetails(_) => ApiError::BadRequest(err.to_string()),
            EventError::NotOwner { .. } => ApiError::Unauthorized("Unauthorized".to_string()),
            EventError::NotFound(_) | EventError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

/// The JSON envelope wrapping every response.
///
/// `data` is left out when there is nothing but a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, message: String, data: Option<T>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            message,
            data,
        }
    }
}

/// HTTP request body for creating or updating an event (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    name: String,
    description: String,
    location: String,
    date_time: DateTime<Utc>,
}

impl EventRequest {
    pub fn try_into_details(self) -> Result<EventDetails, EventError> {
        Ok(EventDetails::new(
            self.name,
            self.description,
            self.location,
            self.date_time,
        )?)
    }
}

/// Event as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub owner_id: i64,
}

impl From<&Event> for EventData {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.as_i64(),
            name: event.details.name().to_string(),
            description: event.details.description().to_string(),
            location: event.details.location().to_string(),
            date_time: event.details.date_time(),
            owner_id: event.owner_id.as_i64(),
        }
    }
}
