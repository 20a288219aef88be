use thiserror::Error;

use crate::domain::event::models::EventId;
use crate::domain::user::models::UserId;

/// Error type for EventId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventIdError {
    #[error("Invalid event id: {0}")]
    InvalidFormat(String),
}

/// Error type for event payload validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventDetailsError {
    #[error("Field '{0}' is required")]
    Missing(&'static str),
}

/// Top-level error type for all event-related operations
#[derive(Debug, Clone, Error)]
pub enum EventError {
    #[error("Invalid event ID: {0}")]
    InvalidEventId(#[from] EventIdError),

    #[error("Invalid event details: {0}")]
    InvalidDetails(#[from] EventDetailsError),

    #[error("Event not found: {0}")]
    NotFound(EventId),

    #[error("User {user_id} does not own event {event_id}")]
    NotOwner { event_id: EventId, user_id: UserId },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
