use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::event::errors::EventDetailsError;
use crate::domain::event::errors::EventError;
use crate::domain::event::errors::EventIdError;
use crate::domain::user::models::UserId;

/// Event aggregate entity.
///
/// `owner_id` is set from the creating identity and never changes; it alone
/// decides who may update or delete the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub details: EventDetails,
    pub owner_id: UserId,
}

/// Event unique identifier, assigned by the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub i64);

impl EventId {
    /// Parse an event ID from its decimal string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a 64-bit integer
    pub fn from_string(s: &str) -> Result<Self, EventIdError> {
        s.parse::<i64>()
            .map(EventId)
            .map_err(|e| EventIdError::InvalidFormat(format!("{}: {}", s, e)))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The client-editable part of an event.
///
/// All three text fields must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    name: String,
    description: String,
    location: String,
    date_time: DateTime<Utc>,
}

impl EventDetails {
    /// # Errors
    /// * `Missing` - A text field is empty
    pub fn new(
        name: String,
        description: String,
        location: String,
        date_time: DateTime<Utc>,
    ) -> Result<Self, EventDetailsError> {
        Ok(Self {
            name: Self::required("name", name)?,
            description: Self::required("description", description)?,
            location: Self::required("location", location)?,
            date_time,
        })
    }

    fn required(field: &'static str, value: String) -> Result<String, EventDetailsError> {
        if value.is_empty() {
            Err(EventDetailsError::Missing(field))
        } else {
            Ok(value)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date_time(&self) -> DateTime<Utc> {
        self.date_time
    }
}

/// Event row to be inserted; the id is assigned on insert
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub details: EventDetails,
    pub owner_id: UserId,
}

/// An event whose ownership by the requesting user has been checked.
///
/// Can only be built by `OwnedEvent::claim`, so holding one is proof that the
/// owner check ran. Update and delete accept nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedEvent(Event);

impl OwnedEvent {
    /// # Errors
    /// * `NotOwner` - `requester` did not create the event
    pub fn claim(event: Event, requester: UserId) -> Result<Self, EventError> {
        if event.owner_id == requester {
            Ok(Self(event))
        } else {
            Err(EventError::NotOwner {
                event_id: event.id,
                user_id: requester,
            })
        }
    }

    pub fn id(&self) -> EventId {
        self.0.id
    }

    pub fn event(&self) -> &Event {
        &self.0
    }

    /// Replace the editable fields, keeping id and owner.
    pub fn with_details(self, details: EventDetails) -> Event {
        Event { details, ..self.0 }
    }
}
